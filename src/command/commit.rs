// cz-taxonomy - A validated commit taxonomy and the commit wizard built on it.
// Copyright (C) 2026 The cz-taxonomy authors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, version 3 of the License.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! The `commit` subcommand.

mod backend;

use clap::Parser;
use eyre::Result;
use inquire::{Confirm, CustomUserError, Select, Text, validator::Validation};
use serde::Serialize;
use tera::{Context, Tera};
use thiserror::Error;

use self::backend::{
    Backend, CustomCommandBackend, GitBackend, PrintBackend,
};
use super::{
    GlobalArgs,
    helpers::{ensure_in_git_worktree, load_config},
};
use crate::{
    config::{CommitType, Config, PromptKey, Scope},
    warning,
};

/// The size of a page in the terminal.
const PAGE_SIZE: usize = 15;

/// The commit message template.
const TEMPLATE: &str = include_str!("../../templates/COMMIT_EDITMSG");

/// The commit command.
#[derive(Debug, Parser)]
pub struct Commit {
    /// Print the commit message instead of calling `git commit`.
    #[arg(long, conflicts_with = "command")]
    print_only: bool,
    /// Run this command instead of `git commit`, replacing `$message`.
    #[arg(long, value_parser = clap::builder::NonEmptyStringValueParser::new())]
    command: Option<String>,
    /// Extra arguments to be passed to `git commit`.
    #[arg(last = true)]
    extra_args: Vec<String>,
}

/// Usage errors of `cz-taxonomy commit`.
#[derive(Debug, Error)]
pub enum CommitError {
    /// The commit template is invalid.
    #[error("Failed to parse the commit template")]
    Template(#[from] tera::Error),
}

/// A conventional commit message.
#[derive(Debug, Serialize)]
struct CommitMessage {
    /// The type of commit.
    r#type: String,
    /// The optional scope of the commit.
    scope: Option<String>,
    /// The separator between the header prefix and the subject.
    separator: String,
    /// The short commit description.
    subject: String,
    /// The optional long description.
    body: Option<String>,
    /// The prefix of the breaking change paragraph.
    breaking_prefix: String,
    /// The optional breaking change description.
    breaking_change: Option<String>,
    /// The prefix of the footer paragraph.
    footer_prefix: String,
    /// The optional footer.
    footer: Option<String>,
}

/// A commit type, displayed by its name in the type selection.
struct TypeChoice<'a>(&'a CommitType);

impl std::fmt::Display for TypeChoice<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0.name)
    }
}

/// An entry of the scope selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScopeChoice<'a> {
    /// A scope of the taxonomy.
    Declared(&'a Scope),
    /// The entry leading to the custom scope question.
    Custom,
}

impl std::fmt::Display for ScopeChoice<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Declared(scope) => f.write_str(&scope.name),
            Self::Custom => f.write_str("[custom]"),
        }
    }
}

impl super::Command for Commit {
    fn run(&self, global: &GlobalArgs) -> Result<()> {
        if !self.print_only {
            ensure_in_git_worktree()?;
        }

        let config = load_config(global)?;
        let tera = build_and_check_template()?;

        let commit_message = CommitMessage::run_wizard(&config)?;
        let message = commit_message.render(&tera)?;

        if !confirm_commit(&config, &message)? {
            warning!("The commit has been cancelled.");
            return Ok(());
        }

        let backend: Box<dyn Backend> = if self.print_only {
            Box::new(PrintBackend)
        } else if let Some(command) = &self.command {
            Box::new(CustomCommandBackend::new(command)?)
        } else {
            Box::new(GitBackend::new(&self.extra_args))
        };

        backend.call(&message)?;

        Ok(())
    }
}

impl CommitMessage {
    /// Runs the wizard to build a commit message from user input.
    #[tracing::instrument(name = "commit_wizard", level = "trace", skip_all)]
    fn run_wizard(config: &Config) -> Result<Self> {
        let r#type = ask_type(config)?;
        tracing::debug!(commit_type = %r#type, "commit type selected");

        Ok(Self {
            scope: ask_scope(config, &r#type)?,
            separator: config.subject_separator().to_owned(),
            subject: ask_subject(config)?,
            body: ask_body(config)?,
            breaking_prefix: config.breaking_prefix().to_owned(),
            breaking_change: ask_breaking_change(config, &r#type)?,
            footer_prefix: config.footer_prefix().to_owned(),
            footer: ask_footer(config)?,
            r#type,
        })
    }

    /// Builds a dummy commit message.
    fn dummy() -> Self {
        Self {
            r#type: String::from("dummy"),
            scope: Some(String::from("dummy")),
            separator: String::from(": "),
            subject: String::from("dummy commit"),
            body: Some(String::from("Dummy body.")),
            breaking_prefix: String::from("BREAKING CHANGE:"),
            breaking_change: Some(String::from("Dummy breaking change.")),
            footer_prefix: String::from("ISSUES CLOSED:"),
            footer: Some(String::from("#0")),
        }
    }

    /// Renders the commit message.
    fn render(&self, tera: &Tera) -> Result<String> {
        let context = Context::from_serialize(self)?;
        let message = tera
            .render("templates.commit", &context)
            .map_err(CommitError::Template)?;

        Ok(message.trim_end().to_owned())
    }
}

/// Loads the commit template and checks for errors.
fn build_and_check_template() -> Result<Tera> {
    let mut tera = Tera::default();

    tera.add_raw_template("templates.commit", TEMPLATE)
        .map_err(CommitError::Template)?;

    // Render a dummy commit to catch early any variable error.
    CommitMessage::dummy().render(&tera)?;

    Ok(tera)
}

/// Returns the message of a question, ready to be used as a prompt.
fn prompt(config: &Config, key: PromptKey) -> &str {
    config.message(key).trim_end()
}

/// Asks the user which type of commit they want.
fn ask_type(config: &Config) -> Result<String> {
    let choices = config.types().iter().map(TypeChoice).collect();

    let choice = Select::new(prompt(config, PromptKey::Type), choices)
        .with_page_size(PAGE_SIZE)
        .with_formatter(&|choice| choice.value.0.value.clone())
        .prompt()?;

    Ok(choice.0.value.clone())
}

/// Asks the user to which scope the changes are applicable.
fn ask_scope(config: &Config, commit_type: &str) -> Result<Option<String>> {
    if config.is_skipped(PromptKey::Scope) {
        return Ok(None);
    }

    let choices = scope_choices(config, commit_type)?;

    if choices.is_empty() {
        return Ok(None);
    }

    let choice = Select::new(prompt(config, PromptKey::Scope), choices)
        .with_help_message(
            "↑↓ to move, enter to select, type to filter, ESC to leave empty",
        )
        .with_page_size(PAGE_SIZE)
        .prompt_skippable()?;

    match choice {
        Some(ScopeChoice::Declared(scope)) => Ok(Some(scope.name.clone())),
        Some(ScopeChoice::Custom) => ask_custom_scope(config),
        None => Ok(None),
    }
}

/// Returns the entries of the scope selection for `commit_type`.
fn scope_choices<'a>(
    config: &'a Config,
    commit_type: &str,
) -> Result<Vec<ScopeChoice<'a>>> {
    let allow_custom = config.allow_custom_scopes()
        && !config.is_skipped(PromptKey::CustomScope);

    let mut choices: Vec<_> = config
        .scopes_for(commit_type)?
        .iter()
        .map(ScopeChoice::Declared)
        .collect();

    if allow_custom {
        choices.push(ScopeChoice::Custom);
    }

    Ok(choices)
}

/// Asks the user for a scope that is not in the list.
fn ask_custom_scope(config: &Config) -> Result<Option<String>> {
    Ok(Text::new(prompt(config, PromptKey::CustomScope))
        .with_help_message("Press ESC or leave empty to omit the scope.")
        .prompt_skippable()?
        .map(|scope| scope.trim().to_owned())
        .filter(|scope| !scope.is_empty()))
}

/// Asks the user for the commit subject.
fn ask_subject(config: &Config) -> Result<String> {
    let limit = config.subject_limit();

    Ok(Text::new(prompt(config, PromptKey::Subject))
        .with_help_message(&format!("At most {limit} characters."))
        .with_validator(move |subject: &str| validate_subject(subject, limit))
        .prompt()?
        .trim()
        .to_owned())
}

/// Asks the user for an optional long description.
fn ask_body(config: &Config) -> Result<Option<String>> {
    if config.is_skipped(PromptKey::Body) {
        return Ok(None);
    }

    Ok(Text::new(prompt(config, PromptKey::Body))
        .with_help_message("Press ESC or leave empty to omit the body.")
        .prompt_skippable()?
        .as_deref()
        .and_then(format_body))
}

/// Asks the user for an optional breaking change description.
///
/// The question is only asked for commit types allowing breaking changes.
fn ask_breaking_change(
    config: &Config,
    commit_type: &str,
) -> Result<Option<String>> {
    if config.is_skipped(PromptKey::Breaking)
        || !config.is_breaking_allowed(commit_type)?
    {
        return Ok(None);
    }

    Ok(Text::new(prompt(config, PromptKey::Breaking))
        .with_help_message(
            "Press ESC or leave empty if there are no breaking changes.",
        )
        .prompt_skippable()?
        .map(|breaking_change| breaking_change.trim().to_owned())
        .filter(|breaking_change| !breaking_change.is_empty()))
}

/// Asks the user for an optional footer.
fn ask_footer(config: &Config) -> Result<Option<String>> {
    if config.is_skipped(PromptKey::Footer) {
        return Ok(None);
    }

    Ok(Text::new(prompt(config, PromptKey::Footer))
        .with_help_message("Press ESC or leave empty to omit the footer.")
        .prompt_skippable()?
        .map(|footer| footer.trim().to_owned())
        .filter(|footer| !footer.is_empty()))
}

/// Shows the commit message and asks for a confirmation.
fn confirm_commit(config: &Config, message: &str) -> Result<bool> {
    if config.is_skipped(PromptKey::ConfirmCommit) {
        return Ok(true);
    }

    eprintln!("\n{message}\n");

    Ok(Confirm::new(prompt(config, PromptKey::ConfirmCommit))
        .with_default(true)
        .prompt()?)
}

/// Validates the commit subject.
#[expect(
    clippy::unnecessary_wraps,
    reason = "The signature of the function is imposed by Inquire."
)]
fn validate_subject(
    subject: &str,
    limit: usize,
) -> Result<Validation, CustomUserError> {
    let subject = subject.trim();

    if subject.is_empty() {
        Ok(Validation::Invalid("The subject must not be empty".into()))
    } else if subject.chars().count() > limit {
        Ok(Validation::Invalid(
            format!("The subject must not be longer than {limit} characters")
                .into(),
        ))
    } else {
        Ok(Validation::Valid)
    }
}

/// Turns the `|` separators of the body into line breaks.
///
/// Returns `None` for an empty body.
fn format_body(body: &str) -> Option<String> {
    let body = body
        .split('|')
        .map(str::trim)
        .collect::<Vec<_>>()
        .join("\n");

    let body = body.trim();
    (!body.is_empty()).then(|| body.to_owned())
}

#[cfg(test)]
mod test {
    #![allow(clippy::pedantic, clippy::restriction)]

    use indoc::indoc;

    use super::*;
    use crate::config::Declaration;

    fn message(r#type: &str, subject: &str) -> CommitMessage {
        CommitMessage {
            r#type: r#type.to_owned(),
            scope: None,
            separator: String::from(": "),
            subject: subject.to_owned(),
            body: None,
            breaking_prefix: String::from("BREAKING CHANGE:"),
            breaking_change: None,
            footer_prefix: String::from("ISSUES CLOSED:"),
            footer: None,
        }
    }

    fn render(message: &CommitMessage) -> String {
        message.render(&build_and_check_template().unwrap()).unwrap()
    }

    #[test]
    fn renders_a_header_without_scope() {
        assert_eq!(
            render(&message("docs", "describe the recovery flow")),
            "docs: describe the recovery flow"
        );
    }

    #[test]
    fn renders_a_header_with_scope() {
        let mut message = message("feat", "add a restart policy");
        message.scope = Some(String::from("recovery"));

        assert_eq!(render(&message), "feat(recovery): add a restart policy");
    }

    #[test]
    fn renders_the_separator_from_the_config() {
        let mut message = message("fix", "stop leaking sockets");
        message.separator = String::from(" - ");

        assert_eq!(render(&message), "fix - stop leaking sockets");
    }

    #[test]
    fn renders_all_paragraphs() {
        let mut message = message("feat", "send alerts to a webhook");
        message.scope = Some(String::from("webhook"));
        message.body = Some(String::from("First line.\nSecond line."));
        message.breaking_change = Some(String::from("the URL is required"));
        message.footer = Some(String::from("#31, #34"));

        assert_eq!(
            render(&message),
            indoc! {"
                feat(webhook): send alerts to a webhook

                First line.
                Second line.

                BREAKING CHANGE: the URL is required

                ISSUES CLOSED: #31, #34"
            }
        );
    }

    #[test]
    fn renders_only_present_paragraphs() {
        let mut message = message("chore", "bump the base image");
        message.footer = Some(String::from("#12"));

        assert_eq!(
            render(&message),
            "chore: bump the base image\n\nISSUES CLOSED: #12"
        );
    }

    #[test]
    fn renders_special_characters_verbatim() {
        let mut message = message("fix", "handle <none> & \"quoted\" names");
        message.scope = Some(String::from("docker"));

        assert_eq!(
            render(&message),
            "fix(docker): handle <none> & \"quoted\" names"
        );
    }

    #[test]
    fn subject_must_not_be_empty() {
        assert!(matches!(
            validate_subject("   ", 100),
            Ok(Validation::Invalid(_))
        ));
    }

    #[test]
    fn subject_must_fit_the_limit() {
        assert!(matches!(
            validate_subject("a short subject", 15),
            Ok(Validation::Valid)
        ));
        assert!(matches!(
            validate_subject("a short subject!", 15),
            Ok(Validation::Invalid(_))
        ));
    }

    #[test]
    fn subject_limit_counts_characters() {
        assert!(matches!(
            validate_subject("éééé", 4),
            Ok(Validation::Valid)
        ));
    }

    fn config_with_scope(name: &str, allow_custom_scopes: bool) -> Config {
        let mut declaration = Declaration::from(&Config::default());
        declaration.allow_custom_scopes = allow_custom_scopes;
        declaration.scopes.push(Scope {
            name: name.to_owned(),
        });
        Config::try_from(declaration).unwrap()
    }

    #[test]
    fn scope_choices_list_declared_scopes_only() {
        let config = config_with_scope("[custom]", false);
        let choices = scope_choices(&config, "docs").unwrap();

        assert_eq!(choices.len(), 12);
        assert!(
            choices
                .iter()
                .all(|choice| matches!(choice, ScopeChoice::Declared(_)))
        );
    }

    #[test]
    fn scope_choices_end_with_the_custom_entry() {
        let config = config_with_scope("[custom]", true);
        let choices = scope_choices(&config, "docs").unwrap();

        assert_eq!(choices.last(), Some(&ScopeChoice::Custom));
        assert!(matches!(
            choices[choices.len() - 2],
            ScopeChoice::Declared(Scope { name }) if name == "[custom]"
        ));
    }

    #[test]
    fn scope_choices_skip_the_custom_entry_with_the_question() {
        let mut declaration = Declaration::from(&Config::default());
        declaration.allow_custom_scopes = true;
        declaration.skip_questions = vec![String::from("customScope")];
        let config = Config::try_from(declaration).unwrap();

        let choices = scope_choices(&config, "feat").unwrap();

        assert_eq!(choices.len(), 4);
        assert!(!choices.contains(&ScopeChoice::Custom));
    }

    #[test]
    fn scope_choices_for_an_unknown_type() {
        assert!(scope_choices(&Config::default(), "wip").is_err());
    }

    #[test]
    fn declared_and_custom_scopes_display_their_label() {
        let scope = Scope {
            name: String::from("webhook"),
        };

        assert_eq!(ScopeChoice::Declared(&scope).to_string(), "webhook");
        assert_eq!(ScopeChoice::Custom.to_string(), "[custom]");
    }

    #[test]
    fn body_pipes_become_line_breaks() {
        assert_eq!(
            format_body("First line. | Second line.|Third"),
            Some(String::from("First line.\nSecond line.\nThird"))
        );
    }

    #[test]
    fn empty_body_is_omitted() {
        assert_eq!(format_body(""), None);
        assert_eq!(format_body(" | "), None);
    }
}
