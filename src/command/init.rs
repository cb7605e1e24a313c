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

//! The `init` subcommand.

use std::{fs, path::PathBuf};

use askama::Template;
use clap::Parser;
use eyre::{Result, bail};
use inquire::{Confirm, CustomType, CustomUserError, validator::Validation};
use thiserror::Error;

use super::{
    GlobalArgs,
    helpers::{ensure_in_git_worktree, target_config_file},
};
use crate::{
    config::{Config, Declaration},
    hint, success,
};

/// The init command.
#[derive(Debug, Parser)]
pub struct Init {
    /// Use the built-in taxonomy without asking any question.
    #[arg(long, short = 'd')]
    default: bool,
    /// Overwrite an existing configuration.
    #[arg(long, short = 'f')]
    force: bool,
}

/// Usage errors of `cz-taxonomy init`.
#[derive(Debug, Error)]
pub enum InitError {
    /// A configuration already exists.
    #[error("There is already a configuration at {}", path.display())]
    ExistingConfig {
        /// The path of the existing configuration.
        path: PathBuf,
    },
}

/// A documented `cz-taxonomy.toml`.
///
/// Every string is stored already quoted as a TOML string.
#[derive(Debug, Template)]
#[template(path = "cz-taxonomy.toml.jinja", escape = "none")]
struct ConfigFile {
    /// The version of the declaration format.
    version: String,
    /// Whether custom scopes are allowed.
    allow_custom_scopes: bool,
    /// The types for which a breaking change can be declared.
    allow_breaking_changes: Vec<String>,
    /// The skipped questions.
    skip_questions: Vec<String>,
    /// The maximum length of the subject.
    subject_limit: i64,
    /// The subject separator.
    subject_separator: String,
    /// The prefix of the breaking change paragraph.
    breaking_prefix: String,
    /// The prefix of the footer paragraph.
    footer_prefix: String,
    /// The commit types, as `(value, name)`.
    types: Vec<(String, String)>,
    /// The global scopes.
    scopes: Vec<String>,
    /// The scope overrides, as `(type, scopes)`.
    scope_overrides: Vec<(String, Vec<String>)>,
    /// The messages, as `(key, message)`.
    messages: Vec<(String, String)>,
}

/// Answers to the init wizard.
#[derive(Debug)]
struct Answers {
    /// Whether custom scopes are allowed.
    allow_custom_scopes: bool,
    /// The maximum length of the subject.
    subject_limit: i64,
}

impl super::Command for Init {
    fn run(&self, global: &GlobalArgs) -> Result<()> {
        if global.config.is_none() {
            ensure_in_git_worktree()?;
        }

        let path = target_config_file(global)?;

        if !self.force && path.exists() {
            bail!(InitError::ExistingConfig { path });
        }

        let mut declaration = Declaration::from(&Config::default());

        if !self.default {
            let answers = Answers::run_wizard()?;
            declaration.allow_custom_scopes = answers.allow_custom_scopes;
            declaration.subject_limit = answers.subject_limit;
        }

        tracing::info!(?path, "writing the configuration");
        fs::write(&path, format!("{}\n", ConfigFile::from(declaration)))?;

        success!("{} has been created!", path.display());
        hint!("You can now edit it to adjust the taxonomy.");

        Ok(())
    }
}

impl Answers {
    /// Runs the wizard to adjust the built-in taxonomy.
    fn run_wizard() -> Result<Self> {
        let allow_custom_scopes =
            Confirm::new("Allow scopes that are not in the list?")
                .with_default(false)
                .prompt()?;

        let subject_limit =
            CustomType::<i64>::new("Maximum length of the subject")
                .with_default(100)
                .with_error_message("Please type a number")
                .with_validator(
                    |limit: &i64| -> Result<Validation, CustomUserError> {
                        if *limit > 0 {
                            Ok(Validation::Valid)
                        } else {
                            Ok(Validation::Invalid(
                                "The limit must be a positive number".into(),
                            ))
                        }
                    },
                )
                .prompt()?;

        Ok(Self {
            allow_custom_scopes,
            subject_limit,
        })
    }
}

impl From<Declaration> for ConfigFile {
    fn from(declaration: Declaration) -> Self {
        Self {
            version: declaration.version,
            allow_custom_scopes: declaration.allow_custom_scopes,
            allow_breaking_changes: quote_all(
                &declaration.allow_breaking_changes,
            ),
            skip_questions: quote_all(&declaration.skip_questions),
            subject_limit: declaration.subject_limit,
            subject_separator: quote(&declaration.subject_separator),
            breaking_prefix: quote(&declaration.breaking_prefix),
            footer_prefix: quote(&declaration.footer_prefix),
            types: declaration
                .types
                .iter()
                .map(|commit_type| {
                    (quote(&commit_type.value), quote(&commit_type.name))
                })
                .collect(),
            scopes: declaration
                .scopes
                .iter()
                .map(|scope| quote(&scope.name))
                .collect(),
            scope_overrides: declaration
                .scope_overrides
                .iter()
                .map(|(commit_type, scopes)| {
                    (
                        quote(commit_type),
                        scopes.iter().map(|scope| quote(&scope.name)).collect(),
                    )
                })
                .collect(),
            messages: declaration
                .messages
                .iter()
                .map(|(key, message)| (key.clone(), quote(message)))
                .collect(),
        }
    }
}

/// Quotes a string as a TOML string.
fn quote(s: &str) -> String {
    toml::Value::String(s.to_owned()).to_string()
}

/// Quotes a list of strings.
fn quote_all(strings: &[String]) -> Vec<String> {
    strings.iter().map(|s| quote(s)).collect()
}
