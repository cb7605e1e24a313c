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

//! Commit taxonomy configuration.
//!
//! The configuration is declared in a `cz-taxonomy.toml` file at the root of
//! the repository. It is parsed into a [`Declaration`], then validated into a
//! [`Config`]. A [`Config`] is never mutated after construction: consumers
//! borrow it for as long as they need it.

mod prompt;
mod v0_1;

pub use prompt::{Messages, PromptKey, UnknownKeyError};
pub use v0_1::{CommitType, Config as Declaration, Scope};

use std::{
    fs, io,
    path::{Path, PathBuf},
    process::Command,
};

use indexmap::{IndexMap, indexmap};
use itertools::Itertools as _;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::tracing::LogResult as _;

/// An error that can occur when loading the configuration.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The path of the configuration file cannot be resolved.
    #[error("Failed to get the configuration file path")]
    ConfigFileError(#[from] ConfigFileError),
    /// The configuration file cannot be read.
    #[error("Failed to read {}", path.display())]
    ReadError {
        /// The path of the configuration file.
        path: PathBuf,
        /// The OS error.
        #[source]
        source: io::Error,
    },
    /// The configuration file is invalid.
    #[error("Invalid configuration in {}", path.display())]
    InvalidConfig {
        /// The path of the configuration file.
        path: PathBuf,
        /// The parsing or validation error.
        #[source]
        source: FromTomlError,
    },
}

/// An error that can occur when parsing the TOML.
#[derive(Debug, Error)]
pub enum FromTomlError {
    /// The declaration format version is not supported.
    #[error("Configuration version {0} is not supported")]
    UnsupportedVersion(String),
    /// The TOML does not match the declaration format.
    #[error("Failed to parse into a valid configuration")]
    ParseError(#[from] toml::de::Error),
    /// The declaration breaks the schema.
    #[error("The configuration does not follow the schema")]
    SchemaError(#[from] SchemaError),
}

/// A violation of the configuration schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// No commit type is declared.
    #[error("No commit type is declared")]
    NoTypes,
    /// A commit type has an empty value.
    #[error("The commit type at position {index} has an empty value")]
    EmptyTypeValue {
        /// The position of the type in the list.
        index: usize,
    },
    /// A commit type has an empty name.
    #[error("The commit type `{value}` has an empty name")]
    EmptyTypeName {
        /// The value of the type.
        value: String,
    },
    /// A commit type value has leading or trailing whitespace.
    #[error("The commit type `{value}` has surrounding whitespace")]
    PaddedTypeValue {
        /// The value of the type.
        value: String,
    },
    /// Two commit types share the same value.
    #[error("The commit type `{value}` is declared more than once")]
    DuplicateType {
        /// The duplicated value.
        value: String,
    },
    /// A global scope has an empty name.
    #[error("The scope at position {index} has an empty name")]
    EmptyScopeName {
        /// The position of the scope in the list.
        index: usize,
    },
    /// A scope name has leading or trailing whitespace.
    #[error("The scope `{name}` has surrounding whitespace")]
    PaddedScopeName {
        /// The name of the scope.
        name: String,
    },
    /// Two global scopes share the same name.
    #[error("The scope `{name}` is declared more than once")]
    DuplicateScope {
        /// The duplicated name.
        name: String,
    },
    /// A scope override is declared for an unknown commit type.
    #[error(
        "Scopes are overridden for the unknown commit type `{commit_type}`"
    )]
    UnknownOverrideType {
        /// The unknown type.
        commit_type: String,
    },
    /// A scope override contains an empty scope name.
    #[error("The scope override for `{commit_type}` contains an empty name")]
    EmptyOverrideScope {
        /// The type of the override.
        commit_type: String,
    },
    /// A scope override lists the same scope twice.
    #[error(
        "The scope override for `{commit_type}` lists `{scope}` more than once"
    )]
    DuplicateOverrideScope {
        /// The type of the override.
        commit_type: String,
        /// The duplicated scope.
        scope: String,
    },
    /// Breaking changes are allowed for an unknown commit type.
    #[error(
        "Breaking changes are allowed for the unknown type `{commit_type}`"
    )]
    UnknownBreakingType {
        /// The unknown type.
        commit_type: String,
    },
    /// An unknown question is skipped.
    #[error("Cannot skip the unknown question `{key}`")]
    UnknownQuestion {
        /// The unknown question.
        key: String,
    },
    /// A mandatory question is skipped.
    #[error("The question `{key}` cannot be skipped")]
    MandatoryQuestion {
        /// The mandatory question.
        key: PromptKey,
    },
    /// The subject limit is not a positive integer.
    #[error("The subject limit must be a positive integer, got {limit}")]
    InvalidSubjectLimit {
        /// The declared limit.
        limit: i64,
    },
    /// A prompt message is missing.
    #[error("The message for `{key}` is missing")]
    MissingMessage {
        /// The key of the missing message.
        key: PromptKey,
    },
    /// A prompt message is empty.
    #[error("The message for `{key}` is empty")]
    EmptyMessage {
        /// The key of the empty message.
        key: PromptKey,
    },
    /// A message is declared for an unknown prompt key.
    #[error("A message is declared for the unknown key `{key}`")]
    UnknownMessage {
        /// The unknown key.
        key: String,
    },
}

/// An error for a lookup of a commit type that is not declared.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown commit type `{value}`")]
pub struct UnknownTypeError {
    /// The rejected type.
    pub value: String,
}

/// An error that can occur when building the config file path.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// The root of the repository cannot be found.
    #[error("Failed to get the Git repo root")]
    RepoRootError(#[from] RepoRootError),
}

/// An error that can occur when getting the Git repo root.
#[derive(Debug, Error)]
pub enum RepoRootError {
    /// Git cannot be run.
    #[error("Failed to run the git command")]
    CannotRunGit(#[from] io::Error),
    /// Git has returned an error.
    #[error("{0}")]
    GitError(String),
    /// The output of Git is not UTF-8.
    #[error("The output of the git command is not proper UTF-8")]
    EncodingError(#[from] std::string::FromUtf8Error),
}

/// A validated commit taxonomy.
///
/// A `Config` can only be obtained through [`Config::default`] or by
/// validating a [`Declaration`], so every value upholds the schema: unique
/// and non-empty types and scopes, overrides keyed by declared types, a
/// complete set of messages and a positive subject limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// The version of the declaration format.
    version: String,
    /// The commit types, in prompt order.
    types: Vec<CommitType>,
    /// The global scopes, in prompt order.
    scopes: Vec<Scope>,
    /// Per-type replacements of the global scopes.
    scope_overrides: IndexMap<String, Vec<Scope>>,
    /// Whether the committer can enter a scope that is not listed.
    allow_custom_scopes: bool,
    /// The types for which a breaking change can be declared.
    allow_breaking_changes: Vec<String>,
    /// The questions the wizard does not ask.
    skip_questions: Vec<PromptKey>,
    /// The maximum length of the subject.
    subject_limit: usize,
    /// The separator between the header prefix and the subject.
    subject_separator: String,
    /// The prefix of the breaking change paragraph.
    breaking_prefix: String,
    /// The prefix of the footer paragraph.
    footer_prefix: String,
    /// The prompt messages.
    messages: Messages,
}

/// A minimal configuration to get the version.
///
/// The declaration format can evolve with time. It is versioned for this
/// purpose, so that the proper parser can be selected. This struct allows to
/// parse any declaration as long as it contains a version field.
#[derive(Debug, Serialize, Deserialize)]
struct MinimalConfig {
    /// The version of the declaration format.
    version: String,
}

/// The name of the configuration file.
pub const CONFIG_FILE_NAME: &str = "cz-taxonomy.toml";
/// The current version of the declaration format.
pub const VERSION: &str = "0.1";

impl Default for Config {
    #[expect(
        clippy::expect_used,
        reason = "The built-in declaration is validated by the test suite."
    )]
    fn default() -> Self {
        Self::try_from(builtin_declaration())
            .expect("the built-in declaration is invalid")
    }
}

impl Config {
    /// Loads the configuration of the repo or fallbacks to the default.
    #[tracing::instrument(name = "load_config", level = "trace")]
    pub fn load() -> Result<Self, LoadError> {
        let path = config_file().log_err()?;

        match fs::read_to_string(&path) {
            Ok(toml) => Self::parse_file(path, &toml),

            Err(error) => match error.kind() {
                io::ErrorKind::NotFound => {
                    tracing::info!(
                        ?path,
                        "no configuration, using the default"
                    );
                    Ok(Self::default())
                }
                _ => Err(LoadError::ReadError {
                    path,
                    source: error,
                })
                .log_err(),
            },
        }
    }

    /// Loads the configuration from an explicit file.
    #[tracing::instrument(name = "load_config_from", level = "trace")]
    pub fn load_from(path: &Path) -> Result<Self, LoadError> {
        let toml = fs::read_to_string(path)
            .map_err(|source| LoadError::ReadError {
                path: path.to_owned(),
                source,
            })
            .log_err()?;

        Self::parse_file(path.to_owned(), &toml)
    }

    /// Builds the configuration from its TOML representation.
    pub fn from_toml(toml: &str) -> Result<Self, FromTomlError> {
        let minimal_config: MinimalConfig = toml::from_str(toml)?;

        match minimal_config.version.as_str() {
            VERSION => {
                let declaration: Declaration = toml::from_str(toml)?;
                let config = Self::try_from(declaration)?;

                for (commit_type, scope) in
                    config.undeclared_override_scopes()
                {
                    tracing::warn!(
                        commit_type,
                        scope,
                        "override lists a scope absent from the global scopes"
                    );
                }

                Ok(config)
            }
            version => {
                Err(FromTomlError::UnsupportedVersion(version.to_owned()))
            }
        }
    }

    /// Parses the content of a configuration file.
    fn parse_file(path: PathBuf, toml: &str) -> Result<Self, LoadError> {
        tracing::debug!(?path, "parsing the configuration");

        Self::from_toml(toml)
            .map_err(|source| LoadError::InvalidConfig { path, source })
            .log_err()
    }

    /// Returns the version of the declaration format.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Returns the commit types, in prompt order.
    pub fn types(&self) -> &[CommitType] {
        &self.types
    }

    /// Returns the global scopes, in prompt order.
    pub fn scopes(&self) -> &[Scope] {
        &self.scopes
    }

    /// Returns the per-type scope overrides.
    pub const fn scope_overrides(&self) -> &IndexMap<String, Vec<Scope>> {
        &self.scope_overrides
    }

    /// Returns whether the committer can enter a scope that is not listed.
    pub const fn allow_custom_scopes(&self) -> bool {
        self.allow_custom_scopes
    }

    /// Returns the types for which a breaking change can be declared.
    pub fn allow_breaking_changes(&self) -> &[String] {
        &self.allow_breaking_changes
    }

    /// Returns the questions the wizard does not ask.
    pub fn skip_questions(&self) -> &[PromptKey] {
        &self.skip_questions
    }

    /// Returns whether the wizard skips the question `key`.
    pub fn is_skipped(&self, key: PromptKey) -> bool {
        self.skip_questions.contains(&key)
    }

    /// Returns the maximum length of the subject, in characters.
    pub const fn subject_limit(&self) -> usize {
        self.subject_limit
    }

    /// Returns the separator between the header prefix and the subject.
    pub fn subject_separator(&self) -> &str {
        &self.subject_separator
    }

    /// Returns the prefix of the breaking change paragraph.
    pub fn breaking_prefix(&self) -> &str {
        &self.breaking_prefix
    }

    /// Returns the prefix of the footer paragraph.
    pub fn footer_prefix(&self) -> &str {
        &self.footer_prefix
    }

    /// Returns the prompt messages.
    pub const fn messages(&self) -> &Messages {
        &self.messages
    }

    /// Returns the declared commit type with the given value.
    pub fn commit_type(
        &self,
        value: &str,
    ) -> Result<&CommitType, UnknownTypeError> {
        self.types
            .iter()
            .find(|commit_type| commit_type.value == value)
            .ok_or_else(|| UnknownTypeError {
                value: value.to_owned(),
            })
    }

    /// Returns the scopes to offer for a commit type.
    ///
    /// This is the override list of the type if there is one, the global
    /// scopes otherwise.
    pub fn scopes_for(
        &self,
        commit_type: &str,
    ) -> Result<&[Scope], UnknownTypeError> {
        self.commit_type(commit_type)?;

        Ok(self
            .scope_overrides
            .get(commit_type)
            .map_or(self.scopes.as_slice(), Vec::as_slice))
    }

    /// Returns whether a breaking change can be declared for a commit type.
    pub fn is_breaking_allowed(
        &self,
        commit_type: &str,
    ) -> Result<bool, UnknownTypeError> {
        self.commit_type(commit_type)?;

        Ok(self
            .allow_breaking_changes
            .iter()
            .any(|allowed| allowed == commit_type))
    }

    /// Returns the message of a question.
    pub fn message(&self, key: PromptKey) -> &str {
        self.messages.get(key)
    }

    /// Returns the message of a question given by its configuration name.
    pub fn message_for(&self, key: &str) -> Result<&str, UnknownKeyError> {
        Ok(self.message(key.parse()?))
    }

    /// Returns the scopes listed in overrides but absent from the global
    /// scopes, as `(commit type, scope)` pairs.
    pub fn undeclared_override_scopes(&self) -> Vec<(&str, &str)> {
        self.scope_overrides
            .iter()
            .flat_map(|(commit_type, scopes)| {
                scopes.iter().map(move |scope| (commit_type, scope))
            })
            .filter(|(_, scope)| !self.scopes.contains(*scope))
            .map(|(commit_type, scope)| {
                (commit_type.as_str(), scope.name.as_str())
            })
            .collect()
    }
}

impl TryFrom<Declaration> for Config {
    type Error = SchemaError;

    #[tracing::instrument(
        name = "validate_declaration",
        level = "trace",
        skip_all
    )]
    fn try_from(declaration: Declaration) -> Result<Self, Self::Error> {
        let Declaration {
            version,
            allow_custom_scopes,
            allow_breaking_changes,
            skip_questions,
            subject_limit,
            subject_separator,
            breaking_prefix,
            footer_prefix,
            types,
            scopes,
            scope_overrides,
            messages,
        } = declaration;

        check_types(&types)?;
        check_scopes(&scopes)?;
        check_scope_overrides(&scope_overrides, &types)?;
        check_breaking_types(&allow_breaking_changes, &types)?;

        let skip_questions = parse_skip_questions(&skip_questions)?;
        let subject_limit = usize::try_from(subject_limit)
            .ok()
            .filter(|limit| *limit > 0)
            .ok_or(SchemaError::InvalidSubjectLimit {
                limit: subject_limit,
            })?;
        let messages = Messages::try_from(messages)?;

        tracing::debug!(
            types = types.len(),
            scopes = scopes.len(),
            overrides = scope_overrides.len(),
            "declaration validated"
        );

        Ok(Self {
            version,
            types,
            scopes,
            scope_overrides,
            allow_custom_scopes,
            allow_breaking_changes,
            skip_questions,
            subject_limit,
            subject_separator,
            breaking_prefix,
            footer_prefix,
            messages,
        })
    }
}

impl From<&Config> for Declaration {
    fn from(config: &Config) -> Self {
        Self {
            version: config.version.clone(),
            allow_custom_scopes: config.allow_custom_scopes,
            allow_breaking_changes: config.allow_breaking_changes.clone(),
            skip_questions: config
                .skip_questions
                .iter()
                .map(|key| key.as_str().to_owned())
                .collect(),
            subject_limit: i64::try_from(config.subject_limit)
                .unwrap_or(i64::MAX),
            subject_separator: config.subject_separator.clone(),
            breaking_prefix: config.breaking_prefix.clone(),
            footer_prefix: config.footer_prefix.clone(),
            types: config.types.clone(),
            scopes: config.scopes.clone(),
            scope_overrides: config.scope_overrides.clone(),
            messages: (&config.messages).into(),
        }
    }
}

/// Checks the commit types are non-empty and unique.
fn check_types(types: &[CommitType]) -> Result<(), SchemaError> {
    if types.is_empty() {
        return Err(SchemaError::NoTypes);
    }

    for (index, commit_type) in types.iter().enumerate() {
        if commit_type.value.trim().is_empty() {
            return Err(SchemaError::EmptyTypeValue { index });
        }

        if is_padded(&commit_type.value) {
            return Err(SchemaError::PaddedTypeValue {
                value: commit_type.value.clone(),
            });
        }

        if commit_type.name.trim().is_empty() {
            return Err(SchemaError::EmptyTypeName {
                value: commit_type.value.clone(),
            });
        }
    }

    match types.iter().map(|commit_type| &commit_type.value).duplicates().next()
    {
        Some(value) => Err(SchemaError::DuplicateType {
            value: value.clone(),
        }),
        None => Ok(()),
    }
}

/// Checks the global scopes are non-empty and unique.
fn check_scopes(scopes: &[Scope]) -> Result<(), SchemaError> {
    if let Some(index) = empty_scope(scopes) {
        return Err(SchemaError::EmptyScopeName { index });
    }

    if let Some(name) = padded_scope(scopes) {
        return Err(SchemaError::PaddedScopeName {
            name: name.to_owned(),
        });
    }

    match duplicate_scope(scopes) {
        Some(name) => Err(SchemaError::DuplicateScope {
            name: name.to_owned(),
        }),
        None => Ok(()),
    }
}

/// Checks the overrides are keyed by declared types and list unique scopes.
fn check_scope_overrides(
    scope_overrides: &IndexMap<String, Vec<Scope>>,
    types: &[CommitType],
) -> Result<(), SchemaError> {
    for (commit_type, scopes) in scope_overrides {
        if !is_declared(types, commit_type) {
            return Err(SchemaError::UnknownOverrideType {
                commit_type: commit_type.clone(),
            });
        }

        if empty_scope(scopes).is_some() {
            return Err(SchemaError::EmptyOverrideScope {
                commit_type: commit_type.clone(),
            });
        }

        if let Some(name) = padded_scope(scopes) {
            return Err(SchemaError::PaddedScopeName {
                name: name.to_owned(),
            });
        }

        if let Some(scope) = duplicate_scope(scopes) {
            return Err(SchemaError::DuplicateOverrideScope {
                commit_type: commit_type.clone(),
                scope: scope.to_owned(),
            });
        }
    }

    Ok(())
}

/// Checks breaking changes are only allowed for declared types.
fn check_breaking_types(
    allow_breaking_changes: &[String],
    types: &[CommitType],
) -> Result<(), SchemaError> {
    match allow_breaking_changes
        .iter()
        .find(|commit_type| !is_declared(types, commit_type))
    {
        Some(commit_type) => Err(SchemaError::UnknownBreakingType {
            commit_type: commit_type.clone(),
        }),
        None => Ok(()),
    }
}

/// Parses the skipped questions, rejecting mandatory ones.
fn parse_skip_questions(
    skip_questions: &[String],
) -> Result<Vec<PromptKey>, SchemaError> {
    skip_questions
        .iter()
        .unique()
        .map(|key| {
            let key = key.parse::<PromptKey>().map_err(|error| {
                SchemaError::UnknownQuestion { key: error.key }
            })?;

            if key.is_skippable() {
                Ok(key)
            } else {
                Err(SchemaError::MandatoryQuestion { key })
            }
        })
        .collect()
}

/// Returns whether `value` is a declared commit type.
fn is_declared(types: &[CommitType], value: &str) -> bool {
    types.iter().any(|commit_type| commit_type.value == value)
}

/// Returns the position of the first scope with an empty name.
fn empty_scope(scopes: &[Scope]) -> Option<usize> {
    scopes.iter().position(|scope| scope.name.trim().is_empty())
}

/// Returns the first scope name with leading or trailing whitespace.
fn padded_scope(scopes: &[Scope]) -> Option<&str> {
    scopes
        .iter()
        .map(|scope| scope.name.as_str())
        .find(|name| is_padded(name))
}

/// Returns whether `value` has leading or trailing whitespace.
fn is_padded(value: &str) -> bool {
    value.trim() != value
}

/// Returns the first scope name listed more than once.
fn duplicate_scope(scopes: &[Scope]) -> Option<&str> {
    scopes
        .iter()
        .map(|scope| scope.name.as_str())
        .duplicates()
        .next()
}

/// Returns the path of the configuration file.
pub fn config_file() -> Result<PathBuf, ConfigFileError> {
    Ok(repo_root()?.join(CONFIG_FILE_NAME))
}

/// Returns the root of the current Git repository.
#[tracing::instrument(level = "trace")]
fn repo_root() -> Result<PathBuf, RepoRootError> {
    let git_rev_parse = Command::new("git")
        .args(["rev-parse", "--show-toplevel"])
        .output()
        .log_err()?;

    if git_rev_parse.status.success() {
        let repo_root = String::from_utf8(git_rev_parse.stdout).log_err()?;
        Ok(PathBuf::from(repo_root.trim()))
    } else {
        let git_error = String::from_utf8(git_rev_parse.stderr).log_err()?;
        Err(RepoRootError::GitError(git_error.trim().to_owned())).log_err()
    }
}

/// Returns the built-in taxonomy of the guardian project.
fn builtin_declaration() -> Declaration {
    let types = [
        ("feat", "feat:      A new feature"),
        ("fix", "fix:       A bug fix"),
        ("docs", "docs:      Documentation only changes"),
        ("style", "style:     Code style changes (formatting, etc.)"),
        ("refactor", "refactor:  Code refactoring"),
        ("perf", "perf:      Performance improvements"),
        ("test", "test:      Adding or updating tests"),
        ("build", "build:     Build system or dependency changes"),
        ("ci", "ci:        CI/CD configuration changes"),
        ("chore", "chore:     Other changes (maintenance, etc.)"),
        ("revert", "revert:    Revert a previous commit"),
    ];

    let scopes = [
        "guardian",
        "docker",
        "compose",
        "webhook",
        "monitoring",
        "recovery",
        "ci",
        "deps",
        "docs",
        "config",
        "release",
    ];

    let scope_overrides = indexmap! {
        "feat" => vec!["guardian", "webhook", "monitoring", "recovery"],
        "fix" => vec![
            "guardian",
            "docker",
            "compose",
            "webhook",
            "monitoring",
            "recovery",
        ],
    };

    let messages = indexmap! {
        "type" => "Select the type of change that you're committing:",
        "scope" => "Select the scope of this change:",
        "customScope" => "Denote the SCOPE of this change:",
        "subject" =>
            "Write a SHORT, IMPERATIVE tense description of the change:\n",
        "body" => "Provide a LONGER description of the change (optional). \
                   Use \"|\" to break new line:\n",
        "breaking" => "List any BREAKING CHANGES (optional):\n",
        "footer" => "List any ISSUES CLOSED by this change (optional). \
                     E.g.: #31, #34:\n",
        "confirmCommit" =>
            "Are you sure you want to proceed with the commit above?",
    };

    Declaration {
        version: String::from(VERSION),
        allow_custom_scopes: false,
        allow_breaking_changes: ["feat", "fix", "refactor", "perf"]
            .map(String::from)
            .to_vec(),
        skip_questions: vec![],
        subject_limit: 100,
        subject_separator: String::from(": "),
        breaking_prefix: v0_1::default_breaking_prefix(),
        footer_prefix: v0_1::default_footer_prefix(),
        types: types
            .into_iter()
            .map(|(value, name)| CommitType {
                value: String::from(value),
                name: String::from(name),
            })
            .collect(),
        scopes: scopes.into_iter().map(scope).collect(),
        scope_overrides: scope_overrides
            .into_iter()
            .map(|(commit_type, scopes)| {
                (
                    String::from(commit_type),
                    scopes.into_iter().map(scope).collect(),
                )
            })
            .collect(),
        messages: messages
            .into_iter()
            .map(|(key, message)| (String::from(key), String::from(message)))
            .collect(),
    }
}

/// Builds a scope from its name.
fn scope(name: &str) -> Scope {
    Scope {
        name: String::from(name),
    }
}
