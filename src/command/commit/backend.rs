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

//! Backends receiving the commit message.

use std::{io, process::Command};

use thiserror::Error;

use crate::tracing::LogResult as _;

/// The placeholder replaced by the commit message in custom commands.
const MESSAGE_PLACEHOLDER: &str = "$message";

/// A commit backend.
pub trait Backend {
    /// Calls the backend.
    fn call(&self, commit_message: &str) -> Result<(), BackendError>;
}

/// Errors that can occur when running the backend command.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The backend command cannot be run.
    #[error("Failed to run `{command}`")]
    CannotRun {
        /// The command that cannot be run.
        command: String,
        /// The OS error.
        #[source]
        os_error: io::Error,
    },
    /// The backend command has returned an error.
    #[error("`{command}` has returned an error")]
    ExecutionError {
        /// The command that has failed.
        command: String,
        /// The status code returned by the command.
        status_code: Option<i32>,
    },
}

/// Errors that can occur when building a custom command backend.
#[derive(Debug, Error)]
pub enum CustomCommandBackendError {
    /// The backend command contains a syntax error.
    #[error("Failed to parse `{command}`")]
    Syntax {
        /// The command that cannot be parsed.
        command: String,
        /// The parsing error.
        #[source]
        parse_error: shell_words::ParseError,
    },
    /// The backend command is made of whitespace only.
    #[error("The custom command is empty")]
    Empty,
}

/// A backend using `git commit -em "$message"`.
#[derive(Debug)]
pub struct GitBackend {
    /// Extra arguments to pass to `git commit`.
    extra_args: Vec<String>,
}

/// A backend using a user-provided custom command.
#[derive(Debug, PartialEq, Eq)]
pub struct CustomCommandBackend {
    /// The program to run.
    program: String,
    /// Arguments to the program.
    args: Vec<String>,
}

/// A backend printing the message to the terminal.
#[derive(Debug)]
pub struct PrintBackend;

impl GitBackend {
    /// Builds a new Git backend.
    pub fn new(extra_args: &[String]) -> Self {
        Self {
            extra_args: extra_args.to_owned(),
        }
    }
}

impl Backend for GitBackend {
    #[tracing::instrument(name = "git_backend", level = "trace", skip_all)]
    fn call(&self, commit_message: &str) -> Result<(), BackendError> {
        let mut git_commit = Command::new("git");
        git_commit
            .arg("commit")
            .args(&self.extra_args)
            .args(["-em", commit_message]);

        run(&mut git_commit, "git commit")
    }
}

impl CustomCommandBackend {
    /// Creates a custom command backend from a shell-like command line.
    #[tracing::instrument(
        name = "new_custom_command_backend",
        level = "trace"
    )]
    pub fn new(command: &str) -> Result<Self, CustomCommandBackendError> {
        let command_line = shell_words::split(command)
            .map_err(|parse_error| CustomCommandBackendError::Syntax {
                command: command.to_owned(),
                parse_error,
            })
            .log_err()?;

        match command_line.split_first() {
            Some((program, args)) => Ok(Self {
                program: program.to_owned(),
                args: args.to_owned(),
            }),
            None => Err(CustomCommandBackendError::Empty).log_err(),
        }
    }

    /// Returns the arguments with the commit message embedded.
    fn args_with_message(&self, commit_message: &str) -> Vec<String> {
        self.args
            .iter()
            .map(|arg| arg.replace(MESSAGE_PLACEHOLDER, commit_message))
            .collect()
    }
}

impl Backend for CustomCommandBackend {
    #[tracing::instrument(
        name = "custom_command_backend",
        level = "trace",
        skip_all
    )]
    fn call(&self, commit_message: &str) -> Result<(), BackendError> {
        let mut custom_command = Command::new(&self.program);
        custom_command.args(self.args_with_message(commit_message));

        let display = format!("{} {}", self.program, self.args.join(" "));
        run(&mut custom_command, display.trim())
    }
}

impl Backend for PrintBackend {
    #[tracing::instrument(name = "print_backend", level = "trace", skip_all)]
    fn call(&self, commit_message: &str) -> Result<(), BackendError> {
        tracing::debug!("printing the commit message");
        println!("{commit_message}");
        Ok(())
    }
}

/// Runs a backend command and checks its exit status.
fn run(command: &mut Command, display: &str) -> Result<(), BackendError> {
    tracing::info!(?command, "calling the backend command");

    let status = command
        .status()
        .map_err(|os_error| BackendError::CannotRun {
            command: display.to_owned(),
            os_error,
        })
        .log_err()?;

    tracing::debug!(?status);

    if status.success() {
        Ok(())
    } else {
        Err(BackendError::ExecutionError {
            command: display.to_owned(),
            status_code: status.code(),
        })
        .log_err()
    }
}

#[cfg(test)]
mod test {
    #![allow(clippy::pedantic, clippy::restriction)]

    use super::*;

    #[test]
    fn custom_command_is_split_like_a_shell() {
        let backend =
            CustomCommandBackend::new("jj describe -m '$message'").unwrap();

        assert_eq!(
            backend,
            CustomCommandBackend {
                program: String::from("jj"),
                args: vec![
                    String::from("describe"),
                    String::from("-m"),
                    String::from("$message"),
                ],
            }
        );
    }

    #[test]
    fn custom_command_embeds_the_message() {
        let backend =
            CustomCommandBackend::new("git commit --message=$message")
                .unwrap();

        assert_eq!(
            backend.args_with_message("fix(docker): pin the image"),
            ["commit", "--message=fix(docker): pin the image"]
        );
    }

    #[test]
    fn custom_command_with_unbalanced_quotes_is_rejected() {
        assert!(matches!(
            CustomCommandBackend::new("git commit -m '$message"),
            Err(CustomCommandBackendError::Syntax { .. })
        ));
    }

    #[test]
    fn blank_custom_command_is_rejected() {
        assert!(matches!(
            CustomCommandBackend::new("   "),
            Err(CustomCommandBackendError::Empty)
        ));
    }

    #[cfg(unix)]
    #[test]
    fn failing_command_reports_its_status() {
        let result = run(&mut Command::new("false"), "false");

        assert!(matches!(
            result,
            Err(BackendError::ExecutionError { status_code: Some(1), .. })
        ));
    }

    #[test]
    fn missing_program_cannot_run() {
        let backend =
            CustomCommandBackend::new("cz-taxonomy-does-not-exist").unwrap();

        assert!(matches!(
            backend.call("chore: nothing"),
            Err(BackendError::CannotRun { .. })
        ));
    }
}
