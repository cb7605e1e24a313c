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

//! The command line interface.

mod check;
mod commit;
mod helpers;
mod init;
mod query;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use eyre::Result;

use self::{
    check::{Check, CheckError},
    commit::Commit,
    init::{Init, InitError},
    query::{Breaking, Message, Scopes},
};
use crate::{
    config::{PromptKey, UnknownKeyError, UnknownTypeError},
    error, hint,
};

/// A validated commit taxonomy and the commit wizard built on it.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct CzTaxonomy {
    /// Options shared by all subcommands.
    #[command(flatten)]
    global: GlobalArgs,
    /// The subcommand to run.
    #[command(subcommand)]
    command: CzCommand,
}

/// Options shared by all subcommands.
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Use this configuration file instead of the one at the repository root.
    #[arg(long, short = 'c', global = true, env = "CZ_TAXONOMY_CONFIG")]
    config: Option<PathBuf>,
}

/// The subcommands.
#[derive(Debug, Subcommand)]
enum CzCommand {
    /// Writes a configuration file with the built-in taxonomy.
    Init(Init),
    /// Validates the configuration.
    Check(Check),
    /// Runs the commit wizard.
    Commit(Commit),
    /// Prints the scopes offered for a commit type.
    Scopes(Scopes),
    /// Tells whether a breaking change can be declared for a commit type.
    Breaking(Breaking),
    /// Prints the message of a question.
    Message(Message),
}

trait Command {
    /// Runs the command.
    fn run(&self, global: &GlobalArgs) -> Result<()>;
}

impl CzTaxonomy {
    /// Runs cz-taxonomy.
    pub fn run() -> Result<()> {
        let Self { global, command } = Self::parse();

        let result = match command {
            CzCommand::Init(init) => init.run(&global),
            CzCommand::Check(check) => check.run(&global),
            CzCommand::Commit(commit) => commit.run(&global),
            CzCommand::Scopes(scopes) => scopes.run(&global),
            CzCommand::Breaking(breaking) => breaking.run(&global),
            CzCommand::Message(message) => message.run(&global),
        };

        match result {
            Err(e) => handle_errors(e),
            Ok(()) => Ok(()),
        }
    }
}

#[expect(
    clippy::exit,
    reason = "Usage errors are reported without a backtrace."
)]
fn handle_errors(e: color_eyre::Report) -> Result<()> {
    if let Some(e) = e.downcast_ref::<InitError>() {
        match e {
            InitError::ExistingConfig { .. } => {
                error!("{e}");
                hint!(
                    "You can force the command by running \
                    `cz-taxonomy init -f`."
                );
            }
        }
        std::process::exit(exitcode::CANTCREAT);
    } else if let Some(e) = e.downcast_ref::<UnknownTypeError>() {
        error!("{e}");
        hint!("Run `cz-taxonomy check` to list the declared commit types.");
        std::process::exit(exitcode::USAGE);
    } else if let Some(e) = e.downcast_ref::<UnknownKeyError>() {
        let keys: Vec<_> =
            PromptKey::ALL.into_iter().map(PromptKey::as_str).collect();
        error!("{e}");
        hint!("Valid keys are: {}.", keys.join(", "));
        std::process::exit(exitcode::USAGE);
    } else if let Some(e) = e.downcast_ref::<CheckError>() {
        error!("{e}");
        std::process::exit(exitcode::CONFIG);
    } else {
        Err(e)
    }
}
