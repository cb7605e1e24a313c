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

//! Subcommands querying the taxonomy.

use clap::Parser;
use eyre::Result;

use super::{GlobalArgs, helpers::load_config};

/// The scopes command.
#[derive(Debug, Parser)]
pub struct Scopes {
    /// The commit type.
    #[arg(value_name = "TYPE")]
    commit_type: String,
}

/// The breaking command.
#[derive(Debug, Parser)]
pub struct Breaking {
    /// The commit type.
    #[arg(value_name = "TYPE")]
    commit_type: String,
}

/// The message command.
#[derive(Debug, Parser)]
pub struct Message {
    /// The question, like `subject` or `confirmCommit`.
    key: String,
}

impl super::Command for Scopes {
    fn run(&self, global: &GlobalArgs) -> Result<()> {
        let config = load_config(global)?;

        for scope in config.scopes_for(&self.commit_type)? {
            println!("{}", scope.name);
        }

        Ok(())
    }
}

impl super::Command for Breaking {
    fn run(&self, global: &GlobalArgs) -> Result<()> {
        let config = load_config(global)?;

        if config.is_breaking_allowed(&self.commit_type)? {
            println!("allowed");
        } else {
            println!("not allowed");
        }

        Ok(())
    }
}

impl super::Command for Message {
    fn run(&self, global: &GlobalArgs) -> Result<()> {
        let config = load_config(global)?;
        println!("{}", config.message_for(&self.key)?.trim_end());
        Ok(())
    }
}
