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

//! The `check` subcommand.

use clap::Parser;
use eyre::{Result, bail};
use itertools::Itertools as _;
use thiserror::Error;

use super::{GlobalArgs, helpers::load_config};
use crate::{config::Config, success, warning};

/// The check command.
#[derive(Debug, Parser)]
pub struct Check {
    /// Fail when scope overrides list scopes absent from the global scopes.
    #[arg(long)]
    strict: bool,
}

/// Usage errors of `cz-taxonomy check`.
#[derive(Debug, Error)]
pub enum CheckError {
    /// Some override scopes are not declared globally.
    #[error("{count} override scope(s) are missing from the global scopes")]
    UndeclaredScopes {
        /// The number of undeclared scopes.
        count: usize,
    },
}

impl super::Command for Check {
    fn run(&self, global: &GlobalArgs) -> Result<()> {
        let config = load_config(global)?;
        let undeclared = config.undeclared_override_scopes();

        print!("{}", summary(&config));

        for (commit_type, scope) in &undeclared {
            warning!(
                "The override for `{commit_type}` lists `{scope}`, which is \
                not in the global scopes."
            );
        }

        if self.strict && !undeclared.is_empty() {
            bail!(CheckError::UndeclaredScopes {
                count: undeclared.len()
            });
        }

        success!("The configuration is valid.");
        Ok(())
    }
}

/// Describes the taxonomy, one commit type per line.
fn summary(config: &Config) -> String {
    let width = config
        .types()
        .iter()
        .map(|commit_type| commit_type.value.len())
        .max()
        .unwrap_or_default();

    let lines = config
        .types()
        .iter()
        .map(|commit_type| {
            let value = &commit_type.value;
            let scopes = config
                .scopes_for(value)
                .map(|scopes| scopes.iter().map(|scope| &scope.name).join(", "))
                .unwrap_or_default();
            let breaking = if config.is_breaking_allowed(value) == Ok(true) {
                " [breaking]"
            } else {
                ""
            };

            format!("  {value:width$}  {scopes}{breaking}")
        })
        .join("\n");

    format!(
        "{} types, {} scopes, {} scope overrides\n\n{lines}\n\n",
        config.types().len(),
        config.scopes().len(),
        config.scope_overrides().len(),
    )
}
