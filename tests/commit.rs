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

//! Tests for the commit wizard.

// NOTE: rexpect is only compatible with Unix-like systems, so let’s just not
// compile the wizard tests on Windows.
#![cfg(not(target_os = "windows"))]
#![allow(clippy::pedantic, clippy::restriction)]

use std::{path::PathBuf, process::Command};

use assert_cmd::cargo::cargo_bin;
use eyre::Result;
use rexpect::session::{PtySession, spawn_command};

const TIMEOUT: Option<u64> = Some(5_000);

////////////////////////////////////////////////////////////////////////////////
//                                  Helpers                                   //
////////////////////////////////////////////////////////////////////////////////

fn config_file(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("res")
        .join("config")
        .join(name)
}

fn spawn_wizard(config: &str) -> Result<PtySession> {
    let mut cmd = Command::new(cargo_bin("cz-taxonomy"));
    cmd.env_remove("CZ_TAXONOMY_LOG")
        .arg("--config")
        .arg(config_file(config))
        .args(["commit", "--print-only"]);

    Ok(spawn_command(cmd, TIMEOUT)?)
}

////////////////////////////////////////////////////////////////////////////////
//                                   Wizard                                   //
////////////////////////////////////////////////////////////////////////////////

#[test]
fn wizard_builds_a_message_from_the_guardian_taxonomy() -> Result<()> {
    let mut process = spawn_wizard("guardian.toml")?;

    process.exp_string("Select the type of change that you're committing:")?;
    process.exp_string("feat:      A new feature")?;
    process.send_line("")?;

    // The scopes of the `feat` override.
    process.exp_string("Select the scope of this change:")?;
    process.exp_string("monitoring")?;
    process.send_line("")?;

    process.exp_string("Write a SHORT, IMPERATIVE tense description")?;
    process.send_line("add a health probe")?;

    process.exp_string("Provide a LONGER description of the change")?;
    process.send_line("")?;

    process.exp_string("List any BREAKING CHANGES")?;
    process.send_line("")?;

    process.exp_string("List any ISSUES CLOSED by this change")?;
    process.send_line("")?;

    process.exp_string("Are you sure you want to proceed")?;
    process.send_line("y")?;

    process.exp_string("feat(guardian): add a health probe")?;
    process.exp_eof()?;

    Ok(())
}

#[test]
fn wizard_skips_questions_and_breaking_change_for_other_types() -> Result<()> {
    let mut process = spawn_wizard("minimal.toml")?;

    process.exp_string("Type?")?;
    process.send_line("")?;

    // No scope is declared, the body is skipped.
    process.exp_string("Subject?")?;
    process.send_line("bump deps")?;

    // `chore` does not allow breaking changes.
    process.exp_string("Footer?")?;
    process.send_line("#12")?;

    process.exp_string("chore: bump deps")?;
    process.exp_string("ISSUES CLOSED: #12")?;
    process.exp_eof()?;

    Ok(())
}

#[test]
fn wizard_enforces_the_subject_limit() -> Result<()> {
    let mut process = spawn_wizard("minimal.toml")?;

    process.exp_string("Type?")?;
    process.send_line("")?;

    process.exp_string("Subject?")?;
    process.send_line("this subject is far too long")?;

    process.exp_string("The subject must not be longer than 20 characters")?;

    Ok(())
}

#[test]
fn wizard_asks_for_a_custom_scope() -> Result<()> {
    let mut process = spawn_wizard("custom-scopes.toml")?;

    process.exp_string("Type?")?;
    process.send_line("")?;

    process.exp_string("Scope?")?;
    process.exp_string("[custom]")?;
    process.send_line("custom")?;

    process.exp_string("Custom scope?")?;
    process.send_line("healthcheck")?;

    process.exp_string("Subject?")?;
    process.send_line("retry twice")?;

    process.exp_string("fix(healthcheck): retry twice")?;
    process.exp_eof()?;

    Ok(())
}

#[test]
fn wizard_cancels_the_commit_when_not_confirmed() -> Result<()> {
    let mut process = spawn_wizard("guardian.toml")?;

    process.exp_string("Select the type of change that you're committing:")?;
    process.send_line("")?;

    process.exp_string("Select the scope of this change:")?;
    process.send_line("")?;

    process.exp_string("Write a SHORT, IMPERATIVE tense description")?;
    process.send_line("add a health probe")?;

    process.exp_string("Provide a LONGER description of the change")?;
    process.send_line("")?;

    process.exp_string("List any BREAKING CHANGES")?;
    process.send_line("")?;

    process.exp_string("List any ISSUES CLOSED by this change")?;
    process.send_line("")?;

    // The preview is shown before the confirmation.
    process.exp_string("feat(guardian): add a health probe")?;
    process.exp_string("Are you sure you want to proceed")?;
    process.send_line("n")?;

    let before = process.exp_string("The commit has been cancelled.")?;
    let after = process.exp_eof()?;

    assert!(!before.contains("feat(guardian): add a health probe"));
    assert!(!after.contains("feat(guardian): add a health probe"));

    Ok(())
}
