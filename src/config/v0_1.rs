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

//! Declaration format for cz-taxonomy, version 0.1.

// NOTE: Never update the fields of the types defined in this file. Create a new
// version instead.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The cz-taxonomy declaration, as written in the configuration file.
///
/// Nothing is validated at this stage: a declaration becomes a usable
/// [`crate::config::Config`] only through its `TryFrom` implementation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// The version of the declaration format.
    pub version: String,
    /// Whether the committer can enter a scope that is not listed.
    #[serde(default)]
    pub allow_custom_scopes: bool,
    /// The types for which a breaking change can be declared.
    #[serde(default)]
    pub allow_breaking_changes: Vec<String>,
    /// The questions the wizard does not ask.
    #[serde(default)]
    pub skip_questions: Vec<String>,
    /// The maximum length of the subject.
    pub subject_limit: i64,
    /// The separator between the header prefix and the subject.
    pub subject_separator: String,
    /// The prefix of the breaking change paragraph.
    #[serde(default = "default_breaking_prefix")]
    pub breaking_prefix: String,
    /// The prefix of the footer paragraph.
    #[serde(default = "default_footer_prefix")]
    pub footer_prefix: String,
    /// The commit types, in prompt order.
    pub types: Vec<CommitType>,
    /// The global scopes, in prompt order.
    #[serde(default)]
    pub scopes: Vec<Scope>,
    /// Per-type replacements of the global scopes.
    #[serde(default)]
    pub scope_overrides: IndexMap<String, Vec<Scope>>,
    /// The prompt messages.
    pub messages: IndexMap<String, String>,
}

/// A commit type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitType {
    /// The value written in the commit header, like `feat`.
    pub value: String,
    /// The label shown in the prompt.
    pub name: String,
}

/// A commit scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scope {
    /// The name of the scope.
    pub name: String,
}

/// The default prefix of the breaking change paragraph.
pub fn default_breaking_prefix() -> String {
    String::from("BREAKING CHANGE:")
}

/// The default prefix of the footer paragraph.
pub fn default_footer_prefix() -> String {
    String::from("ISSUES CLOSED:")
}
