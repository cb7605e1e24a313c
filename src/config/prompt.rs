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

//! Prompt keys and messages.

use std::{fmt, str::FromStr};

use indexmap::IndexMap;
use thiserror::Error;

use super::SchemaError;

/// A question of the commit wizard.
///
/// Each question has a message in the configuration, and all of them except
/// [`PromptKey::Type`] and [`PromptKey::Subject`] can be skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromptKey {
    /// The commit type.
    Type,
    /// The scope, selected from a list.
    Scope,
    /// A free-form scope.
    CustomScope,
    /// The subject.
    Subject,
    /// The long description.
    Body,
    /// The breaking change description.
    Breaking,
    /// The footer, usually closed issues.
    Footer,
    /// The final confirmation.
    ConfirmCommit,
}

/// An error for a lookup of a prompt key outside the fixed set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown prompt key `{key}`")]
pub struct UnknownKeyError {
    /// The rejected key.
    pub key: String,
}

/// The prompt messages, one per [`PromptKey`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    /// The message for [`PromptKey::Type`].
    r#type: String,
    /// The message for [`PromptKey::Scope`].
    scope: String,
    /// The message for [`PromptKey::CustomScope`].
    custom_scope: String,
    /// The message for [`PromptKey::Subject`].
    subject: String,
    /// The message for [`PromptKey::Body`].
    body: String,
    /// The message for [`PromptKey::Breaking`].
    breaking: String,
    /// The message for [`PromptKey::Footer`].
    footer: String,
    /// The message for [`PromptKey::ConfirmCommit`].
    confirm_commit: String,
}

impl PromptKey {
    /// All the prompt keys, in the order the wizard asks them.
    pub const ALL: [Self; 8] = [
        Self::Type,
        Self::Scope,
        Self::CustomScope,
        Self::Subject,
        Self::Body,
        Self::Breaking,
        Self::Footer,
        Self::ConfirmCommit,
    ];

    /// Returns the key as written in the configuration.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Type => "type",
            Self::Scope => "scope",
            Self::CustomScope => "customScope",
            Self::Subject => "subject",
            Self::Body => "body",
            Self::Breaking => "breaking",
            Self::Footer => "footer",
            Self::ConfirmCommit => "confirmCommit",
        }
    }

    /// Whether the question can be listed in `skipQuestions`.
    pub const fn is_skippable(self) -> bool {
        !matches!(self, Self::Type | Self::Subject)
    }
}

impl fmt::Display for PromptKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PromptKey {
    type Err = UnknownKeyError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|candidate| candidate.as_str() == key)
            .ok_or_else(|| UnknownKeyError {
                key: key.to_owned(),
            })
    }
}

impl Messages {
    /// Returns the message for `key`.
    pub fn get(&self, key: PromptKey) -> &str {
        match key {
            PromptKey::Type => &self.r#type,
            PromptKey::Scope => &self.scope,
            PromptKey::CustomScope => &self.custom_scope,
            PromptKey::Subject => &self.subject,
            PromptKey::Body => &self.body,
            PromptKey::Breaking => &self.breaking,
            PromptKey::Footer => &self.footer,
            PromptKey::ConfirmCommit => &self.confirm_commit,
        }
    }

    /// Iterates over the messages in wizard order.
    pub fn iter(&self) -> impl Iterator<Item = (PromptKey, &str)> {
        PromptKey::ALL.into_iter().map(|key| (key, self.get(key)))
    }
}

impl TryFrom<IndexMap<String, String>> for Messages {
    type Error = SchemaError;

    fn try_from(
        mut messages: IndexMap<String, String>,
    ) -> Result<Self, Self::Error> {
        if let Some(key) = messages
            .keys()
            .find(|key| key.parse::<PromptKey>().is_err())
        {
            return Err(SchemaError::UnknownMessage { key: key.clone() });
        }

        let mut take = |key: PromptKey| -> Result<String, SchemaError> {
            let message = messages
                .shift_remove(key.as_str())
                .ok_or(SchemaError::MissingMessage { key })?;

            if message.trim().is_empty() {
                return Err(SchemaError::EmptyMessage { key });
            }

            Ok(message)
        };

        Ok(Self {
            r#type: take(PromptKey::Type)?,
            scope: take(PromptKey::Scope)?,
            custom_scope: take(PromptKey::CustomScope)?,
            subject: take(PromptKey::Subject)?,
            body: take(PromptKey::Body)?,
            breaking: take(PromptKey::Breaking)?,
            footer: take(PromptKey::Footer)?,
            confirm_commit: take(PromptKey::ConfirmCommit)?,
        })
    }
}

impl From<&Messages> for IndexMap<String, String> {
    fn from(messages: &Messages) -> Self {
        messages
            .iter()
            .map(|(key, message)| (key.as_str().to_owned(), message.to_owned()))
            .collect()
    }
}
