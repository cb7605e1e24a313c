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

//! A validated commit taxonomy and the commit wizard built on it.
//!
//! The taxonomy lists the commit types, the scopes, the per-type scope
//! overrides and the prompt messages of a repository. It is loaded once,
//! validated, then borrowed by the CLI commands.

pub mod command;
pub mod config;
pub mod helpers;
pub mod tracing;

pub use command::CzTaxonomy;
