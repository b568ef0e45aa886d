// Dweve SBPL - Sandbox Profile Language toolkit
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Conversion commands - profile to and from JSON

use sbpl_core::parse;
use sbpl_json::{json_to_source, ToJsonConfig};

use super::{read_input, require_no_errors, write_output, writer_config};
use crate::error::CliError;

/// Convert a profile to wire JSON.
///
/// Fails without writing output if the profile has errors.
///
/// # Examples
///
/// ```no_run
/// use sbpl_cli::commands::to_json;
///
/// # fn main() -> Result<(), sbpl_cli::error::CliError> {
/// // Pretty JSON to stdout
/// to_json("profile.sb", None, false)?;
///
/// // Compact JSON to a file
/// to_json("profile.sb", Some("profile.json"), true)?;
/// # Ok(())
/// # }
/// ```
pub fn to_json(file: &str, output: Option<&str>, compact: bool) -> Result<(), CliError> {
    let content = read_input(file)?;
    let parsed = parse(&content);
    require_no_errors(file, &parsed.diagnostics)?;

    let config = ToJsonConfig::default().with_pretty(!compact);
    let mut json = sbpl_json::to_json(&parsed.profile, &config)?;
    json.push('\n');
    write_output(&json, output)
}

/// Convert wire JSON back to profile source.
pub fn from_json(file: &str, output: Option<&str>, indent: usize, tabs: bool) -> Result<(), CliError> {
    let content = read_input(file)?;
    let source = json_to_source(&content, &writer_config(indent, tabs))?;
    write_output(&source, output)
}
