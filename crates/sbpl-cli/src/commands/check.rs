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

//! Check command - profile syntax validation

use colored::Colorize;
use sbpl_core::parse;

use super::{display_path, read_input, report_diagnostics};
use crate::error::CliError;

/// Parse a profile and report whether it is free of errors.
///
/// Prints `✓ FILE` with a summary on success, `✗ FILE` otherwise.
/// Diagnostics of every severity are printed to stderr.
///
/// # Examples
///
/// ```no_run
/// use sbpl_cli::commands::check;
///
/// # fn main() -> Result<(), sbpl_cli::error::CliError> {
/// check("profile.sb")?;
/// # Ok(())
/// # }
/// ```
pub fn check(file: &str) -> Result<(), CliError> {
    let content = read_input(file)?;
    let output = parse(&content);
    let errors = report_diagnostics(&output.diagnostics);
    let name = display_path(file);

    if errors > 0 {
        println!("{} {}", "✗".red().bold(), name);
        return Err(CliError::diagnostics(name, errors));
    }

    let profile = &output.profile;
    println!("{} {}", "✓".green().bold(), name);
    match &profile.version {
        Some(version) => println!("  Version: {}", version.version),
        None => println!("  Version: (none)"),
    }
    if let Some(debug) = &profile.debug {
        println!("  Debug: {}", debug.action);
    }
    println!("  Imports: {}", profile.imports.len());
    println!("  Definitions: {}", profile.definitions.len());
    println!("  Rules: {}", profile.rules.len());
    Ok(())
}
