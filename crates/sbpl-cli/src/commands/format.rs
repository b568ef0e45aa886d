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

//! Format command - canonical profile layout

use sbpl_json::format_source;

use super::{display_path, read_input, require_no_errors, write_output, writer_config};
use crate::error::CliError;

/// Format a profile to canonical layout.
///
/// In check mode nothing is written; the command fails if formatting would
/// change the file. Line endings are normalized to `\n` before comparing.
///
/// # Examples
///
/// ```no_run
/// use sbpl_cli::commands::format;
///
/// # fn main() -> Result<(), sbpl_cli::error::CliError> {
/// // Format to stdout with two-space indentation
/// format("profile.sb", None, 2, false, false)?;
///
/// // Check only
/// format("profile.sb", None, 2, false, true)?;
/// # Ok(())
/// # }
/// ```
pub fn format(
    file: &str,
    output: Option<&str>,
    indent: usize,
    tabs: bool,
    check: bool,
) -> Result<(), CliError> {
    let content = read_input(file)?;
    let (formatted, diagnostics) = format_source(&content, &writer_config(indent, tabs));
    require_no_errors(file, &diagnostics)?;

    if check {
        if content.replace("\r\n", "\n") != formatted {
            return Err(CliError::not_formatted(display_path(file)));
        }
        println!("{} is formatted", display_path(file));
        Ok(())
    } else {
        write_output(&formatted, output)
    }
}
