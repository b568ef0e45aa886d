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

//! CLI command implementations

mod check;
mod convert;
mod format;
mod tokenize;

pub use check::check;
pub use convert::{from_json, to_json};
pub use format::format;
pub use tokenize::tokenize;

use std::fs;
use std::io::{self, Read, Write};

use sbpl_core::{Diagnostic, Severity};
use sbpl_json::{IndentStyle, WriterConfig};
use tracing::debug;

use crate::error::CliError;

/// Default maximum input size to prevent OOM attacks (1 GB)
/// Can be overridden via SBPL_MAX_FILE_SIZE environment variable
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

/// Environment variable overriding [`DEFAULT_MAX_FILE_SIZE`].
pub const MAX_FILE_SIZE_ENV: &str = "SBPL_MAX_FILE_SIZE";

/// Input path that reads standard input.
pub const STDIN_PATH: &str = "-";

fn get_max_file_size() -> u64 {
    std::env::var(MAX_FILE_SIZE_ENV)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Read a file, or standard input for `-`, with size validation.
///
/// Invalid UTF-8 is replaced with U+FFFD rather than rejected.
///
/// # Errors
///
/// Returns `Err` if the input cannot be read or exceeds the maximum size
/// (configurable via `SBPL_MAX_FILE_SIZE`).
pub fn read_input(path: &str) -> Result<String, CliError> {
    let max_file_size = get_max_file_size();

    let bytes = if path == STDIN_PATH {
        let mut buffer = Vec::new();
        io::stdin()
            .lock()
            .take(max_file_size.saturating_add(1))
            .read_to_end(&mut buffer)
            .map_err(|e| CliError::io_error("<stdin>", e))?;
        if buffer.len() as u64 > max_file_size {
            return Err(CliError::file_too_large("<stdin>", buffer.len() as u64, max_file_size));
        }
        buffer
    } else {
        // Check file size first to prevent reading extremely large files
        let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;
        if metadata.len() > max_file_size {
            return Err(CliError::file_too_large(path, metadata.len(), max_file_size));
        }
        fs::read(path).map_err(|e| CliError::io_error(path, e))?
    };

    debug!(path, bytes = bytes.len(), "read input");
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Write content to a file or stdout.
pub fn write_output(content: &str, path: Option<&str>) -> Result<(), CliError> {
    match path {
        Some(p) => fs::write(p, content).map_err(|e| CliError::io_error(p, e)),
        None => io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| CliError::io_error("<stdout>", e)),
    }
}

/// Print diagnostics to stderr as `L:C: severity: message` and return the
/// number of errors among them.
pub fn report_diagnostics(diagnostics: &[Diagnostic]) -> usize {
    for diagnostic in diagnostics {
        eprintln!("{diagnostic}");
    }
    diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Error)
        .count()
}

/// Prints `diagnostics` and fails if any of them is an error.
fn require_no_errors(path: &str, diagnostics: &[Diagnostic]) -> Result<(), CliError> {
    match report_diagnostics(diagnostics) {
        0 => Ok(()),
        count => Err(CliError::diagnostics(display_path(path), count)),
    }
}

fn display_path(path: &str) -> &str {
    if path == STDIN_PATH {
        "<stdin>"
    } else {
        path
    }
}

/// Writer configuration from `--indent` / `--tabs`.
pub fn writer_config(indent: usize, tabs: bool) -> WriterConfig {
    let style = if tabs {
        IndentStyle::Tabs
    } else {
        IndentStyle::Spaces(indent)
    };
    WriterConfig::new().with_indent(style)
}
