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

//! Structured error types for the SBPL CLI.
//!
//! All commands return `Result<(), CliError>`; `main` prints the error and
//! exits with a failure status.

use std::io;
use std::path::PathBuf;

use sbpl_json::ConversionError;
use thiserror::Error;

/// The main error type for SBPL CLI operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    /// I/O operation failed (file read, write, or metadata access).
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// Input exceeds the maximum allowed size.
    #[error("File '{path}' is too large ({actual} bytes). Maximum allowed: {max} bytes ({max_mb} MB)")]
    FileTooLarge {
        path: PathBuf,
        actual: u64,
        max: u64,
        max_mb: u64,
    },

    /// The profile produced error diagnostics. The diagnostics themselves
    /// have already been printed.
    #[error("{path}: {count} error(s) found")]
    Diagnostics { path: PathBuf, count: usize },

    /// Wire JSON could not be converted.
    #[error("JSON conversion error: {0}")]
    Conversion(String),

    /// Returned by `format --check` when output would differ from input.
    #[error("File '{path}' is not formatted")]
    NotFormatted { path: PathBuf },
}

impl CliError {
    /// Create an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a file-too-large error.
    ///
    /// # Examples
    ///
    /// ```
    /// use sbpl_cli::error::CliError;
    ///
    /// let err = CliError::file_too_large("huge.sb", 3 * 1024 * 1024, 2 * 1024 * 1024);
    /// assert!(err.to_string().contains("(2 MB)"));
    /// ```
    pub fn file_too_large(path: impl Into<PathBuf>, actual: u64, max: u64) -> Self {
        Self::FileTooLarge {
            path: path.into(),
            actual,
            max,
            max_mb: max / (1024 * 1024),
        }
    }

    pub fn diagnostics(path: impl Into<PathBuf>, count: usize) -> Self {
        Self::Diagnostics {
            path: path.into(),
            count,
        }
    }

    pub fn not_formatted(path: impl Into<PathBuf>) -> Self {
        Self::NotFormatted { path: path.into() }
    }
}

impl From<ConversionError> for CliError {
    fn from(err: ConversionError) -> Self {
        CliError::Conversion(err.to_string())
    }
}
