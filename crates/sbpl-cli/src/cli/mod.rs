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

//! CLI command definitions and argument parsing.
//!
//! - [`core`]: commands that read profile source (tokenize, check, format)
//! - [`conversion`]: JSON conversion commands (to-json, from-json)

mod conversion;
mod core;

use clap::Subcommand;

pub use conversion::ConversionCommands;
pub use core::CoreCommands;

use crate::error::CliError;

/// Top-level CLI commands enum.
///
/// ```text
/// Commands
/// ├── Core (tokenize, check, format)
/// └── Conversion (to-json, from-json)
/// ```
///
/// # Examples
///
/// ```no_run
/// use clap::Parser;
/// use sbpl_cli::cli::Commands;
///
/// #[derive(Parser)]
/// struct Cli {
///     #[command(subcommand)]
///     command: Commands,
/// }
/// ```
#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Core(CoreCommands),

    #[command(flatten)]
    Conversion(ConversionCommands),
}

impl Commands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if input cannot be read or written, the profile has
    /// error diagnostics, JSON conversion fails, or `format --check` finds
    /// an unformatted file.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Core(cmd) => cmd.execute(),
            Commands::Conversion(cmd) => cmd.execute(),
        }
    }
}
