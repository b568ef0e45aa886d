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

//! Core commands operating on profile source.

use clap::Subcommand;

use crate::commands;
use crate::error::CliError;

/// Core SBPL commands.
#[derive(Subcommand, Debug)]
pub enum CoreCommands {
    /// Print the token stream of a profile
    ///
    /// One line per token: 1-based line and column, token kind and lexeme.
    Tokenize {
        /// Input file path, or `-` for stdin
        #[arg(value_name = "FILE")]
        file: String,
    },

    /// Check a profile for errors
    ///
    /// Parses the profile, prints every diagnostic to stderr and a short
    /// summary to stdout. Exits non-zero if any diagnostic is an error.
    Check {
        /// Input file path, or `-` for stdin
        #[arg(value_name = "FILE")]
        file: String,
    },

    /// Format a profile to canonical layout
    ///
    /// Declarations are hoisted above rules and comments are dropped.
    Format {
        /// Input file path, or `-` for stdin
        #[arg(value_name = "FILE")]
        file: String,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Spaces per indentation level
        #[arg(long, value_name = "N", default_value_t = 2)]
        indent: usize,

        /// Indent with tabs
        #[arg(long, conflicts_with = "indent")]
        tabs: bool,

        /// Check only (exit 1 if not formatted)
        #[arg(short, long)]
        check: bool,
    },
}

impl CoreCommands {
    /// Execute the core command.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            CoreCommands::Tokenize { file } => commands::tokenize(&file),
            CoreCommands::Check { file } => commands::check(&file),
            CoreCommands::Format {
                file,
                output,
                indent,
                tabs,
                check,
            } => commands::format(&file, output.as_deref(), indent, tabs, check),
        }
    }
}
