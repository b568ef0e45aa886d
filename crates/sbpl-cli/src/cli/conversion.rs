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

//! JSON conversion commands.
//!
//! - `to-json`: profile source to wire JSON
//! - `from-json`: wire JSON to profile source

use clap::Subcommand;

use crate::commands;
use crate::error::CliError;

/// Format conversion commands.
#[derive(Subcommand, Debug)]
pub enum ConversionCommands {
    /// Convert a profile to JSON
    ToJson {
        /// Input profile, or `-` for stdin
        #[arg(value_name = "FILE")]
        file: String,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Single-line JSON
        #[arg(long)]
        compact: bool,
    },

    /// Convert JSON to a profile
    FromJson {
        /// Input JSON file, or `-` for stdin
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
    },
}

impl ConversionCommands {
    /// Execute the conversion command.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            ConversionCommands::ToJson {
                file,
                output,
                compact,
            } => commands::to_json(&file, output.as_deref(), compact),
            ConversionCommands::FromJson {
                file,
                output,
                indent,
                tabs,
            } => commands::from_json(&file, output.as_deref(), indent, tabs),
        }
    }
}
