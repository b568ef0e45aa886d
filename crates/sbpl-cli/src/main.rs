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

//! SBPL Command Line Interface

use clap::Parser;
use sbpl_cli::cli::Commands;
use std::process::ExitCode;

/// SBPL - Sandbox Profile Language toolkit
///
/// # Examples
///
/// ```bash
/// # Check a profile
/// sbpl check app.sb
///
/// # Reformat with tabs
/// sbpl format app.sb --tabs --output app.sb
///
/// # Convert to JSON and back
/// sbpl to-json app.sb | sbpl from-json -
/// ```
#[derive(Parser)]
#[command(name = "sbpl")]
#[command(author, version, about = "SBPL - Sandbox Profile Language toolkit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    sbpl_cli::init_logging();
    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
