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

//! SBPL CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **tokenize**: dump the token stream of a profile
//! - **check**: report diagnostics and a summary
//! - **format**: print a profile in canonical layout, or check that it is
//! - **to-json / from-json**: convert between profile source and the JSON
//!   wire model
//!
//! Every command accepts `-` to read standard input.
//!
//! # Examples
//!
//! ```no_run
//! use sbpl_cli::commands::{check, to_json};
//!
//! # fn main() -> Result<(), sbpl_cli::error::CliError> {
//! check("profile.sb")?;
//! to_json("profile.sb", Some("profile.json"), false)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Security
//!
//! Input larger than 1 GB is rejected before it is read. The limit is
//! configurable via `SBPL_MAX_FILE_SIZE` (in bytes).
//!
//! # Logging
//!
//! Library logging goes to stderr through `tracing`. The default filter is
//! `sbpl=warn`; set `RUST_LOG` (for example `RUST_LOG=sbpl_core=debug`) to
//! see more.

pub mod cli;
pub mod commands;
pub mod error;

use tracing_subscriber::EnvFilter;

/// Default log filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "sbpl=warn";

/// Install the stderr log subscriber.
///
/// Does nothing if a global subscriber is already installed.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}
