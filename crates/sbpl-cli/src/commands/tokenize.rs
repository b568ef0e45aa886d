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

//! Tokenize command - token stream dump

use sbpl_core::{lex, SourceFile};

use super::{read_input, require_no_errors, write_output};
use crate::error::CliError;

/// Print one line per token, `L:C kind "text"`, ending with `eof`.
///
/// Lexical diagnostics go to stderr; any error among them fails the
/// command after the dump is written.
///
/// # Examples
///
/// ```no_run
/// use sbpl_cli::commands::tokenize;
///
/// # fn main() -> Result<(), sbpl_cli::error::CliError> {
/// tokenize("profile.sb")?;
/// # Ok(())
/// # }
/// ```
pub fn tokenize(file: &str) -> Result<(), CliError> {
    let content = read_input(file)?;
    let source = SourceFile::new(content);
    let (tokens, diagnostics) = lex::tokenize(&source);

    let mut dump = String::new();
    for token in &tokens {
        dump.push_str(&token.to_string());
        dump.push('\n');
    }
    write_output(&dump, None)?;

    require_no_errors(file, &diagnostics)
}
