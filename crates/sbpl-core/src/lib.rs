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

//! Source model, lexer and parser for SBPL sandbox profiles.
//!
//! SBPL is the S-expression policy language used by sandbox profiles:
//! `(version 1)`, `(deny default)`, `(allow file-read* (subpath "/usr"))`.
//! This crate turns profile text into a typed syntax tree while keeping
//! every byte of the input accounted for.
//!
//! # Source Model
//!
//! [`SourceFile`] owns the text and converts between byte offsets and
//! [`SourcePosition`]s (0-based line, UTF-16 column). Problems are reported
//! as [`Diagnostic`] values with stable [`DiagnosticCode`]s.
//!
//! # Lexical Analysis
//!
//! The [`lex`] module produces tokens carrying leading and trailing trivia,
//! so whitespace and comments survive for exact reconstruction. The lexer
//! never fails.
//!
//! # Parsing
//!
//! [`parse`] builds a [`Profile`](ast::Profile) and collects diagnostics.
//! A malformed top-level form is skipped up to the next `(`, and parsing
//! continues.
//!
//! ```
//! let output = sbpl_core::parse("(version 1)\n(version 2)");
//! assert_eq!(output.profile.version.as_ref().map(|v| v.version), Some(1));
//! assert_eq!(output.diagnostics[0].code.as_str(), "S006");
//! ```

pub mod ast;
pub mod diagnostic;
pub mod lex;
mod parser;
mod source;
mod span;

pub use diagnostic::{
    Diagnostic, DiagnosticCategory, DiagnosticCode, DiagnosticCollector, Fix, RelatedInformation,
    Severity,
};
pub use parser::{
    parse, parse_with_options, ParseOptions, ParseOptionsBuilder, ParseOutput, Parser,
    DEFAULT_MAX_DEPTH,
};
pub use source::SourceFile;
pub use span::{SourcePosition, SourceRange};
