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

//! # SBPL - Sandbox Profile Language
//!
//! Tooling for sandbox profiles written in the parenthesized SBPL syntax:
//! a lossless lexer, an error-tolerant parser with positioned diagnostics,
//! and conversion to and from a JSON wire model.
//!
//! ## Quick Start
//!
//! ```rust
//! use sbpl::{format, parse, to_json};
//!
//! let source = r#"
//! (version 1)
//! (deny default)
//! (allow file-read* (subpath "/usr"))
//! "#;
//!
//! // Parse, collecting diagnostics instead of failing
//! let output = parse(source);
//! assert!(output.is_ok());
//! assert_eq!(output.profile.rules.len(), 2);
//!
//! // Convert to JSON
//! let json = to_json(source).unwrap();
//! assert!(json.contains("\"subpath\""));
//!
//! // Canonical layout
//! let formatted = format(source).unwrap();
//! assert!(formatted.starts_with("(version 1)\n\n"));
//! ```
//!
//! ## Modules
//!
//! - [`ast`]: syntax tree types
//! - [`lex`]: tokens, trivia and the lexer
//! - [`json`]: wire model, conversion and source printing

pub use sbpl_core::{
    parse, parse_with_options, Diagnostic, DiagnosticCategory, DiagnosticCode, Fix, ParseOptions,
    ParseOptionsBuilder, ParseOutput, Parser, RelatedInformation, Severity, SourceFile,
    SourcePosition, SourceRange, DEFAULT_MAX_DEPTH,
};

pub mod ast {
    //! Syntax tree types
    pub use sbpl_core::ast::*;
}

pub mod lex {
    //! Lexical analysis
    pub use sbpl_core::lex::{tokenize, Lexer, Token, TokenKind, Trivia, TriviaPiece};
}

pub mod json {
    //! JSON wire model and source printing
    pub use sbpl_json::{
        format_expr, format_source, from_json, from_json_value, json_to_source, to_json,
        to_json_value, to_source, to_structured, ConversionError, DefinitionJson, ExprNode,
        FilterJson, IndentStyle, ProfileJson, RuleJson, SourceWriter, ToJsonConfig, WriterConfig,
        WriterConfigBuilder,
    };
}

use sbpl_core::ast::Profile;
use thiserror::Error;

/// Errors from the one-call helpers in this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SbplError {
    /// The profile produced error diagnostics. All diagnostics, warnings
    /// included, are kept.
    #[error("profile has {} error(s), first at {}", error_count(.0), first_error(.0))]
    Invalid(Vec<Diagnostic>),

    /// Wire JSON could not be converted.
    #[error(transparent)]
    Conversion(#[from] sbpl_json::ConversionError),
}

impl SbplError {
    /// The diagnostics behind an [`SbplError::Invalid`] error.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        match self {
            SbplError::Invalid(diagnostics) => diagnostics,
            SbplError::Conversion(_) => &[],
        }
    }
}

fn error_count(diagnostics: &[Diagnostic]) -> usize {
    diagnostics.iter().filter(|d| d.is_error()).count()
}

fn first_error(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .find(|d| d.is_error())
        .map(Diagnostic::to_string)
        .unwrap_or_default()
}

/// Parse a profile, failing if any diagnostic is an error.
///
/// # Examples
///
/// ```rust
/// let profile = sbpl::parse_strict("(version 1)").unwrap();
/// assert_eq!(profile.version.as_ref().map(|v| v.version), Some(1));
///
/// let err = sbpl::parse_strict("(version 1").unwrap_err();
/// assert_eq!(err.diagnostics()[0].code.as_str(), "P003");
/// ```
pub fn parse_strict(text: &str) -> Result<Profile, SbplError> {
    let output = parse(text);
    if output.has_errors() {
        return Err(SbplError::Invalid(output.diagnostics));
    }
    Ok(output.profile)
}

/// Check a profile for errors without keeping the tree.
#[inline]
pub fn validate(text: &str) -> Result<(), SbplError> {
    parse_strict(text).map(|_| ())
}

/// Convert profile source to pretty-printed wire JSON.
pub fn to_json(text: &str) -> Result<String, SbplError> {
    let profile = parse_strict(text)?;
    Ok(sbpl_json::to_json(&profile, &sbpl_json::ToJsonConfig::default())?)
}

/// Convert wire JSON to profile source with default layout.
///
/// # Examples
///
/// ```rust
/// let source = sbpl::from_json(r#"{"version": 1}"#).unwrap();
/// assert_eq!(source, "(version 1)\n");
/// ```
pub fn from_json(json: &str) -> Result<String, SbplError> {
    Ok(sbpl_json::json_to_source(json, &sbpl_json::WriterConfig::default())?)
}

/// Print a profile in canonical layout, failing on error diagnostics.
pub fn format(text: &str) -> Result<String, SbplError> {
    let (formatted, diagnostics) = sbpl_json::format_source(text, &sbpl_json::WriterConfig::default());
    if diagnostics.iter().any(Diagnostic::is_error) {
        return Err(SbplError::Invalid(diagnostics));
    }
    Ok(formatted)
}

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
