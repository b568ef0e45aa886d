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

//! Recursive-descent parser with synchronizing error recovery.
//!
//! The parser consumes the lexer's token stream and builds a [`Profile`].
//! It never fails: malformed input is reported through diagnostics and the
//! parser resynchronizes at the next `(`, so one broken top-level form does
//! not hide the forms after it.
//!
//! # Module Structure
//!
//! - `forms` - Top-level declarations and rules
//! - `filters` - Filter grammar, including compound filters
//! - `expr` - Expression grammar
//! - `recovery` - Synchronization and balanced-paren skipping
//!
//! # Examples
//!
//! ```
//! use sbpl_core::ast::Filter;
//! use sbpl_core::parse;
//!
//! let output = parse("(version 1)\n(deny default)\n(allow file-read-data (subpath \"/usr\"))");
//! assert!(output.diagnostics.is_empty());
//!
//! let profile = output.profile;
//! assert_eq!(profile.version.as_ref().map(|v| v.version), Some(1));
//! assert_eq!(profile.rules.len(), 2);
//! assert!(matches!(
//!     &profile.rules[1].filters[0],
//!     Filter::Simple { filter_type, .. } if filter_type == "subpath"
//! ));
//! ```
//!
//! # Nesting Limit
//!
//! Filters and expressions nest recursively. [`ParseOptions::max_depth`]
//! bounds the nesting depth; deeper forms are rejected with `P009` and
//! skipped.

mod expr;
mod filters;
mod forms;
mod recovery;

use tracing::debug;

use crate::ast::Profile;
use crate::diagnostic::{Diagnostic, DiagnosticCode, DiagnosticCollector, Fix, Severity};
use crate::lex::{Lexer, Token, TokenKind};
use crate::source::SourceFile;
use crate::span::{SourcePosition, SourceRange};

/// Default maximum nesting depth of filters and expressions.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Parsing options.
///
/// # Examples
///
/// ```
/// use sbpl_core::ParseOptions;
///
/// let opts = ParseOptions::builder().max_depth(32).build();
/// assert_eq!(opts.max_depth, 32);
/// assert_eq!(ParseOptions::default().max_depth, 256);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum nesting depth of filters and expressions.
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParseOptions {
    /// Create a new builder for ParseOptions.
    pub fn builder() -> ParseOptionsBuilder {
        ParseOptionsBuilder::new()
    }
}

/// Builder for [`ParseOptions`].
#[derive(Debug, Clone, Default)]
pub struct ParseOptionsBuilder {
    options: ParseOptions,
}

impl ParseOptionsBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum nesting depth.
    ///
    /// # Parameters
    ///
    /// - `depth`: Maximum nesting level (default: 256)
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.options.max_depth = depth;
        self
    }

    pub fn build(self) -> ParseOptions {
        self.options
    }
}

/// Result of parsing: the profile plus every lexer and parser diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOutput {
    pub profile: Profile,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseOutput {
    /// Returns `true` if any diagnostic has error severity.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    /// Returns `true` if the profile is ready for use. Warnings are allowed.
    pub fn is_ok(&self) -> bool {
        !self.has_errors()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(|d| d.is_error())
    }
}

/// Marker for a top-level form that could not be parsed. The diagnostic
/// explaining why has already been recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Abort;

pub(crate) type PResult<T> = Result<T, Abort>;

/// Recursive-descent parser over a tokenized [`SourceFile`].
#[derive(Debug)]
pub struct Parser<'src> {
    source: &'src SourceFile,
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
    options: ParseOptions,
    diagnostics: DiagnosticCollector,
}

impl<'src> Parser<'src> {
    pub fn new(source: &'src SourceFile) -> Self {
        Self::with_options(source, ParseOptions::default())
    }

    /// Tokenizes `source` and prepares a parser. Lexer diagnostics are
    /// carried into the parse output.
    pub fn with_options(source: &'src SourceFile, options: ParseOptions) -> Self {
        let mut lexer = Lexer::new(source);
        let tokens = lexer.tokenize();
        let mut diagnostics = DiagnosticCollector::new();
        diagnostics.extend(lexer.into_diagnostics());

        Self {
            source,
            tokens,
            pos: 0,
            depth: 0,
            options,
            diagnostics,
        }
    }

    /// Parses the whole token stream. Always returns a profile.
    pub fn parse(mut self) -> ParseOutput {
        let mut profile = Profile::default();

        while !self.at_eof() {
            if !self.at(&TokenKind::LeftParen) {
                let token = self.peek();
                let message = format!(
                    "unexpected {} at top level, expected '('",
                    token.kind.describe()
                );
                let range = token.range;
                self.error(DiagnosticCode::UnexpectedToken, message, range);
                self.synchronize();
                continue;
            }
            if self.parse_top_level(&mut profile).is_err() {
                self.synchronize();
            }
        }

        profile.range = self.source.full_range();
        let diagnostics = self.diagnostics.into_vec();
        debug!(
            "Parsed profile: {} imports, {} definitions, {} rules, {} diagnostics",
            profile.imports.len(),
            profile.definitions.len(),
            profile.rules.len(),
            diagnostics.len()
        );

        ParseOutput {
            profile,
            diagnostics,
        }
    }

    // ==================== Token access ====================

    /// The current token. The stream always ends in `Eof`, which is
    /// returned for any position past the end.
    #[inline]
    fn peek(&self) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[self.pos.min(last)]
    }

    #[inline]
    fn at(&self, kind: &TokenKind) -> bool {
        &self.peek().kind == kind
    }

    #[inline]
    fn at_eof(&self) -> bool {
        self.peek().is_eof()
    }

    /// Consumes the current token and returns its range. Never moves past
    /// `Eof`.
    fn bump(&mut self) -> SourceRange {
        let range = self.peek().range;
        if !self.at_eof() {
            self.pos += 1;
        }
        range
    }

    /// End of the most recently consumed token.
    fn prev_end(&self) -> SourcePosition {
        match self.pos.checked_sub(1).and_then(|i| self.tokens.get(i)) {
            Some(token) => token.range.end,
            None => SourcePosition::start(),
        }
    }

    // ==================== Diagnostics ====================

    fn report(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    fn error(&mut self, code: DiagnosticCode, message: impl Into<String>, range: SourceRange) {
        self.report(Diagnostic::new(code, message, range));
    }

    fn warning(&mut self, code: DiagnosticCode, message: impl Into<String>, range: SourceRange) {
        self.report(Diagnostic::new(code, message, range).with_severity(Severity::Warning));
    }

    /// Records an error at the current token and returns [`Abort`].
    fn fail(&mut self, code: DiagnosticCode, message: impl Into<String>) -> Abort {
        let range = self.peek().range;
        self.error(code, message, range);
        Abort
    }

    /// Records `expected {what}, found {current}` and returns [`Abort`].
    fn expected(&mut self, code: DiagnosticCode, what: &str) -> Abort {
        let message = format!("expected {what}, found {}", self.peek().kind.describe());
        self.fail(code, message)
    }

    /// Records a missing `)` with a fix that inserts it after the last
    /// consumed token.
    fn missing_close(&mut self, context: &str) -> Abort {
        let insert_at = SourceRange::point(self.prev_end());
        let message = format!(
            "expected ')' to close {context}, found {}",
            self.peek().kind.describe()
        );
        let diagnostic = Diagnostic::new(DiagnosticCode::ExpectedCloseParen, message, self.peek().range)
            .with_fix(Fix::new("insert ')'", insert_at, ")"));
        self.report(diagnostic);
        Abort
    }

    /// Consumes `)` and returns its end position.
    fn expect_close(&mut self, context: &str) -> PResult<SourcePosition> {
        if self.at(&TokenKind::RightParen) {
            Ok(self.bump().end)
        } else {
            Err(self.missing_close(context))
        }
    }

    /// Runs `f` one nesting level deeper, enforcing `max_depth`.
    fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> PResult<T>) -> PResult<T> {
        if self.depth >= self.options.max_depth {
            let message = format!(
                "nesting exceeds the maximum depth of {}",
                self.options.max_depth
            );
            return Err(self.fail(DiagnosticCode::NestingTooDeep, message));
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }
}

/// Parses profile source text with default options.
pub fn parse(text: &str) -> ParseOutput {
    parse_with_options(text, ParseOptions::default())
}

/// Parses profile source text.
pub fn parse_with_options(text: &str, options: ParseOptions) -> ParseOutput {
    let source = SourceFile::new(text);
    Parser::with_options(&source, options).parse()
}
