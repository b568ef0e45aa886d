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

//! Diagnostic records produced by the lexer and parser.
//!
//! Diagnostics are values, never panics: every malformed input becomes a
//! [`Diagnostic`] with a stable [`DiagnosticCode`], a severity, a message and
//! a precise [`SourceRange`].
//!
//! # Examples
//!
//! ```
//! use sbpl_core::{Diagnostic, DiagnosticCode, Severity, SourcePosition, SourceRange};
//!
//! let at = SourcePosition::new(2, 4, 30);
//! let diag = Diagnostic::new(
//!     DiagnosticCode::ExpectedCloseParen,
//!     "expected ')'",
//!     SourceRange::point(at),
//! );
//! assert_eq!(diag.severity, Severity::Error);
//! assert_eq!(diag.to_string(), "3:5: error: expected ')'");
//! ```

mod code;
mod collector;

pub use code::{DiagnosticCategory, DiagnosticCode, UnknownCodeError};
pub use collector::DiagnosticCollector;

use std::fmt;

use crate::span::SourceRange;

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    /// Editor hint
    Hint,
    /// Informational note
    Information,
    /// Might be an issue; the profile is still usable
    Warning,
    /// The profile is not ready for use
    Error,
}

impl Severity {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hint => "hint",
            Self::Information => "information",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A suggested replacement edit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fix {
    /// Short label for the edit, e.g. "insert ')'".
    pub title: String,
    /// Range to replace; zero-width for insertions.
    pub range: SourceRange,
    /// Replacement text.
    pub replacement: String,
}

impl Fix {
    pub fn new(title: impl Into<String>, range: SourceRange, replacement: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            range,
            replacement: replacement.into(),
        }
    }
}

/// A secondary location relevant to a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelatedInformation {
    pub range: SourceRange,
    pub message: String,
}

/// A diagnostic message attached to a source range.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Diagnostic {
    pub code: DiagnosticCode,
    pub message: String,
    pub severity: Severity,
    pub range: SourceRange,
    pub fixes: Vec<Fix>,
    pub related: Vec<RelatedInformation>,
}

impl Diagnostic {
    /// Creates a diagnostic with the code's default severity.
    pub fn new(code: DiagnosticCode, message: impl Into<String>, range: SourceRange) -> Self {
        Self {
            code,
            message: message.into(),
            severity: code.default_severity(),
            range,
            fixes: Vec::new(),
            related: Vec::new(),
        }
    }

    /// Overrides the severity.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Attaches a suggested fix.
    pub fn with_fix(mut self, fix: Fix) -> Self {
        self.fixes.push(fix);
        self
    }

    /// Attaches a related location.
    pub fn with_related(mut self, range: SourceRange, message: impl Into<String>) -> Self {
        self.related.push(RelatedInformation {
            range,
            message: message.into(),
        });
        self
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    /// `line:column: severity: message`, 1-based.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.range.start, self.severity, self.message)
    }
}
