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

//! Stable diagnostic codes.
//!
//! Codes are grouped by prefix: `L` lexical, `P` syntactic, `S` semantic,
//! `W` warnings. Semantic codes and most warnings are reserved for a
//! validation layer above this crate.

use std::fmt;
use std::str::FromStr;

use super::Severity;

/// Category of a diagnostic code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCategory {
    Lexical,
    Syntactic,
    Semantic,
    Warning,
}

macro_rules! diagnostic_codes {
    ($($variant:ident => $code:literal, $category:ident, $severity:ident;)*) => {
        /// Closed set of diagnostic codes.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum DiagnosticCode {
            $($variant,)*
        }

        impl DiagnosticCode {
            /// Every code, in declaration order.
            pub const ALL: &'static [DiagnosticCode] = &[$(DiagnosticCode::$variant,)*];

            /// The stable textual code, e.g. `"P003"`.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(DiagnosticCode::$variant => $code,)*
                }
            }

            /// The category implied by the code prefix.
            pub const fn category(self) -> DiagnosticCategory {
                match self {
                    $(DiagnosticCode::$variant => DiagnosticCategory::$category,)*
                }
            }

            /// Severity a diagnostic gets unless the emitter overrides it.
            pub const fn default_severity(self) -> Severity {
                match self {
                    $(DiagnosticCode::$variant => Severity::$severity,)*
                }
            }
        }
    };
}

diagnostic_codes! {
    UnknownCharacter => "L001", Lexical, Error;
    UnterminatedString => "L002", Lexical, Error;
    UnterminatedRawString => "L003", Lexical, Error;
    UnterminatedBlockComment => "L004", Lexical, Error;
    InvalidEscape => "L005", Lexical, Error;
    InvalidHexEscape => "L006", Lexical, Error;
    InvalidIntegerLiteral => "L007", Lexical, Error;
    UnexpectedEndOfFile => "L008", Lexical, Error;

    ExpectedToken => "P001", Syntactic, Error;
    ExpectedExpression => "P002", Syntactic, Error;
    ExpectedCloseParen => "P003", Syntactic, Error;
    UnexpectedToken => "P004", Syntactic, Error;
    MissingArgument => "P005", Syntactic, Error;
    TooManyArguments => "P006", Syntactic, Error;
    InvalidForm => "P007", Syntactic, Error;
    EmptyList => "P008", Syntactic, Warning;
    NestingTooDeep => "P009", Syntactic, Error;

    UndefinedVariable => "S001", Semantic, Error;
    UndefinedFunction => "S002", Semantic, Error;
    TypeMismatch => "S003", Semantic, Error;
    InvalidOperation => "S004", Semantic, Error;
    InvalidFilter => "S005", Semantic, Error;
    DuplicateDefinition => "S006", Semantic, Error;
    CircularImport => "S007", Semantic, Error;
    MissingImport => "S008", Semantic, Error;
    InvalidRegex => "S009", Semantic, Error;

    UnusedDefinition => "W001", Warning, Warning;
    DeprecatedOperation => "W002", Warning, Warning;
    EmptyRule => "W003", Warning, Warning;
    DuplicateDebugMode => "W004", Warning, Warning;
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown diagnostic code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown diagnostic code '{0}'")]
pub struct UnknownCodeError(pub String);

impl FromStr for DiagnosticCode {
    type Err = UnknownCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DiagnosticCode::ALL
            .iter()
            .copied()
            .find(|code| code.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownCodeError(s.to_string()))
    }
}
