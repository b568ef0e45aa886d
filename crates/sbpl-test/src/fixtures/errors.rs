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

//! Malformed profile sources.
//!
//! Each tuple contains (name, source, a code the source must produce).

use sbpl_core::DiagnosticCode;

/// Malformed samples covering every emitted diagnostic code.
pub fn malformed_samples() -> Vec<(&'static str, &'static str, DiagnosticCode)> {
    vec![
        ("unknown_character", "(allow @)", DiagnosticCode::UnknownCharacter),
        ("unterminated_string", "(import \"open\n)", DiagnosticCode::UnterminatedString),
        ("unterminated_raw_string", "(import #\"open", DiagnosticCode::UnterminatedRawString),
        ("unterminated_block_comment", "(deny default) #| never", DiagnosticCode::UnterminatedBlockComment),
        ("invalid_escape", "(define s \"\\q\")", DiagnosticCode::InvalidEscape),
        ("short_hex_escape", "(define s \"\\x4\")", DiagnosticCode::InvalidHexEscape),
        ("integer_overflow", "(version 99999999999999999999)", DiagnosticCode::InvalidIntegerLiteral),
        ("hash_at_eof", "(deny default) #", DiagnosticCode::UnexpectedEndOfFile),
        ("version_not_integer", "(version one)", DiagnosticCode::ExpectedToken),
        ("bad_expression", "(define x @)", DiagnosticCode::ExpectedExpression),
        ("missing_close_paren", "(version 1", DiagnosticCode::ExpectedCloseParen),
        ("stray_top_level_token", "deny", DiagnosticCode::UnexpectedToken),
        ("filter_without_value", "(allow file-read* (literal))", DiagnosticCode::MissingArgument),
        ("require_not_extra", "(allow x (require-not (a 1) (b 2)))", DiagnosticCode::TooManyArguments),
        ("invalid_debug_mode", "(debug maybe)", DiagnosticCode::InvalidForm),
        ("empty_list", "()", DiagnosticCode::EmptyList),
        ("duplicate_version", "(version 1)\n(version 2)", DiagnosticCode::DuplicateDefinition),
        ("empty_rule", "(deny)", DiagnosticCode::EmptyRule),
        ("duplicate_debug", "(debug allow)\n(debug deny)", DiagnosticCode::DuplicateDebugMode),
    ]
}

/// Inputs that are hostile rather than merely malformed.
pub fn hostile_samples() -> Vec<(&'static str, String)> {
    vec![
        ("deep_lists", format!("(define x {}{})", "(".repeat(5000), ")".repeat(5000))),
        ("deep_filters", format!("(allow x {}(a 1){})", "(require-all ".repeat(5000), ")".repeat(5000))),
        ("only_open_parens", "(".repeat(2000)),
        ("only_close_parens", ")".repeat(2000)),
        ("long_comment", format!(";{}", "x".repeat(100_000))),
        ("nested_comments", format!("{}{}", "#|".repeat(1000), "|#".repeat(999))),
    ]
}
