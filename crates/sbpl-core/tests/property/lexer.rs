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

//! Lexer invariants over arbitrary input.

use proptest::prelude::*;
use sbpl_core::lex::{tokenize, Token, TokenKind};
use sbpl_core::{SourceFile, SourcePosition};

use super::any_source;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Property: tokenization terminates with exactly one trailing `Eof`.
    #[test]
    fn prop_single_trailing_eof(text in any_source()) {
        let file = SourceFile::new(text);
        let (tokens, _) = tokenize(&file);

        prop_assert!(tokens.last().is_some_and(Token::is_eof));
        prop_assert_eq!(tokens.iter().filter(|t| t.is_eof()).count(), 1);
    }

    /// Property: concatenating every token's full text rebuilds the input.
    #[test]
    fn prop_trivia_partition(text in any_source()) {
        let file = SourceFile::new(text.clone());
        let (tokens, _) = tokenize(&file);

        let rebuilt: String = tokens.iter().map(Token::full_text).collect();
        prop_assert_eq!(rebuilt, text);
    }

    /// Property: full ranges tile the input with no gaps or overlaps.
    #[test]
    fn prop_full_ranges_are_contiguous(text in any_source()) {
        let file = SourceFile::new(text);
        let (tokens, _) = tokenize(&file);

        let mut expected_start = 0;
        for token in &tokens {
            prop_assert_eq!(token.full_range.start.offset, expected_start);
            prop_assert!(token.full_range.contains_range(token.range));
            expected_start = token.full_range.end.offset;
        }
        prop_assert_eq!(expected_start, file.len());
    }

    /// Property: token ranges never go backwards, and every position the
    /// lexer reports agrees with the source file's own conversion.
    #[test]
    fn prop_positions_are_monotonic(text in any_source()) {
        let file = SourceFile::new(text);
        let (tokens, _) = tokenize(&file);

        prop_assert_eq!(file.position(0), Some(SourcePosition::new(0, 0, 0)));
        for pair in tokens.windows(2) {
            prop_assert!(pair[0].range.end <= pair[1].range.start);
        }
        for token in &tokens {
            prop_assert_eq!(file.position(token.range.start.offset), Some(token.range.start));
            prop_assert_eq!(file.position(token.range.end.offset), Some(token.range.end));
        }
    }

    /// Property: the lexer only emits lexical diagnostics, each inside the file.
    #[test]
    fn prop_diagnostics_are_in_bounds(text in any_source()) {
        let file = SourceFile::new(text);
        let (_, diagnostics) = tokenize(&file);

        for diagnostic in &diagnostics {
            prop_assert_eq!(diagnostic.code.as_str().as_bytes()[0], b'L');
            prop_assert!(diagnostic.range.end.offset <= file.len());
            prop_assert!(diagnostic.range.start <= diagnostic.range.end);
        }
    }

    /// Property: the lexer never synthesizes `Missing` tokens.
    #[test]
    fn prop_no_missing_tokens(text in any_source()) {
        let (tokens, _) = tokenize(&SourceFile::new(text));
        prop_assert!(tokens.iter().all(|t| !matches!(t.kind, TokenKind::Missing(_))));
    }

    /// Property: integers in range survive a lex.
    #[test]
    fn prop_integer_literals(value in any::<i64>()) {
        let (tokens, diagnostics) = tokenize(&SourceFile::new(value.to_string()));
        prop_assert!(diagnostics.is_empty());
        prop_assert_eq!(&tokens[0].kind, &TokenKind::Integer(value));
    }
}
