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

//! Token types.

use std::fmt;

use super::trivia::Trivia;
use crate::span::SourceRange;

/// The kind of a token, including its decoded payload.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    LeftParen,
    RightParen,
    /// Signed integer literal. Invalid literals decode to `0`.
    Integer(i64),
    /// `"..."` with escapes processed.
    String(String),
    /// `#"..."` taken verbatim.
    RawString(String),
    /// `#t` / `#f`
    Boolean(bool),
    Symbol(String),
    Eof,
    /// A character no token starts with.
    Unknown(char),
    /// Placeholder for an expected token that is absent; carries a
    /// description of what was expected. Synthesized by the parser, never
    /// produced by the lexer.
    Missing(String),
}

impl TokenKind {
    /// Short human-readable description used in diagnostics.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::LeftParen => "'('".to_string(),
            TokenKind::RightParen => "')'".to_string(),
            TokenKind::Integer(n) => format!("integer {n}"),
            TokenKind::String(_) => "string".to_string(),
            TokenKind::RawString(_) => "raw string".to_string(),
            TokenKind::Boolean(_) => "boolean".to_string(),
            TokenKind::Symbol(name) => format!("symbol '{name}'"),
            TokenKind::Eof => "end of file".to_string(),
            TokenKind::Unknown(c) => format!("unknown character {c:?}"),
            TokenKind::Missing(expected) => format!("missing {expected}"),
        }
    }

    /// Name of the variant, used by token dumps.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::LeftParen => "left-paren",
            TokenKind::RightParen => "right-paren",
            TokenKind::Integer(_) => "integer",
            TokenKind::String(_) => "string",
            TokenKind::RawString(_) => "raw-string",
            TokenKind::Boolean(_) => "boolean",
            TokenKind::Symbol(_) => "symbol",
            TokenKind::Eof => "eof",
            TokenKind::Unknown(_) => "unknown",
            TokenKind::Missing(_) => "missing",
        }
    }
}

/// A token with its surrounding trivia.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// The raw lexeme as it appears in the source.
    pub text: String,
    /// Range of the lexeme, trivia excluded.
    pub range: SourceRange,
    /// Range including leading and trailing trivia.
    pub full_range: SourceRange,
    pub leading_trivia: Trivia,
    pub trailing_trivia: Trivia,
}

impl Token {
    /// Builds a zero-width placeholder for an expected token.
    pub fn missing(expected: impl Into<String>, range: SourceRange) -> Self {
        Self {
            kind: TokenKind::Missing(expected.into()),
            text: String::new(),
            range,
            full_range: range,
            leading_trivia: Trivia::new(),
            trailing_trivia: Trivia::new(),
        }
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    #[inline]
    pub fn is_missing(&self) -> bool {
        matches!(self.kind, TokenKind::Missing(_))
    }

    /// Leading trivia, lexeme and trailing trivia, exactly as in the source.
    pub fn full_text(&self) -> String {
        let mut out = self.leading_trivia.text();
        out.push_str(&self.text);
        out.push_str(&self.trailing_trivia.text());
        out
    }

    /// Symbol name, if this is a symbol token.
    pub fn as_symbol(&self) -> Option<&str> {
        match &self.kind {
            TokenKind::Symbol(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    /// `line:column kind text`, 1-based, as printed by token dumps.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.range.start, self.kind.name())?;
        if !self.text.is_empty() {
            write!(f, " {:?}", self.text)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lex::trivia::TriviaPiece;
    use crate::span::SourcePosition;

    #[test]
    fn test_full_text_includes_trivia() {
        let range = SourceRange::point(SourcePosition::new(0, 2, 2));
        let token = Token {
            kind: TokenKind::Symbol("allow".into()),
            text: "allow".into(),
            range,
            full_range: range,
            leading_trivia: vec![TriviaPiece::Spaces(2)].into_iter().collect(),
            trailing_trivia: vec![
                TriviaPiece::LineComment("; ok".into()),
                TriviaPiece::Newline,
            ]
            .into_iter()
            .collect(),
        };
        assert_eq!(token.full_text(), "  allow; ok\n");
        assert_eq!(token.as_symbol(), Some("allow"));
    }

    #[test]
    fn test_missing_token() {
        let range = SourceRange::point(SourcePosition::new(1, 0, 5));
        let token = Token::missing("')'", range);
        assert!(token.is_missing());
        assert!(!token.is_eof());
        assert_eq!(token.kind.describe(), "missing ')'");
        assert_eq!(token.full_text(), "");
    }

    #[test]
    fn test_display() {
        let range = SourceRange::point(SourcePosition::new(2, 4, 20));
        let token = Token {
            kind: TokenKind::Integer(7),
            text: "7".into(),
            range,
            full_range: range,
            leading_trivia: Trivia::new(),
            trailing_trivia: Trivia::new(),
        };
        assert_eq!(token.to_string(), "3:5 integer \"7\"");
    }
}
