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

//! Whitespace and comments kept alongside tokens.
//!
//! Comment pieces store their complete source text, delimiters included,
//! so concatenating [`Trivia::text`] with token lexemes rebuilds the input
//! byte for byte.

use std::fmt::Write;

/// A single run of non-semantic source text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TriviaPiece {
    /// A run of `n` spaces.
    Spaces(usize),
    /// A run of `n` horizontal tabs.
    Tabs(usize),
    /// `\n`
    Newline,
    /// A lone `\r`
    CarriageReturn,
    /// `\r\n`
    CarriageReturnLineFeed,
    /// `; ...` up to, not including, the line terminator.
    LineComment(String),
    /// `#| ... |#`, possibly nested, possibly unterminated at end of input.
    BlockComment(String),
}

impl TriviaPiece {
    /// Length of the piece in source bytes.
    pub fn len(&self) -> usize {
        match self {
            Self::Spaces(n) | Self::Tabs(n) => *n,
            Self::Newline | Self::CarriageReturn => 1,
            Self::CarriageReturnLineFeed => 2,
            Self::LineComment(text) | Self::BlockComment(text) => text.len(),
        }
    }

    /// Returns `true` for a zero-length piece (never produced by the lexer).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` for `\n`, `\r` and `\r\n`.
    pub fn is_line_terminator(&self) -> bool {
        matches!(
            self,
            Self::Newline | Self::CarriageReturn | Self::CarriageReturnLineFeed
        )
    }

    pub fn is_comment(&self) -> bool {
        matches!(self, Self::LineComment(_) | Self::BlockComment(_))
    }

    /// Appends the exact source text of this piece to `out`.
    pub fn write_to(&self, out: &mut String) {
        match self {
            Self::Spaces(n) => out.extend(std::iter::repeat(' ').take(*n)),
            Self::Tabs(n) => out.extend(std::iter::repeat('\t').take(*n)),
            Self::Newline => out.push('\n'),
            Self::CarriageReturn => out.push('\r'),
            Self::CarriageReturnLineFeed => out.push_str("\r\n"),
            Self::LineComment(text) | Self::BlockComment(text) => out.push_str(text),
        }
    }
}

/// An ordered sequence of trivia pieces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Trivia {
    pieces: Vec<TriviaPiece>,
}

impl Trivia {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pieces(&self) -> &[TriviaPiece] {
        &self.pieces
    }

    pub fn push(&mut self, piece: TriviaPiece) {
        self.pieces.push(piece);
    }

    /// Returns `true` if there are no pieces.
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Total length in source bytes.
    pub fn len(&self) -> usize {
        self.pieces.iter().map(TriviaPiece::len).sum()
    }

    pub fn has_line_terminator(&self) -> bool {
        self.pieces.iter().any(TriviaPiece::is_line_terminator)
    }

    pub fn comments(&self) -> impl Iterator<Item = &TriviaPiece> {
        self.pieces.iter().filter(|p| p.is_comment())
    }

    /// The exact source text covered by this trivia.
    pub fn text(&self) -> String {
        let mut out = String::with_capacity(self.len());
        for piece in &self.pieces {
            piece.write_to(&mut out);
        }
        out
    }

    /// Concatenates two trivia sequences, `self` first.
    pub fn concat(mut self, other: Trivia) -> Trivia {
        self.pieces.extend(other.pieces);
        self
    }
}

impl Extend<TriviaPiece> for Trivia {
    fn extend<I: IntoIterator<Item = TriviaPiece>>(&mut self, iter: I) {
        self.pieces.extend(iter);
    }
}

impl FromIterator<TriviaPiece> for Trivia {
    fn from_iter<I: IntoIterator<Item = TriviaPiece>>(iter: I) -> Self {
        Self {
            pieces: iter.into_iter().collect(),
        }
    }
}

impl std::fmt::Display for Trivia {
    /// Debug-friendly rendering, e.g. `[spaces(2) comment(; hi) newline]`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_char('[')?;
        for (i, piece) in self.pieces.iter().enumerate() {
            if i > 0 {
                f.write_char(' ')?;
            }
            match piece {
                TriviaPiece::Spaces(n) => write!(f, "spaces({n})")?,
                TriviaPiece::Tabs(n) => write!(f, "tabs({n})")?,
                TriviaPiece::Newline => f.write_str("newline")?,
                TriviaPiece::CarriageReturn => f.write_str("cr")?,
                TriviaPiece::CarriageReturnLineFeed => f.write_str("crlf")?,
                TriviaPiece::LineComment(text) => write!(f, "comment({text})")?,
                TriviaPiece::BlockComment(text) => write!(f, "block({text:?})")?,
            }
        }
        f.write_char(']')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_lengths() {
        assert_eq!(TriviaPiece::Spaces(4).len(), 4);
        assert_eq!(TriviaPiece::CarriageReturnLineFeed.len(), 2);
        assert_eq!(TriviaPiece::LineComment("; hi".into()).len(), 4);
    }

    #[test]
    fn test_text_reconstructs_source() {
        let trivia: Trivia = vec![
            TriviaPiece::Spaces(2),
            TriviaPiece::LineComment("; note".into()),
            TriviaPiece::CarriageReturnLineFeed,
            TriviaPiece::Tabs(1),
            TriviaPiece::BlockComment("#| a #| b |# |#".into()),
        ]
        .into_iter()
        .collect();
        assert_eq!(trivia.text(), "  ; note\r\n\t#| a #| b |# |#");
        assert_eq!(trivia.len(), trivia.text().len());
    }

    #[test]
    fn test_concat_is_associative() {
        let a: Trivia = vec![TriviaPiece::Spaces(1)].into_iter().collect();
        let b: Trivia = vec![TriviaPiece::Newline].into_iter().collect();
        let c: Trivia = vec![TriviaPiece::Tabs(2)].into_iter().collect();

        let left = a.clone().concat(b.clone()).concat(c.clone());
        let right = a.concat(b.concat(c));
        assert_eq!(left, right);
        assert_eq!(left.text(), " \n\t\t");
    }

    #[test]
    fn test_line_terminator_detection() {
        let mut trivia = Trivia::new();
        trivia.push(TriviaPiece::Spaces(3));
        assert!(!trivia.has_line_terminator());
        trivia.push(TriviaPiece::CarriageReturn);
        assert!(trivia.has_line_terminator());
    }

    #[test]
    fn test_comments_iterator() {
        let trivia: Trivia = vec![
            TriviaPiece::LineComment(";a".into()),
            TriviaPiece::Newline,
            TriviaPiece::BlockComment("#|b|#".into()),
        ]
        .into_iter()
        .collect();
        assert_eq!(trivia.comments().count(), 2);
    }
}
