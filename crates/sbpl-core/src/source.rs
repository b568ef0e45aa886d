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

//! Immutable source buffer with offset/position conversion.
//!
//! The line table is built once at construction by scanning for `\n`
//! bytes. A lone `\r` never starts a new line; carriage returns are a
//! token-level concern handled by the trivia scanner.
//!
//! # Examples
//!
//! ```
//! use sbpl_core::{SourceFile, SourcePosition};
//!
//! let file = SourceFile::new("(version 1)\n(deny default)\n");
//! assert_eq!(file.line_count(), 3);
//! assert_eq!(file.position(12), Some(SourcePosition::new(1, 0, 12)));
//! assert_eq!(file.offset(1, 6), Some(18));
//! assert_eq!(file.line_text(1), Some("(deny default)"));
//! ```

use crate::span::{SourcePosition, SourceRange};

/// An immutable source text plus its line-start table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    text: String,
    /// Byte offset of the first byte of every line. Always starts with 0.
    line_starts: Vec<usize>,
}

impl SourceFile {
    /// Builds a source file, indexing every line start.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let mut line_starts = Vec::with_capacity(text.len() / 32 + 1);
        line_starts.push(0);
        line_starts.extend(
            text.bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| i + 1),
        );
        Self { text, line_starts }
    }

    /// The full source text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length of the source in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if the source is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of lines. An empty source, and a source ending in `\n`,
    /// both count the (empty) final line.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Converts a byte offset into a position.
    ///
    /// Returns `None` when `offset` is past the end of the text. The offset
    /// equal to the text length is valid (the end-of-file position). An
    /// offset inside a multi-byte character resolves to that character's
    /// first byte.
    pub fn position(&self, offset: usize) -> Option<SourcePosition> {
        if offset > self.text.len() {
            return None;
        }
        let mut offset = offset;
        while !self.text.is_char_boundary(offset) {
            offset -= 1;
        }

        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let line_start = self.line_starts[line];
        let column = utf16_len(&self.text[line_start..offset]);
        Some(SourcePosition::new(line, column, offset))
    }

    /// Converts a line and UTF-16 column into a byte offset.
    ///
    /// Returns `None` for an unknown line, for a column past the end of the
    /// line (terminators excluded), or for a column that splits a surrogate
    /// pair.
    pub fn offset(&self, line: usize, utf16_column: usize) -> Option<usize> {
        let start = *self.line_starts.get(line)?;
        let end = self.content_end(line);

        let mut units = 0;
        for (idx, ch) in self.text[start..end].char_indices() {
            if units == utf16_column {
                return Some(start + idx);
            }
            units += ch.len_utf16();
            if units > utf16_column {
                return None;
            }
        }
        (units == utf16_column).then_some(end)
    }

    /// Position of the end of the text.
    pub fn end_position(&self) -> SourcePosition {
        let line = self.line_starts.len() - 1;
        let start = self.line_starts[line];
        SourcePosition::new(line, utf16_len(&self.text[start..]), self.text.len())
    }

    /// Range covering the entire text.
    pub fn full_range(&self) -> SourceRange {
        SourceRange::new(SourcePosition::start(), self.end_position())
    }

    /// Text covered by `range`. Offsets are clamped to the text and to
    /// character boundaries, so this never panics.
    pub fn text(&self, range: SourceRange) -> &str {
        let end = self.floor_boundary(range.end.offset.min(self.text.len()));
        let start = self.floor_boundary(range.start.offset.min(end));
        &self.text[start..end]
    }

    /// Text of a line without its trailing line terminator.
    pub fn line_text(&self, line: usize) -> Option<&str> {
        let start = *self.line_starts.get(line)?;
        Some(&self.text[start..self.content_end(line)])
    }

    /// Range of a line, excluding its trailing line terminator.
    pub fn line_range(&self, line: usize) -> Option<SourceRange> {
        let start = *self.line_starts.get(line)?;
        let end = self.content_end(line);
        let start_pos = SourcePosition::new(line, 0, start);
        let end_pos = SourcePosition::new(line, utf16_len(&self.text[start..end]), end);
        Some(SourceRange::new(start_pos, end_pos))
    }

    /// End offset of a line's content: before `\n`, `\r\n` or a trailing `\r`.
    fn content_end(&self, line: usize) -> usize {
        let mut end = self
            .line_starts
            .get(line + 1)
            .copied()
            .unwrap_or(self.text.len());
        let bytes = self.text.as_bytes();
        let start = self.line_starts[line];
        if end > start && bytes[end - 1] == b'\n' {
            end -= 1;
        }
        if end > start && bytes[end - 1] == b'\r' {
            end -= 1;
        }
        end
    }

    fn floor_boundary(&self, mut offset: usize) -> usize {
        while !self.text.is_char_boundary(offset) {
            offset -= 1;
        }
        offset
    }
}

/// Length of `s` in UTF-16 code units.
pub(crate) fn utf16_len(s: &str) -> usize {
    s.chars().map(char::len_utf16).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file() {
        let file = SourceFile::new("");
        assert!(file.is_empty());
        assert_eq!(file.line_count(), 1);
        assert_eq!(file.position(0), Some(SourcePosition::start()));
        assert_eq!(file.position(1), None);
        assert_eq!(file.line_text(0), Some(""));
        assert_eq!(file.line_text(1), None);
    }

    #[test]
    fn test_position_zero_is_origin() {
        let file = SourceFile::new("(allow default)");
        assert_eq!(file.position(0), Some(SourcePosition::new(0, 0, 0)));
    }

    #[test]
    fn test_position_across_lines() {
        let file = SourceFile::new("ab\ncd\n\nef");
        assert_eq!(file.position(2), Some(SourcePosition::new(0, 2, 2)));
        assert_eq!(file.position(3), Some(SourcePosition::new(1, 0, 3)));
        assert_eq!(file.position(6), Some(SourcePosition::new(2, 0, 6)));
        assert_eq!(file.position(8), Some(SourcePosition::new(3, 1, 8)));
        assert_eq!(file.position(9), Some(SourcePosition::new(3, 2, 9)));
        assert_eq!(file.position(10), None);
    }

    #[test]
    fn test_astral_character_counts_two_units() {
        let file = SourceFile::new("a😀b");
        // 'a' is 1 byte, the emoji is 4 bytes.
        assert_eq!(file.position(5), Some(SourcePosition::new(0, 3, 5)));
        assert_eq!(file.position(6), Some(SourcePosition::new(0, 4, 6)));
        assert_eq!(file.offset(0, 3), Some(5));
        assert_eq!(file.offset(0, 2), None);
    }

    #[test]
    fn test_position_inside_multibyte_char_snaps_back() {
        let file = SourceFile::new("é!");
        assert_eq!(file.position(1), Some(SourcePosition::new(0, 0, 0)));
        assert_eq!(file.position(2), Some(SourcePosition::new(0, 1, 2)));
    }

    #[test]
    fn test_lone_carriage_return_is_not_a_line_break() {
        let file = SourceFile::new("a\rb\r\nc");
        assert_eq!(file.line_count(), 2);
        assert_eq!(file.position(2), Some(SourcePosition::new(0, 2, 2)));
        assert_eq!(file.line_text(0), Some("a\rb"));
        assert_eq!(file.line_text(1), Some("c"));
    }

    #[test]
    fn test_offset_round_trips_position() {
        let text = "(version 1)\n(allow \"ü\" 😀)\n";
        let file = SourceFile::new(text);
        for (offset, _) in text.char_indices() {
            let pos = file.position(offset).unwrap();
            assert_eq!(file.offset(pos.line, pos.column), Some(offset));
        }
    }

    #[test]
    fn test_offset_rejects_out_of_range() {
        let file = SourceFile::new("abc\nde");
        assert_eq!(file.offset(0, 3), Some(3));
        assert_eq!(file.offset(0, 4), None);
        assert_eq!(file.offset(1, 2), Some(6));
        assert_eq!(file.offset(2, 0), None);
    }

    #[test]
    fn test_line_text_strips_terminators() {
        let file = SourceFile::new("one\r\ntwo\nthree\r");
        assert_eq!(file.line_text(0), Some("one"));
        assert_eq!(file.line_text(1), Some("two"));
        assert_eq!(file.line_text(2), Some("three"));
    }

    #[test]
    fn test_line_range() {
        let file = SourceFile::new("ab\r\ncde");
        let first = file.line_range(0).unwrap();
        assert_eq!(first.start, SourcePosition::new(0, 0, 0));
        assert_eq!(first.end, SourcePosition::new(0, 2, 2));
        let second = file.line_range(1).unwrap();
        assert_eq!(second.start, SourcePosition::new(1, 0, 4));
        assert_eq!(second.end, SourcePosition::new(1, 3, 7));
        assert!(file.line_range(2).is_none());
    }

    #[test]
    fn test_text_in_range() {
        let file = SourceFile::new("(deny default)");
        let range = SourceRange::new(
            file.position(1).unwrap(),
            file.position(5).unwrap(),
        );
        assert_eq!(file.text(range), "deny");
    }

    #[test]
    fn test_text_clamps_out_of_bounds() {
        let file = SourceFile::new("abc");
        let range = SourceRange::new(
            SourcePosition::new(0, 1, 1),
            SourcePosition::new(0, 99, 99),
        );
        assert_eq!(file.text(range), "bc");
    }

    #[test]
    fn test_full_range() {
        let file = SourceFile::new("a\nbc");
        let range = file.full_range();
        assert_eq!(range.start, SourcePosition::start());
        assert_eq!(range.end, SourcePosition::new(1, 2, 4));
    }
}
