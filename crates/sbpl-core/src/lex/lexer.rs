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

//! Error-tolerant, trivia-preserving lexer.
//!
//! The lexer never fails. Malformed input becomes an `Unknown` token or a
//! best-effort literal plus a [`Diagnostic`], and scanning continues. Every
//! call to [`Lexer::next_token`] returns exactly one token; once the input
//! is exhausted it keeps returning `Eof`.
//!
//! Trivia handling:
//!
//! - leading trivia is collected until the first non-trivia character;
//! - trailing trivia stops after the first line terminator, so a comment
//!   on the same line belongs to the token before it while the following
//!   line belongs to the next token.

use tracing::debug;

use super::chars::{is_line_terminator, is_symbol_continue, is_symbol_start};
use super::token::{Token, TokenKind};
use super::trivia::{Trivia, TriviaPiece};
use crate::diagnostic::{Diagnostic, DiagnosticCode};
use crate::source::SourceFile;
use crate::span::{SourcePosition, SourceRange};

/// Replacement for escapes that cannot be decoded.
const REPLACEMENT_CHAR: char = '\u{FFFD}';

/// Streaming lexer over a [`SourceFile`].
///
/// # Examples
///
/// ```
/// use sbpl_core::SourceFile;
/// use sbpl_core::lex::{Lexer, TokenKind};
///
/// let file = SourceFile::new("(allow file-read*) ; trailing\n");
/// let tokens = Lexer::new(&file).tokenize();
///
/// assert_eq!(tokens[0].kind, TokenKind::LeftParen);
/// assert_eq!(tokens[1].kind, TokenKind::Symbol("allow".into()));
/// assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
///
/// let rebuilt: String = tokens.iter().map(|t| t.full_text()).collect();
/// assert_eq!(rebuilt, file.as_str());
/// ```
#[derive(Debug)]
pub struct Lexer<'src> {
    source: &'src SourceFile,
    text: &'src str,
    offset: usize,
    line: usize,
    /// Column in UTF-16 code units.
    column: usize,
    diagnostics: Vec<Diagnostic>,
    /// Set once `Eof` has been yielded through the iterator.
    finished: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src SourceFile) -> Self {
        Self {
            source,
            text: source.as_str(),
            offset: 0,
            line: 0,
            column: 0,
            diagnostics: Vec::new(),
            finished: false,
        }
    }

    pub fn source(&self) -> &'src SourceFile {
        self.source
    }

    /// Diagnostics produced so far.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    /// Lexes the remaining input. The result always ends with exactly one
    /// `Eof` token.
    pub fn tokenize(&mut self) -> Vec<Token> {
        let tokens: Vec<Token> = self.by_ref().collect();
        debug!(
            "Tokenized {} bytes into {} tokens ({} diagnostics)",
            self.text.len(),
            tokens.len(),
            self.diagnostics.len()
        );
        tokens
    }

    /// Scans one token together with its leading and trailing trivia.
    pub fn next_token(&mut self) -> Token {
        let full_start = self.cursor();
        let leading_trivia = self.scan_trivia(false);

        let start = self.cursor();
        let kind = self.scan_kind();
        let end = self.cursor();

        let trailing_trivia = if kind == TokenKind::Eof {
            Trivia::new()
        } else {
            self.scan_trivia(true)
        };
        let full_end = self.cursor();

        Token {
            kind,
            text: self.text[start.offset..end.offset].to_string(),
            range: SourceRange::new(start, end),
            full_range: SourceRange::new(full_start, full_end),
            leading_trivia,
            trailing_trivia,
        }
    }

    // ==================== Cursor ====================

    #[inline]
    fn cursor(&self) -> SourcePosition {
        SourcePosition::new(self.line, self.column, self.offset)
    }

    #[inline]
    fn peek(&self) -> Option<char> {
        self.text[self.offset..].chars().next()
    }

    #[inline]
    fn peek_second(&self) -> Option<char> {
        let mut chars = self.text[self.offset..].chars();
        chars.next();
        chars.next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.offset += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += c.len_utf16();
        }
        Some(c)
    }

    fn bump_while(&mut self, pred: impl Fn(char) -> bool) -> usize {
        let mut count = 0;
        while self.peek().is_some_and(&pred) {
            self.bump();
            count += 1;
        }
        count
    }

    fn report(&mut self, code: DiagnosticCode, message: impl Into<String>, start: SourcePosition) {
        let range = SourceRange::new(start, self.cursor());
        self.diagnostics.push(Diagnostic::new(code, message, range));
    }

    // ==================== Trivia ====================

    /// Collects trivia. In trailing mode, stops right after the first line
    /// terminator.
    fn scan_trivia(&mut self, trailing: bool) -> Trivia {
        let mut trivia = Trivia::new();
        loop {
            match self.peek() {
                Some(' ') => {
                    let n = self.bump_while(|c| c == ' ');
                    trivia.push(TriviaPiece::Spaces(n));
                }
                Some('\t') => {
                    let n = self.bump_while(|c| c == '\t');
                    trivia.push(TriviaPiece::Tabs(n));
                }
                Some('\n') => {
                    self.bump();
                    trivia.push(TriviaPiece::Newline);
                    if trailing {
                        break;
                    }
                }
                Some('\r') => {
                    self.bump();
                    if self.peek() == Some('\n') {
                        self.bump();
                        trivia.push(TriviaPiece::CarriageReturnLineFeed);
                    } else {
                        trivia.push(TriviaPiece::CarriageReturn);
                    }
                    if trailing {
                        break;
                    }
                }
                Some(';') => {
                    let start = self.offset;
                    self.bump_while(|c| !is_line_terminator(c));
                    trivia.push(TriviaPiece::LineComment(self.text[start..self.offset].to_string()));
                }
                Some('#') if self.peek_second() == Some('|') => {
                    let (text, terminated) = self.scan_block_comment();
                    trivia.push(TriviaPiece::BlockComment(text));
                    if !terminated {
                        break;
                    }
                }
                _ => break,
            }
        }
        trivia
    }

    /// Scans `#| ... |#` with nesting. Returns the comment text and whether
    /// it was closed before end of input.
    fn scan_block_comment(&mut self) -> (String, bool) {
        let start = self.cursor();
        self.bump();
        self.bump();

        let mut depth = 1usize;
        while depth > 0 {
            match (self.peek(), self.peek_second()) {
                (None, _) => {
                    self.report(
                        DiagnosticCode::UnterminatedBlockComment,
                        "unterminated block comment",
                        start,
                    );
                    return (self.text[start.offset..].to_string(), false);
                }
                (Some('|'), Some('#')) => {
                    self.bump();
                    self.bump();
                    depth -= 1;
                }
                (Some('#'), Some('|')) => {
                    self.bump();
                    self.bump();
                    depth += 1;
                }
                _ => {
                    self.bump();
                }
            }
        }
        (self.text[start.offset..self.offset].to_string(), true)
    }

    // ==================== Tokens ====================

    fn scan_kind(&mut self) -> TokenKind {
        let start = self.cursor();
        let Some(c) = self.peek() else {
            return TokenKind::Eof;
        };

        match c {
            '(' => {
                self.bump();
                TokenKind::LeftParen
            }
            ')' => {
                self.bump();
                TokenKind::RightParen
            }
            '"' => TokenKind::String(self.scan_string(start)),
            '#' => self.scan_hash(start),
            c if c.is_ascii_digit() => self.scan_integer(start),
            '+' | '-' if self.peek_second().is_some_and(|d| d.is_ascii_digit()) => {
                self.scan_integer(start)
            }
            c if is_symbol_start(c) => {
                self.bump_while(is_symbol_continue);
                TokenKind::Symbol(self.text[start.offset..self.offset].to_string())
            }
            c => {
                self.bump();
                self.report(
                    DiagnosticCode::UnknownCharacter,
                    format!("unknown character {c:?}"),
                    start,
                );
                TokenKind::Unknown(c)
            }
        }
    }

    /// Scans a cooked string. The opening quote is at the cursor. The
    /// partial value is returned even when the string is unterminated.
    fn scan_string(&mut self, start: SourcePosition) -> String {
        self.bump();
        let mut value = String::new();
        loop {
            match self.peek() {
                None => {
                    self.report(DiagnosticCode::UnterminatedString, "unterminated string", start);
                    break;
                }
                Some(c) if is_line_terminator(c) => {
                    self.report(DiagnosticCode::UnterminatedString, "unterminated string", start);
                    break;
                }
                Some('"') => {
                    self.bump();
                    break;
                }
                Some('\\') => {
                    let escape_start = self.cursor();
                    self.bump();
                    if !self.scan_escape(escape_start, &mut value) {
                        self.report(DiagnosticCode::UnterminatedString, "unterminated string", start);
                        break;
                    }
                }
                Some(c) => {
                    self.bump();
                    value.push(c);
                }
            }
        }
        value
    }

    /// Decodes one escape after its backslash. Returns `false` when the
    /// backslash is followed by a line terminator or end of input.
    fn scan_escape(&mut self, escape_start: SourcePosition, value: &mut String) -> bool {
        let Some(c) = self.peek() else {
            return false;
        };
        if is_line_terminator(c) {
            return false;
        }
        self.bump();

        match c {
            'n' => value.push('\n'),
            'r' => value.push('\r'),
            't' => value.push('\t'),
            '\\' => value.push('\\'),
            '"' => value.push('"'),
            '0' => value.push('\0'),
            'x' => value.push(self.scan_hex_escape(escape_start, 2)),
            'u' => value.push(self.scan_hex_escape(escape_start, 4)),
            other => {
                self.report(
                    DiagnosticCode::InvalidEscape,
                    format!("invalid escape sequence '\\{other}'"),
                    escape_start,
                );
                value.push(other);
            }
        }
        true
    }

    /// Reads exactly `digits` hex digits. Short or invalid sequences yield
    /// U+FFFD and a diagnostic.
    fn scan_hex_escape(&mut self, escape_start: SourcePosition, digits: usize) -> char {
        let mut code = 0u32;
        let mut read = 0;
        while read < digits {
            match self.peek().and_then(|c| c.to_digit(16)) {
                Some(d) => {
                    self.bump();
                    code = code * 16 + d;
                    read += 1;
                }
                None => break,
            }
        }

        if read < digits {
            self.report(
                DiagnosticCode::InvalidHexEscape,
                format!("expected {digits} hex digits in escape, found {read}"),
                escape_start,
            );
            return REPLACEMENT_CHAR;
        }
        match char::from_u32(code) {
            Some(c) => c,
            None => {
                self.report(
                    DiagnosticCode::InvalidHexEscape,
                    format!("escape value {code:#x} is not a valid character"),
                    escape_start,
                );
                REPLACEMENT_CHAR
            }
        }
    }

    /// Scans after `#`: booleans, raw strings, or an unknown `#`.
    fn scan_hash(&mut self, start: SourcePosition) -> TokenKind {
        self.bump();
        match self.peek() {
            Some('t' | 'T') => {
                self.bump();
                TokenKind::Boolean(true)
            }
            Some('f' | 'F') => {
                self.bump();
                TokenKind::Boolean(false)
            }
            Some('"') => TokenKind::RawString(self.scan_raw_string(start)),
            None => {
                self.report(
                    DiagnosticCode::UnexpectedEndOfFile,
                    "unexpected end of file after '#'",
                    start,
                );
                TokenKind::Unknown('#')
            }
            Some(other) => {
                self.report(
                    DiagnosticCode::UnknownCharacter,
                    format!("unexpected {other:?} after '#'"),
                    start,
                );
                TokenKind::Unknown('#')
            }
        }
    }

    /// Scans `#"..."` with no escape processing. The `#` is already consumed.
    fn scan_raw_string(&mut self, start: SourcePosition) -> String {
        self.bump();
        let mut value = String::new();
        loop {
            match self.peek() {
                None => {
                    self.report(
                        DiagnosticCode::UnterminatedRawString,
                        "unterminated raw string",
                        start,
                    );
                    break;
                }
                Some(c) if is_line_terminator(c) => {
                    self.report(
                        DiagnosticCode::UnterminatedRawString,
                        "unterminated raw string",
                        start,
                    );
                    break;
                }
                Some('"') => {
                    self.bump();
                    break;
                }
                Some(c) => {
                    self.bump();
                    value.push(c);
                }
            }
        }
        value
    }

    /// Scans an optionally signed decimal integer. Invalid literals decode
    /// to `0` with a diagnostic.
    fn scan_integer(&mut self, start: SourcePosition) -> TokenKind {
        if matches!(self.peek(), Some('+' | '-')) {
            self.bump();
        }
        self.bump_while(|c| c.is_ascii_digit());

        let literal = &self.text[start.offset..self.offset];
        match literal.parse::<i64>() {
            Ok(value) => TokenKind::Integer(value),
            Err(_) => {
                let message = format!("invalid integer literal '{literal}'");
                self.report(DiagnosticCode::InvalidIntegerLiteral, message, start);
                TokenKind::Integer(0)
            }
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    /// Yields tokens up to and including the single `Eof`, then `None`.
    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        if token.is_eof() {
            self.finished = true;
        }
        Some(token)
    }
}

/// Tokenizes a whole source file.
pub fn tokenize(source: &SourceFile) -> (Vec<Token>, Vec<Diagnostic>) {
    let mut lexer = Lexer::new(source);
    let tokens = lexer.tokenize();
    (tokens, lexer.into_diagnostics())
}
