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

//! Error recovery: synchronization and balanced skipping.

use tracing::trace;

use super::Parser;
use crate::diagnostic::DiagnosticCode;
use crate::lex::TokenKind;
use crate::span::SourcePosition;

impl Parser<'_> {
    /// Skips past a failed top-level form: advances one token, then stops
    /// at the next `(` or at `Eof`.
    pub(super) fn synchronize(&mut self) {
        let from = self.pos;
        self.bump();
        while !self.at_eof() && !self.at(&TokenKind::LeftParen) {
            self.bump();
        }
        trace!("Synchronized from token {} to token {}", from, self.pos);
    }

    /// Moves the cursor back to a previously seen token index.
    pub(super) fn rewind(&mut self, index: usize) {
        self.pos = index;
    }

    /// Skips the balanced list starting at the `(` under the cursor.
    ///
    /// Returns the end of the matching `)`, or `None` if the list runs
    /// into `Eof`.
    pub(super) fn skip_balanced(&mut self) -> Option<SourcePosition> {
        debug_assert!(self.at(&TokenKind::LeftParen));
        self.bump();
        self.skip_to_close()
    }

    /// Skips to the `)` closing a list whose `(` has already been
    /// consumed. Returns its end, or `None` at `Eof`.
    pub(super) fn skip_to_close(&mut self) -> Option<SourcePosition> {
        let mut depth = 1usize;
        loop {
            match self.peek().kind {
                TokenKind::Eof => return None,
                TokenKind::LeftParen => depth += 1,
                TokenKind::RightParen => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(self.bump().end);
                    }
                }
                _ => {}
            }
            self.bump();
        }
    }

    /// Skips a form whose head is not recognized. Running into `Eof` is
    /// reported as a missing `)`.
    pub(super) fn skip_unknown_form(&mut self, head: &str) {
        if self.skip_to_close().is_none() {
            let message = format!("expected ')' to close form '{head}', found end of file");
            let range = self.peek().range;
            self.error(DiagnosticCode::ExpectedCloseParen, message, range);
        }
    }

    /// Recovers from a failed nested filter by skipping it as a balanced
    /// form from its opening `(`.
    pub(super) fn recover_filter(&mut self, open_index: usize) {
        self.rewind(open_index);
        if self.skip_balanced().is_none() {
            trace!("Filter recovery reached end of file");
        }
    }
}
