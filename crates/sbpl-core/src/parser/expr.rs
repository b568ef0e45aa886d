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

//! Expression grammar: atoms and parenthesized lists.

use super::{PResult, Parser};
use crate::ast::{Expr, ExprKind};
use crate::diagnostic::DiagnosticCode;
use crate::lex::TokenKind;
use crate::span::{SourcePosition, SourceRange};

impl Parser<'_> {
    /// Parses one expression at the cursor.
    pub(super) fn parse_expr(&mut self) -> PResult<Expr> {
        let kind = match &self.peek().kind {
            TokenKind::Integer(n) => ExprKind::Integer(*n),
            TokenKind::String(s) => ExprKind::String(s.clone()),
            TokenKind::RawString(s) => ExprKind::RawString(s.clone()),
            TokenKind::Boolean(b) => ExprKind::Boolean(*b),
            TokenKind::Symbol(name) => ExprKind::Symbol(name.clone()),
            TokenKind::LeftParen => {
                return self.nested(|parser| {
                    let open = parser.bump();
                    parser.parse_list_tail(open.start)
                });
            }
            TokenKind::Eof => return Err(self.missing_close("list")),
            TokenKind::RightParen | TokenKind::Unknown(_) | TokenKind::Missing(_) => {
                return Err(self.expected(DiagnosticCode::ExpectedExpression, "an expression"));
            }
        };
        let range = self.bump();
        Ok(Expr::new(kind, range))
    }

    /// Parses list items up to and including the closing `)`. The opening
    /// `(` at `open` has already been consumed.
    pub(super) fn parse_list_tail(&mut self, open: SourcePosition) -> PResult<Expr> {
        let mut items = Vec::new();
        loop {
            match self.peek().kind {
                TokenKind::RightParen => break,
                TokenKind::Eof => return Err(self.missing_close("list")),
                _ => items.push(self.parse_expr()?),
            }
        }
        let end = self.bump().end;
        Ok(Expr::new(ExprKind::List(items), SourceRange::new(open, end)))
    }
}
