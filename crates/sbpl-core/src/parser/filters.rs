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

//! Filter grammar.
//!
//! ```text
//! filter   := "(" "require-all" filter* ")"
//!           | "(" "require-any" filter* ")"
//!           | "(" "require-not" filter ")"
//!           | "(" symbol expr expr* ")"      ; extra values are dropped
//!           | "(" non-symbol expr* ")"       ; kept as an expression
//! ```

use tracing::trace;

use super::{PResult, Parser};
use crate::ast::{CompoundKind, Expr, ExprKind, Filter};
use crate::diagnostic::DiagnosticCode;
use crate::lex::TokenKind;
use crate::span::{SourcePosition, SourceRange};

impl Parser<'_> {
    /// Parses one filter. The cursor is on its `(`.
    pub(super) fn parse_filter(&mut self) -> PResult<Filter> {
        self.nested(Self::parse_filter_form)
    }

    fn parse_filter_form(&mut self) -> PResult<Filter> {
        let open = self.bump();

        let head = match &self.peek().kind {
            TokenKind::Symbol(name) => name.clone(),
            TokenKind::RightParen => {
                let range = open.merge(self.bump());
                self.warning(DiagnosticCode::EmptyList, "empty filter list", range);
                return Ok(Filter::Expression(Expr::new(ExprKind::List(Vec::new()), range)));
            }
            _ => {
                let list = self.parse_list_tail(open.start)?;
                return Ok(Filter::Expression(list));
            }
        };

        if let Some(kind) = CompoundKind::from_name(&head) {
            return self.parse_compound(open.start, kind);
        }
        if head == "require-not" {
            return self.parse_not(open.start);
        }
        self.parse_simple(open.start, head)
    }

    /// `(require-all filter...)` / `(require-any filter...)`. Each child is
    /// recovered independently.
    fn parse_compound(&mut self, open: SourcePosition, kind: CompoundKind) -> PResult<Filter> {
        self.bump();

        let mut filters = Vec::new();
        let end = loop {
            match &self.peek().kind {
                TokenKind::LeftParen => {
                    let index = self.pos;
                    match self.parse_filter() {
                        Ok(filter) => filters.push(filter),
                        Err(_) => self.recover_filter(index),
                    }
                }
                TokenKind::RightParen => break self.bump().end,
                TokenKind::Eof => return Err(self.missing_close(kind.as_str())),
                other => {
                    let message = format!(
                        "unexpected {} in {kind}, expected a filter",
                        other.describe()
                    );
                    let range = self.bump();
                    self.error(DiagnosticCode::UnexpectedToken, message, range);
                }
            }
        };

        Ok(Filter::Compound {
            kind,
            filters,
            range: SourceRange::new(open, end),
        })
    }

    /// `(require-not filter)`
    fn parse_not(&mut self, open: SourcePosition) -> PResult<Filter> {
        self.bump();

        let inner = match self.peek().kind {
            TokenKind::LeftParen => self.parse_filter()?,
            TokenKind::RightParen => {
                return Err(self.fail(
                    DiagnosticCode::MissingArgument,
                    "require-not requires a filter",
                ));
            }
            TokenKind::Eof => return Err(self.missing_close("require-not")),
            _ => return Err(self.expected(DiagnosticCode::ExpectedToken, "a filter in require-not")),
        };

        let extra_start = self.peek().range;
        let mut extra_end = None;
        while !self.at(&TokenKind::RightParen) && !self.at_eof() {
            extra_end = Some(if self.at(&TokenKind::LeftParen) {
                self.skip_balanced().unwrap_or_else(|| self.peek().range.start)
            } else {
                self.bump().end
            });
        }
        if let Some(end) = extra_end {
            self.error(
                DiagnosticCode::TooManyArguments,
                "require-not takes exactly one filter",
                SourceRange::new(extra_start.start, end),
            );
        }

        let end = self.expect_close("require-not")?;
        Ok(Filter::Not {
            filter: Box::new(inner),
            range: SourceRange::new(open, end),
        })
    }

    /// `(filter-type value extra...)`. Only the first value is kept.
    fn parse_simple(&mut self, open: SourcePosition, filter_type: String) -> PResult<Filter> {
        let type_range = self.bump();

        match self.peek().kind {
            TokenKind::RightParen => {
                let message = format!("filter '{filter_type}' requires a value");
                return Err(self.fail(DiagnosticCode::MissingArgument, message));
            }
            TokenKind::Eof => return Err(self.missing_close("filter")),
            _ => {}
        }
        let value = self.parse_expr()?;

        while !self.at(&TokenKind::RightParen) && !self.at_eof() {
            let extra = self.parse_expr()?;
            trace!(
                "Discarding extra argument at {} in filter '{}'",
                extra.range.start,
                filter_type
            );
        }
        let end = self.expect_close("filter")?;

        Ok(Filter::Simple {
            filter_type,
            type_range,
            value,
            range: SourceRange::new(open, end),
        })
    }
}
