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

//! Top-level forms: `version`, `debug`, `import`, `define`, `allow`, `deny`.

use tracing::debug;

use super::{PResult, Parser};
use crate::ast::{
    Action, DebugDecl, DefineDecl, ImportDecl, OperationRef, Profile, Rule, VersionDecl,
};
use crate::diagnostic::{Diagnostic, DiagnosticCode, Severity};
use crate::lex::TokenKind;
use crate::span::{SourcePosition, SourceRange};

impl Parser<'_> {
    /// Parses one top-level form. The cursor is on its `(`.
    pub(super) fn parse_top_level(&mut self, profile: &mut Profile) -> PResult<()> {
        let open = self.bump();

        let head = match &self.peek().kind {
            TokenKind::Symbol(name) => name.clone(),
            TokenKind::RightParen => {
                let close = self.bump();
                self.warning(
                    DiagnosticCode::EmptyList,
                    "empty list at top level",
                    open.merge(close),
                );
                return Ok(());
            }
            _ => return Err(self.expected(DiagnosticCode::ExpectedToken, "a form name after '('")),
        };

        match head.as_str() {
            "version" => self.parse_version(open.start, profile),
            "debug" => self.parse_debug(open.start, profile),
            "import" => {
                let import = self.parse_import(open.start)?;
                profile.imports.push(import);
                Ok(())
            }
            "define" => {
                let definition = self.parse_define(open.start)?;
                profile.definitions.push(definition);
                Ok(())
            }
            "allow" | "deny" => {
                let rule = self.parse_rule(open.start)?;
                profile.rules.push(rule);
                Ok(())
            }
            other => {
                debug!("Skipping unrecognized top-level form '{}'", other);
                let head_range = self.bump();
                let note = Diagnostic::new(
                    DiagnosticCode::InvalidForm,
                    format!("unrecognized form '{other}' skipped"),
                    head_range,
                )
                .with_severity(Severity::Information);
                self.report(note);
                self.skip_unknown_form(other);
                Ok(())
            }
        }
    }

    /// `(version N)`. A second declaration is reported and ignored.
    fn parse_version(&mut self, open: SourcePosition, profile: &mut Profile) -> PResult<()> {
        self.bump();

        let version = match self.peek().kind {
            TokenKind::Integer(n) => {
                self.bump();
                n
            }
            _ => return Err(self.expected(DiagnosticCode::ExpectedToken, "an integer version")),
        };
        let end = self.expect_close("version declaration")?;
        let decl = VersionDecl {
            version,
            range: SourceRange::new(open, end),
        };

        match &profile.version {
            Some(first) => {
                let diagnostic = Diagnostic::new(
                    DiagnosticCode::DuplicateDefinition,
                    "duplicate version declaration",
                    decl.range,
                )
                .with_related(first.range, "version first declared here");
                self.report(diagnostic);
            }
            None => profile.version = Some(decl),
        }
        Ok(())
    }

    /// `(debug allow|deny)`. Invalid modes fall back to `deny`.
    fn parse_debug(&mut self, open: SourcePosition, profile: &mut Profile) -> PResult<()> {
        self.bump();

        let action = match &self.peek().kind {
            TokenKind::RightParen | TokenKind::Eof => {
                return Err(self.fail(
                    DiagnosticCode::MissingArgument,
                    "debug declaration requires 'allow' or 'deny'",
                ));
            }
            TokenKind::LeftParen => {
                return Err(self.expected(DiagnosticCode::ExpectedToken, "'allow' or 'deny'"));
            }
            TokenKind::Symbol(name) if name == "allow" => {
                self.bump();
                Action::Allow
            }
            TokenKind::Symbol(name) if name == "deny" => {
                self.bump();
                Action::Deny
            }
            other => {
                let message = format!(
                    "invalid debug mode {}, expected 'allow' or 'deny'",
                    other.describe()
                );
                let range = self.bump();
                self.error(DiagnosticCode::InvalidForm, message, range);
                Action::Deny
            }
        };
        let end = self.expect_close("debug declaration")?;
        let decl = DebugDecl {
            action,
            range: SourceRange::new(open, end),
        };

        match &profile.debug {
            Some(first) => {
                let diagnostic = Diagnostic::new(
                    DiagnosticCode::DuplicateDebugMode,
                    "duplicate debug declaration",
                    decl.range,
                )
                .with_related(first.range, "debug mode first declared here");
                self.report(diagnostic);
            }
            None => profile.debug = Some(decl),
        }
        Ok(())
    }

    /// `(import "path")`
    fn parse_import(&mut self, open: SourcePosition) -> PResult<ImportDecl> {
        self.bump();

        let path = match &self.peek().kind {
            TokenKind::String(path) | TokenKind::RawString(path) => path.clone(),
            _ => return Err(self.expected(DiagnosticCode::ExpectedToken, "an import path string")),
        };
        let path_range = self.bump();
        let end = self.expect_close("import")?;

        Ok(ImportDecl {
            path,
            path_range,
            range: SourceRange::new(open, end),
        })
    }

    /// `(define name value)` or `(define (name args...) value)`.
    fn parse_define(&mut self, open: SourcePosition) -> PResult<DefineDecl> {
        self.bump();

        let (name, name_range) = match &self.peek().kind {
            TokenKind::Symbol(name) => {
                let name = name.clone();
                (name, self.bump())
            }
            TokenKind::LeftParen => self.parse_define_head()?,
            TokenKind::RightParen | TokenKind::Eof => {
                return Err(self.fail(DiagnosticCode::MissingArgument, "define requires a name"));
            }
            _ => return Err(self.expected(DiagnosticCode::ExpectedToken, "a definition name")),
        };

        if matches!(self.peek().kind, TokenKind::RightParen | TokenKind::Eof) {
            let message = format!("definition '{name}' requires a value");
            return Err(self.fail(DiagnosticCode::MissingArgument, message));
        }
        let value = self.parse_expr()?;
        let end = self.expect_close("definition")?;

        Ok(DefineDecl {
            name,
            name_range,
            value,
            range: SourceRange::new(open, end),
        })
    }

    /// `(name args...)` head of a function-style definition. Only the name
    /// is kept.
    fn parse_define_head(&mut self) -> PResult<(String, SourceRange)> {
        self.bump();
        let name = match &self.peek().kind {
            TokenKind::Symbol(name) => name.clone(),
            _ => return Err(self.expected(DiagnosticCode::ExpectedToken, "a definition name")),
        };
        let name_range = self.bump();
        if self.skip_to_close().is_none() {
            return Err(self.missing_close("definition head"));
        }
        Ok((name, name_range))
    }

    /// `(allow|deny operation... filter...)`. Operations and filters may
    /// interleave; a broken filter is skipped without dropping the rule.
    fn parse_rule(&mut self, open: SourcePosition) -> PResult<Rule> {
        let action = match self.peek().as_symbol() {
            Some("allow") => Action::Allow,
            _ => Action::Deny,
        };
        self.bump();

        let mut operations = Vec::new();
        let mut filters = Vec::new();
        let end = loop {
            match &self.peek().kind {
                TokenKind::Symbol(name) => {
                    let name = name.clone();
                    let range = self.bump();
                    operations.push(OperationRef { name, range });
                }
                TokenKind::LeftParen => {
                    let index = self.pos;
                    match self.parse_filter() {
                        Ok(filter) => filters.push(filter),
                        Err(_) => self.recover_filter(index),
                    }
                }
                TokenKind::RightParen => break self.bump().end,
                TokenKind::Eof => return Err(self.missing_close("rule")),
                other => {
                    let message = format!(
                        "unexpected {} in rule, expected an operation or filter",
                        other.describe()
                    );
                    return Err(self.fail(DiagnosticCode::UnexpectedToken, message));
                }
            }
        };

        let range = SourceRange::new(open, end);
        if operations.is_empty() && filters.is_empty() {
            self.warning(
                DiagnosticCode::EmptyRule,
                format!("{action} rule has no operations or filters"),
                range,
            );
        }

        Ok(Rule {
            action,
            operations,
            filters,
            range,
        })
    }
}
