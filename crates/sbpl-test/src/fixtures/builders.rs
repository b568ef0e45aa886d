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

//! Builders for syntax trees.
//!
//! Built nodes carry default (empty) ranges. They are meant for converter
//! tests, including shapes the parser never produces such as
//! [`ExprKind::Quoted`].

use sbpl_core::ast::{
    Action, CompoundKind, DebugDecl, DefineDecl, Expr, ExprKind, Filter, ImportDecl,
    OperationRef, Profile, Rule, VersionDecl,
};
use sbpl_core::SourceRange;

/// Expression constructors.
pub mod expr {
    use super::*;

    fn node(kind: ExprKind) -> Expr {
        Expr::new(kind, SourceRange::default())
    }

    pub fn int(value: i64) -> Expr {
        node(ExprKind::Integer(value))
    }

    pub fn string(value: impl Into<String>) -> Expr {
        node(ExprKind::String(value.into()))
    }

    pub fn raw(value: impl Into<String>) -> Expr {
        node(ExprKind::RawString(value.into()))
    }

    pub fn boolean(value: bool) -> Expr {
        node(ExprKind::Boolean(value))
    }

    pub fn sym(name: impl Into<String>) -> Expr {
        node(ExprKind::Symbol(name.into()))
    }

    pub fn list(items: Vec<Expr>) -> Expr {
        node(ExprKind::List(items))
    }

    pub fn quoted(inner: Expr) -> Expr {
        node(ExprKind::Quoted(Box::new(inner)))
    }
}

/// Filter constructors.
pub mod filter {
    use super::*;

    pub fn simple(filter_type: impl Into<String>, value: Expr) -> Filter {
        Filter::Simple {
            filter_type: filter_type.into(),
            type_range: SourceRange::default(),
            value,
            range: SourceRange::default(),
        }
    }

    pub fn all(filters: Vec<Filter>) -> Filter {
        compound(CompoundKind::RequireAll, filters)
    }

    pub fn any(filters: Vec<Filter>) -> Filter {
        compound(CompoundKind::RequireAny, filters)
    }

    pub fn compound(kind: CompoundKind, filters: Vec<Filter>) -> Filter {
        Filter::Compound {
            kind,
            filters,
            range: SourceRange::default(),
        }
    }

    pub fn not(inner: Filter) -> Filter {
        Filter::Not {
            filter: Box::new(inner),
            range: SourceRange::default(),
        }
    }

    pub fn expression(value: Expr) -> Filter {
        Filter::Expression(value)
    }
}

/// Builder for creating [`Profile`] fixtures.
///
/// # Examples
///
/// ```
/// use sbpl_test::fixtures::builders::{expr, ProfileBuilder, RuleBuilder};
///
/// let profile = ProfileBuilder::new()
///     .version(1)
///     .define("home", expr::string("/Users/me"))
///     .rule(RuleBuilder::deny().operation("default"))
///     .build();
///
/// assert_eq!(profile.definitions[0].name, "home");
/// assert_eq!(profile.rules.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProfileBuilder {
    profile: Profile,
}

impl ProfileBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn version(mut self, version: i64) -> Self {
        self.profile.version = Some(VersionDecl {
            version,
            range: SourceRange::default(),
        });
        self
    }

    pub fn debug(mut self, action: Action) -> Self {
        self.profile.debug = Some(DebugDecl {
            action,
            range: SourceRange::default(),
        });
        self
    }

    pub fn import(mut self, path: impl Into<String>) -> Self {
        self.profile.imports.push(ImportDecl {
            path: path.into(),
            path_range: SourceRange::default(),
            range: SourceRange::default(),
        });
        self
    }

    pub fn define(mut self, name: impl Into<String>, value: Expr) -> Self {
        self.profile.definitions.push(DefineDecl {
            name: name.into(),
            name_range: SourceRange::default(),
            value,
            range: SourceRange::default(),
        });
        self
    }

    pub fn rule(mut self, rule: RuleBuilder) -> Self {
        self.profile.rules.push(rule.build());
        self
    }

    pub fn build(self) -> Profile {
        self.profile
    }
}

/// Builder for [`Rule`] fixtures.
#[derive(Debug, Clone)]
pub struct RuleBuilder {
    rule: Rule,
}

impl RuleBuilder {
    pub fn new(action: Action) -> Self {
        Self {
            rule: Rule {
                action,
                operations: Vec::new(),
                filters: Vec::new(),
                range: SourceRange::default(),
            },
        }
    }

    pub fn allow() -> Self {
        Self::new(Action::Allow)
    }

    pub fn deny() -> Self {
        Self::new(Action::Deny)
    }

    pub fn operation(mut self, name: impl Into<String>) -> Self {
        self.rule.operations.push(OperationRef {
            name: name.into(),
            range: SourceRange::default(),
        });
        self
    }

    /// Adds a `(filter_type value)` filter.
    pub fn simple(self, filter_type: impl Into<String>, value: Expr) -> Self {
        self.filter(filter::simple(filter_type, value))
    }

    pub fn filter(mut self, filter: Filter) -> Self {
        self.rule.filters.push(filter);
        self
    }

    pub fn build(self) -> Rule {
        self.rule
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_filters() {
        let rule = RuleBuilder::allow()
            .operation("file-read*")
            .filter(filter::any(vec![
                filter::simple("subpath", expr::string("/usr")),
                filter::not(filter::simple("literal", expr::raw("/etc"))),
            ]))
            .build();
        assert_eq!(rule.filters.len(), 1);
        assert!(rule.filters[0].is_compound());
    }

    #[test]
    fn test_quoted_expression() {
        let quoted = expr::quoted(expr::sym("x"));
        assert!(matches!(quoted.kind, ExprKind::Quoted(_)));
    }
}
