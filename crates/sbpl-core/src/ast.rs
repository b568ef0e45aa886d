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

//! Syntax tree for sandbox profiles.
//!
//! Every node carries the [`SourceRange`] it was parsed from. Trees are
//! exclusively owned and never cyclic. Declarations are grouped by kind, so
//! the interleaving of imports, definitions and rules in the source is not
//! kept.

use std::fmt;
use std::str::FromStr;

use crate::span::SourceRange;

/// A parsed profile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Profile {
    pub version: Option<VersionDecl>,
    pub debug: Option<DebugDecl>,
    pub imports: Vec<ImportDecl>,
    pub definitions: Vec<DefineDecl>,
    pub rules: Vec<Rule>,
    pub range: SourceRange,
}

impl Profile {
    /// Returns `true` if the profile declares nothing.
    pub fn is_empty(&self) -> bool {
        self.version.is_none()
            && self.debug.is_none()
            && self.imports.is_empty()
            && self.definitions.is_empty()
            && self.rules.is_empty()
    }

    /// Looks up a definition by name. The first match wins.
    pub fn definition(&self, name: &str) -> Option<&DefineDecl> {
        self.definitions.iter().find(|d| d.name == name)
    }

    pub fn rules_with_action(&self, action: Action) -> impl Iterator<Item = &Rule> {
        self.rules.iter().filter(move |r| r.action == action)
    }
}

/// Rule and debug-mode action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Action {
    Allow,
    Deny,
}

impl Action {
    pub const fn as_str(self) -> &'static str {
        match self {
            Action::Allow => "allow",
            Action::Deny => "deny",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is neither `allow` nor `deny`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid action '{0}', expected 'allow' or 'deny'")]
pub struct ParseActionError(pub String);

impl FromStr for Action {
    type Err = ParseActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "allow" => Ok(Action::Allow),
            "deny" => Ok(Action::Deny),
            other => Err(ParseActionError(other.to_string())),
        }
    }
}

/// `(version N)`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VersionDecl {
    pub version: i64,
    pub range: SourceRange,
}

/// `(debug allow|deny)`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DebugDecl {
    pub action: Action,
    pub range: SourceRange,
}

/// `(import "path")`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImportDecl {
    pub path: String,
    pub path_range: SourceRange,
    pub range: SourceRange,
}

/// `(define name value)` or `(define (name args...) value)`.
///
/// The argument list of the function-style form is not kept.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DefineDecl {
    pub name: String,
    pub name_range: SourceRange,
    pub value: Expr,
    pub range: SourceRange,
}

/// `(allow|deny operation... filter...)`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rule {
    pub action: Action,
    pub operations: Vec<OperationRef>,
    pub filters: Vec<Filter>,
    pub range: SourceRange,
}

impl Rule {
    pub fn operation_names(&self) -> impl Iterator<Item = &str> {
        self.operations.iter().map(|op| op.name.as_str())
    }
}

/// An operation name such as `file-read*`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OperationRef {
    pub name: String,
    pub range: SourceRange,
}

/// Combinator of a compound filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum CompoundKind {
    RequireAll,
    RequireAny,
}

impl CompoundKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            CompoundKind::RequireAll => "require-all",
            CompoundKind::RequireAny => "require-any",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "require-all" => Some(CompoundKind::RequireAll),
            "require-any" => Some(CompoundKind::RequireAny),
            _ => None,
        }
    }
}

impl fmt::Display for CompoundKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A predicate attached to a rule.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Filter {
    /// `(filter-type value)`, e.g. `(subpath "/usr")`.
    Simple {
        filter_type: String,
        type_range: SourceRange,
        value: Expr,
        range: SourceRange,
    },
    /// `(require-all ...)` / `(require-any ...)`
    Compound {
        kind: CompoundKind,
        filters: Vec<Filter>,
        range: SourceRange,
    },
    /// `(require-not filter)`
    Not {
        filter: Box<Filter>,
        range: SourceRange,
    },
    /// Any other list shape, kept as an expression.
    Expression(Expr),
}

impl Filter {
    pub fn range(&self) -> SourceRange {
        match self {
            Filter::Simple { range, .. }
            | Filter::Compound { range, .. }
            | Filter::Not { range, .. } => *range,
            Filter::Expression(expr) => expr.range,
        }
    }

    /// The filter's type as it appears on the wire.
    pub fn type_name(&self) -> &str {
        match self {
            Filter::Simple { filter_type, .. } => filter_type,
            Filter::Compound { kind, .. } => kind.as_str(),
            Filter::Not { .. } => "require-not",
            Filter::Expression(_) => "expression",
        }
    }

    pub fn is_compound(&self) -> bool {
        matches!(self, Filter::Compound { .. })
    }
}

/// An expression node.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Expr {
    pub kind: ExprKind,
    pub range: SourceRange,
}

/// Expression variants.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExprKind {
    Integer(i64),
    String(String),
    RawString(String),
    Boolean(bool),
    Symbol(String),
    List(Vec<Expr>),
    /// `(quote x)`. Never produced from source text; only built
    /// programmatically.
    Quoted(Box<Expr>),
}

impl Expr {
    pub fn new(kind: ExprKind, range: SourceRange) -> Self {
        Self { kind, range }
    }

    pub fn as_symbol(&self) -> Option<&str> {
        match &self.kind {
            ExprKind::Symbol(name) => Some(name),
            _ => None,
        }
    }

    /// String payload of a cooked or raw string.
    pub fn as_str(&self) -> Option<&str> {
        match &self.kind {
            ExprKind::String(s) | ExprKind::RawString(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self.kind {
            ExprKind::Integer(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Expr]> {
        match &self.kind {
            ExprKind::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn is_atom(&self) -> bool {
        !matches!(self.kind, ExprKind::List(_) | ExprKind::Quoted(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::SourcePosition;

    fn r(start: usize, end: usize) -> SourceRange {
        SourceRange::new(
            SourcePosition::new(0, start, start),
            SourcePosition::new(0, end, end),
        )
    }

    #[test]
    fn test_action_round_trip() {
        for action in [Action::Allow, Action::Deny] {
            assert_eq!(action.as_str().parse::<Action>(), Ok(action));
        }
        assert_eq!(
            "permit".parse::<Action>(),
            Err(ParseActionError("permit".into()))
        );
    }

    #[test]
    fn test_compound_kind_names() {
        assert_eq!(CompoundKind::from_name("require-any"), Some(CompoundKind::RequireAny));
        assert_eq!(CompoundKind::from_name("require-not"), None);
        assert_eq!(CompoundKind::RequireAll.to_string(), "require-all");
    }

    #[test]
    fn test_filter_type_name_and_range() {
        let value = Expr::new(ExprKind::String("/usr".into()), r(9, 15));
        let simple = Filter::Simple {
            filter_type: "subpath".into(),
            type_range: r(1, 8),
            value,
            range: r(0, 16),
        };
        assert_eq!(simple.type_name(), "subpath");
        assert_eq!(simple.range(), r(0, 16));

        let not = Filter::Not {
            filter: Box::new(simple),
            range: r(0, 30),
        };
        assert_eq!(not.type_name(), "require-not");
        assert!(!not.is_compound());

        let expr = Filter::Expression(Expr::new(ExprKind::List(vec![]), r(2, 4)));
        assert_eq!(expr.type_name(), "expression");
        assert_eq!(expr.range(), r(2, 4));
    }

    #[test]
    fn test_expr_accessors() {
        let raw = Expr::new(ExprKind::RawString("^/tmp".into()), r(0, 8));
        assert_eq!(raw.as_str(), Some("^/tmp"));
        assert!(raw.is_atom());

        let list = Expr::new(ExprKind::List(vec![raw.clone()]), r(0, 10));
        assert_eq!(list.as_list().map(<[Expr]>::len), Some(1));
        assert!(!list.is_atom());
        assert_eq!(list.as_symbol(), None);
    }

    #[test]
    fn test_profile_queries() {
        let mut profile = Profile::default();
        assert!(profile.is_empty());

        profile.rules.push(Rule {
            action: Action::Deny,
            operations: vec![OperationRef {
                name: "default".into(),
                range: r(6, 13),
            }],
            filters: vec![],
            range: r(0, 14),
        });
        assert!(!profile.is_empty());
        assert_eq!(profile.rules_with_action(Action::Deny).count(), 1);
        assert_eq!(profile.rules_with_action(Action::Allow).count(), 0);
        assert_eq!(
            profile.rules[0].operation_names().collect::<Vec<_>>(),
            vec!["default"]
        );
    }
}
