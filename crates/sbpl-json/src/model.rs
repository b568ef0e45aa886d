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

//! The JSON wire model.
//!
//! These types mirror a parsed profile without source positions. Keys are
//! camelCase and empty or absent parts are omitted:
//!
//! ```json
//! {
//!   "version": 1,
//!   "rules": [
//!     {
//!       "action": "allow",
//!       "operations": ["file-read*"],
//!       "filters": [{ "type": "subpath", "value": "\"/usr\"" }]
//!     }
//!   ]
//! }
//! ```
//!
//! Expression strings travel inside JSON strings wrapped in an extra pair of
//! double quotes, which is how they are told apart from symbols.

use std::fmt;

use sbpl_core::ast::{Action, CompoundKind};
use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Filter type name used for negation.
pub const REQUIRE_NOT: &str = "require-not";

/// Filter type name used for bare expression filters.
pub const EXPRESSION: &str = "expression";

/// A whole profile on the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileJson {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debug_mode: Option<Action>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub imports: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub definitions: Vec<DefinitionJson>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rules: Vec<RuleJson>,
}

impl ProfileJson {
    /// Returns `true` if nothing would be printed for this profile.
    pub fn is_empty(&self) -> bool {
        self.version.is_none()
            && self.debug_mode.is_none()
            && self.imports.is_empty()
            && self.definitions.is_empty()
            && self.rules.is_empty()
    }

    /// Returns `true` if the profile has any declaration besides rules.
    pub fn has_declarations(&self) -> bool {
        self.version.is_some()
            || self.debug_mode.is_some()
            || !self.imports.is_empty()
            || !self.definitions.is_empty()
    }
}

/// `(define name value)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefinitionJson {
    pub name: String,
    pub value: ExprNode,
}

/// `(allow|deny operation... filter...)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleJson {
    pub action: Action,
    pub operations: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filters: Vec<FilterJson>,
}

/// A filter on the wire.
///
/// Compound filters (`require-all`, `require-any`, `require-not`) carry
/// `filters`; every other type carries an optional `value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterJson {
    #[serde(rename = "type")]
    pub filter_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<ExprNode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<FilterJson>>,
}

impl FilterJson {
    /// A `(type value)` filter.
    pub fn simple(filter_type: impl Into<String>, value: Option<ExprNode>) -> Self {
        Self {
            filter_type: filter_type.into(),
            value,
            filters: None,
        }
    }

    /// A filter carrying child filters.
    pub fn with_children(filter_type: impl Into<String>, filters: Vec<FilterJson>) -> Self {
        Self {
            filter_type: filter_type.into(),
            value: None,
            filters: Some(filters),
        }
    }

    /// Returns `true` for `require-all` and `require-any`.
    pub fn is_compound(&self) -> bool {
        CompoundKind::from_name(&self.filter_type).is_some()
    }

    pub fn is_not(&self) -> bool {
        self.filter_type == REQUIRE_NOT
    }

    pub fn is_expression(&self) -> bool {
        self.filter_type == EXPRESSION
    }

    /// Child filters, empty for leaf filters.
    pub fn children(&self) -> &[FilterJson] {
        self.filters.as_deref().unwrap_or(&[])
    }
}

/// An expression value on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ExprNode {
    Integer(i64),
    String(String),
    Boolean(bool),
    Symbol(String),
    List(Vec<ExprNode>),
}

impl ExprNode {
    /// Decodes the text of a JSON string: a leading `"` marks a string
    /// literal, anything else is a symbol.
    ///
    /// Exactly one character is stripped from each end of a marked string.
    pub fn from_wire_text(text: &str) -> Self {
        if let Some(rest) = text.strip_prefix('"') {
            let mut chars = rest.chars();
            chars.next_back();
            ExprNode::String(chars.as_str().to_string())
        } else {
            ExprNode::Symbol(text.to_string())
        }
    }

    /// `(quote value)`
    pub fn quoted(value: ExprNode) -> Self {
        ExprNode::List(vec![ExprNode::Symbol("quote".to_string()), value])
    }

    /// The quoted value, if this is a two-element `(quote x)` list.
    pub fn as_quoted(&self) -> Option<&ExprNode> {
        match self {
            ExprNode::List(items) if items.len() == 2 => match &items[0] {
                ExprNode::Symbol(head) if head == "quote" => Some(&items[1]),
                _ => None,
            },
            _ => None,
        }
    }
}

impl Serialize for ExprNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ExprNode::Integer(n) => serializer.serialize_i64(*n),
            ExprNode::String(s) => serializer.serialize_str(&format!("\"{s}\"")),
            ExprNode::Boolean(b) => serializer.serialize_bool(*b),
            ExprNode::Symbol(s) => serializer.serialize_str(s),
            ExprNode::List(items) => items.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for ExprNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ExprNodeVisitor)
    }
}

struct ExprNodeVisitor;

impl<'de> Visitor<'de> for ExprNodeVisitor {
    type Value = ExprNode;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer, boolean, string or array expression")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<ExprNode, E> {
        Ok(ExprNode::Integer(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<ExprNode, E> {
        i64::try_from(v)
            .map(ExprNode::Integer)
            .map_err(|_| E::custom(format!("integer {v} is out of range")))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<ExprNode, E> {
        Ok(ExprNode::Boolean(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<ExprNode, E> {
        Ok(ExprNode::from_wire_text(v))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<ExprNode, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(ExprNode::List(items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_expr_node_encoding() {
        let node = ExprNode::List(vec![
            ExprNode::Integer(-3),
            ExprNode::String("/tmp".into()),
            ExprNode::Boolean(true),
            ExprNode::Symbol("home".into()),
        ]);
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(value, json!([-3, "\"/tmp\"", true, "home"]));
    }

    #[test]
    fn test_expr_node_decoding() {
        let node: ExprNode = serde_json::from_value(json!(["\"a b\"", "sym", 7, false, []])).unwrap();
        assert_eq!(
            node,
            ExprNode::List(vec![
                ExprNode::String("a b".into()),
                ExprNode::Symbol("sym".into()),
                ExprNode::Integer(7),
                ExprNode::Boolean(false),
                ExprNode::List(vec![]),
            ])
        );
    }

    #[test]
    fn test_wire_text_strips_one_char_each_side() {
        assert_eq!(ExprNode::from_wire_text("\"x\""), ExprNode::String("x".into()));
        assert_eq!(ExprNode::from_wire_text("\"\""), ExprNode::String(String::new()));
        assert_eq!(ExprNode::from_wire_text("\""), ExprNode::String(String::new()));
        assert_eq!(ExprNode::from_wire_text("\"ab"), ExprNode::String("a".into()));
        assert_eq!(ExprNode::from_wire_text("\"\u{e9}\u{e9}"), ExprNode::String("\u{e9}".into()));
        assert_eq!(ExprNode::from_wire_text("x\""), ExprNode::Symbol("x\"".into()));
        assert_eq!(ExprNode::from_wire_text(""), ExprNode::Symbol(String::new()));
    }

    #[test]
    fn test_rejected_values() {
        assert!(serde_json::from_value::<ExprNode>(json!(1.5)).is_err());
        assert!(serde_json::from_value::<ExprNode>(json!(null)).is_err());
        assert!(serde_json::from_value::<ExprNode>(json!({"a": 1})).is_err());
        assert!(serde_json::from_value::<ExprNode>(json!(u64::MAX)).is_err());
    }

    #[test]
    fn test_quoted_helpers() {
        let node = ExprNode::quoted(ExprNode::Symbol("x".into()));
        assert_eq!(node.as_quoted(), Some(&ExprNode::Symbol("x".into())));
        let plain = ExprNode::List(vec![ExprNode::Symbol("quote".into())]);
        assert_eq!(plain.as_quoted(), None);
    }

    #[test]
    fn test_empty_parts_are_omitted() {
        let profile = ProfileJson {
            version: Some(1),
            ..ProfileJson::default()
        };
        assert_eq!(serde_json::to_value(&profile).unwrap(), json!({"version": 1}));
        assert_eq!(serde_json::to_value(ProfileJson::default()).unwrap(), json!({}));
    }

    #[test]
    fn test_camel_case_keys() {
        let profile: ProfileJson = serde_json::from_value(json!({
            "debugMode": "deny",
            "rules": [{"action": "allow", "operations": ["network*"]}]
        }))
        .unwrap();
        assert_eq!(profile.debug_mode, Some(Action::Deny));
        assert_eq!(profile.rules[0].operations, vec!["network*"]);
        assert!(profile.rules[0].filters.is_empty());
        assert!(profile.has_declarations());
    }

    #[test]
    fn test_filter_kinds() {
        let any = FilterJson::with_children("require-any", vec![]);
        assert!(any.is_compound());
        assert!(!FilterJson::with_children(REQUIRE_NOT, vec![]).is_compound());
        assert!(FilterJson::simple(EXPRESSION, None).is_expression());
        assert!(FilterJson::simple("literal", None).children().is_empty());
        assert_eq!(
            serde_json::to_value(&any).unwrap(),
            json!({"type": "require-any", "filters": []})
        );
    }
}
