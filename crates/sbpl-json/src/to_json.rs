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

//! Profile to JSON conversion

use sbpl_core::ast::{DefineDecl, Expr, ExprKind, Filter, Profile, Rule};
use serde_json::Value as JsonValue;

use crate::error::{ConversionError, ConversionResult};
use crate::model::{DefinitionJson, ExprNode, FilterJson, ProfileJson, RuleJson, EXPRESSION, REQUIRE_NOT};

/// Configuration for JSON output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToJsonConfig {
    /// Pretty-print with two-space indentation (default: true)
    pub pretty: bool,
}

impl Default for ToJsonConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

impl ToJsonConfig {
    /// Single-line output.
    pub fn compact() -> Self {
        Self { pretty: false }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

/// Convert a parsed profile to its wire model
pub fn to_structured(profile: &Profile) -> ProfileJson {
    ProfileJson {
        version: profile.version.as_ref().map(|v| v.version),
        debug_mode: profile.debug.as_ref().map(|d| d.action),
        imports: profile.imports.iter().map(|i| i.path.clone()).collect(),
        definitions: profile.definitions.iter().map(define_to_json).collect(),
        rules: profile.rules.iter().map(rule_to_json).collect(),
    }
}

/// Convert a profile to a JSON string
pub fn to_json(profile: &Profile, config: &ToJsonConfig) -> ConversionResult<String> {
    let structured = to_structured(profile);
    let result = if config.pretty {
        serde_json::to_string_pretty(&structured)
    } else {
        serde_json::to_string(&structured)
    };
    result.map_err(|e| ConversionError::Serialize(e.to_string()))
}

/// Convert a profile to serde_json::Value
pub fn to_json_value(profile: &Profile) -> ConversionResult<JsonValue> {
    serde_json::to_value(to_structured(profile)).map_err(|e| ConversionError::Serialize(e.to_string()))
}

fn define_to_json(define: &DefineDecl) -> DefinitionJson {
    DefinitionJson {
        name: define.name.clone(),
        value: expr_to_json(&define.value),
    }
}

fn rule_to_json(rule: &Rule) -> RuleJson {
    RuleJson {
        action: rule.action,
        operations: rule.operation_names().map(str::to_string).collect(),
        filters: rule.filters.iter().map(filter_to_json).collect(),
    }
}

fn filter_to_json(filter: &Filter) -> FilterJson {
    match filter {
        Filter::Simple {
            filter_type, value, ..
        } => FilterJson::simple(filter_type.clone(), Some(expr_to_json(value))),
        Filter::Compound { kind, filters, .. } => {
            FilterJson::with_children(kind.as_str(), filters.iter().map(filter_to_json).collect())
        }
        Filter::Not { filter, .. } => FilterJson::with_children(REQUIRE_NOT, vec![filter_to_json(filter)]),
        Filter::Expression(expr) => FilterJson::simple(EXPRESSION, Some(expr_to_json(expr))),
    }
}

fn expr_to_json(expr: &Expr) -> ExprNode {
    match &expr.kind {
        ExprKind::Integer(n) => ExprNode::Integer(*n),
        // Raw strings lose their rawness on the wire
        ExprKind::String(s) | ExprKind::RawString(s) => ExprNode::String(s.clone()),
        ExprKind::Boolean(b) => ExprNode::Boolean(*b),
        ExprKind::Symbol(name) => ExprNode::Symbol(name.clone()),
        ExprKind::List(items) => ExprNode::List(items.iter().map(expr_to_json).collect()),
        ExprKind::Quoted(inner) => ExprNode::quoted(expr_to_json(inner)),
    }
}
