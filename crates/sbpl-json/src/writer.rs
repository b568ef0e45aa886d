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

//! Profile source printer.
//!
//! Output layout is fixed: declarations in the order version, debug,
//! imports, definitions, then a blank line, then one rule per form.
//! Interleaving and comments from the original source are not kept.
//!
//! ```text
//! (version 1)
//! (import "system.sb")
//!
//! (deny default)
//! (allow file-read* (subpath "/usr"))
//! (allow file-write*
//!   (require-any
//!     (subpath "/tmp")
//!     (literal "/dev/null")))
//! ```

use crate::config::WriterConfig;
use crate::model::{DefinitionJson, ExprNode, FilterJson, ProfileJson, RuleJson};

/// Initial capacity of the output buffer.
const INITIAL_OUTPUT_BUFFER_CAPACITY: usize = 1024;

/// Indentation level of filters printed below their rule header.
const RULE_FILTER_LEVEL: usize = 1;

/// Writer that prints the wire model back to profile source.
#[derive(Debug)]
pub struct SourceWriter {
    config: WriterConfig,
    indent_unit: String,
    output: String,
}

impl SourceWriter {
    pub fn new(config: WriterConfig) -> Self {
        let indent_unit = config.indent.unit();
        Self {
            config,
            indent_unit,
            output: String::with_capacity(INITIAL_OUTPUT_BUFFER_CAPACITY),
        }
    }

    pub fn config(&self) -> &WriterConfig {
        &self.config
    }

    /// Print a whole profile. An empty profile prints as the empty string.
    pub fn write_profile(&mut self, profile: &ProfileJson) -> String {
        self.output.clear();

        if let Some(version) = profile.version {
            self.write_line(&format!("(version {version})"));
        }
        if let Some(action) = profile.debug_mode {
            self.write_line(&format!("(debug {action})"));
        }
        for path in &profile.imports {
            self.write_line(&format!("(import {})", format_string(path)));
        }
        for definition in &profile.definitions {
            self.write_definition(definition);
        }

        if profile.has_declarations() && !profile.rules.is_empty() {
            self.output.push('\n');
        }

        for rule in &profile.rules {
            self.write_rule(rule);
        }

        std::mem::take(&mut self.output)
    }

    fn write_line(&mut self, line: &str) {
        self.output.push_str(line);
        self.output.push('\n');
    }

    fn write_definition(&mut self, definition: &DefinitionJson) {
        let line = format!("(define {} {})", definition.name, format_expr(&definition.value));
        self.write_line(&line);
    }

    fn write_rule(&mut self, rule: &RuleJson) {
        let mut header = format!("({}", rule.action);
        for operation in &rule.operations {
            header.push(' ');
            header.push_str(operation);
        }

        if let [only] = rule.filters.as_slice() {
            if !only.is_compound() {
                let filter = self.format_filter(only, RULE_FILTER_LEVEL);
                if !filter.contains('\n') {
                    self.write_line(&format!("{header} {filter})"));
                    return;
                }
            }
        }

        self.output.push_str(&header);
        for filter in &rule.filters {
            let indent = self.indent(RULE_FILTER_LEVEL);
            let text = self.format_filter(filter, RULE_FILTER_LEVEL);
            self.output.push('\n');
            self.output.push_str(&indent);
            self.output.push_str(&text);
        }
        self.write_line(")");
    }

    /// Formats a filter whose first line sits at indentation `level`.
    fn format_filter(&self, filter: &FilterJson, level: usize) -> String {
        if !filter.is_compound() || filter.children().is_empty() {
            return format_inline_filter(filter);
        }
        let mut out = format!("({}", filter.filter_type);
        for child in filter.children() {
            out.push('\n');
            out.push_str(&self.indent(level + 1));
            out.push_str(&self.format_filter(child, level + 1));
        }
        out.push(')');
        out
    }

    fn indent(&self, level: usize) -> String {
        self.indent_unit.repeat(level)
    }
}

/// Formats a filter on a single line. Negations always print this way,
/// compound children included.
fn format_inline_filter(filter: &FilterJson) -> String {
    if filter.is_expression() {
        return match &filter.value {
            Some(value) => format_expr(value),
            None => "()".to_string(),
        };
    }

    let mut out = format!("({}", filter.filter_type);
    if filter.is_compound() || filter.is_not() {
        for child in filter.children() {
            out.push(' ');
            out.push_str(&format_inline_filter(child));
        }
    } else if let Some(value) = &filter.value {
        out.push(' ');
        out.push_str(&format_expr(value));
    }
    out.push(')');
    out
}

/// Formats an expression as source text.
///
/// # Examples
///
/// ```
/// use sbpl_json::{format_expr, ExprNode};
///
/// let node = ExprNode::List(vec![
///     ExprNode::Symbol("subpath".into()),
///     ExprNode::String("a \"b\"".into()),
///     ExprNode::Boolean(false),
///     ExprNode::quoted(ExprNode::Symbol("x".into())),
/// ]);
/// assert_eq!(format_expr(&node), r#"(subpath "a \"b\"" #f 'x)"#);
/// ```
pub fn format_expr(node: &ExprNode) -> String {
    match node {
        ExprNode::Integer(n) => n.to_string(),
        ExprNode::String(s) => format_string(s),
        ExprNode::Boolean(true) => "#t".to_string(),
        ExprNode::Boolean(false) => "#f".to_string(),
        ExprNode::Symbol(name) => name.clone(),
        ExprNode::List(items) => {
            if let Some(inner) = node.as_quoted() {
                return format!("'{}", format_expr(inner));
            }
            let parts: Vec<String> = items.iter().map(format_expr).collect();
            format!("({})", parts.join(" "))
        }
    }
}

fn format_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Print the wire model as profile source.
pub fn to_source(profile: &ProfileJson, config: &WriterConfig) -> String {
    SourceWriter::new(config.clone()).write_profile(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IndentStyle;
    use crate::model::{REQUIRE_NOT, EXPRESSION};
    use sbpl_core::ast::Action;

    fn string(s: &str) -> Option<ExprNode> {
        Some(ExprNode::String(s.into()))
    }

    fn rule(action: Action, operations: &[&str], filters: Vec<FilterJson>) -> RuleJson {
        RuleJson {
            action,
            operations: operations.iter().map(|s| s.to_string()).collect(),
            filters,
        }
    }

    fn print(profile: &ProfileJson) -> String {
        to_source(profile, &WriterConfig::default())
    }

    #[test]
    fn test_empty_profile_prints_nothing() {
        assert_eq!(print(&ProfileJson::default()), "");
    }

    #[test]
    fn test_declaration_order_and_separator() {
        let profile = ProfileJson {
            version: Some(1),
            debug_mode: Some(Action::Deny),
            imports: vec!["a.sb".into(), "b \"x\".sb".into()],
            definitions: vec![DefinitionJson {
                name: "home".into(),
                value: ExprNode::String("/Users".into()),
            }],
            rules: vec![rule(Action::Deny, &["default"], vec![])],
        };
        assert_eq!(
            print(&profile),
            "(version 1)\n(debug deny)\n(import \"a.sb\")\n(import \"b \\\"x\\\".sb\")\n(define home \"/Users\")\n\n(deny default)\n"
        );
    }

    #[test]
    fn test_rules_only_has_no_blank_line() {
        let profile = ProfileJson {
            rules: vec![
                rule(Action::Deny, &["default"], vec![]),
                rule(Action::Allow, &[], vec![]),
            ],
            ..ProfileJson::default()
        };
        assert_eq!(print(&profile), "(deny default)\n(allow)\n");
    }

    #[test]
    fn test_single_simple_filter_is_inline() {
        let profile = ProfileJson {
            rules: vec![rule(
                Action::Allow,
                &["file-read*", "file-write*"],
                vec![FilterJson::simple("subpath", string("/tmp"))],
            )],
            ..ProfileJson::default()
        };
        assert_eq!(print(&profile), "(allow file-read* file-write* (subpath \"/tmp\"))\n");
    }

    #[test]
    fn test_multiple_filters_break_lines() {
        let profile = ProfileJson {
            rules: vec![rule(
                Action::Allow,
                &["file-ioctl"],
                vec![
                    FilterJson::simple("literal", string("/dev/a")),
                    FilterJson::simple("literal", string("/dev/b")),
                ],
            )],
            ..ProfileJson::default()
        };
        assert_eq!(
            print(&profile),
            "(allow file-ioctl\n  (literal \"/dev/a\")\n  (literal \"/dev/b\"))\n"
        );
    }

    #[test]
    fn test_nested_compound_indentation() {
        let filter = FilterJson::with_children(
            "require-any",
            vec![
                FilterJson::simple("subpath", string("/usr")),
                FilterJson::with_children(
                    "require-all",
                    vec![FilterJson::simple("vnode-type", Some(ExprNode::Symbol("REGULAR-FILE".into())))],
                ),
            ],
        );
        let profile = ProfileJson {
            rules: vec![rule(Action::Allow, &["file-read*"], vec![filter])],
            ..ProfileJson::default()
        };
        assert_eq!(
            print(&profile),
            "(allow file-read*\n  (require-any\n    (subpath \"/usr\")\n    (require-all\n      (vnode-type REGULAR-FILE))))\n"
        );
    }

    #[test]
    fn test_tab_indentation() {
        let filter = FilterJson::with_children("require-all", vec![FilterJson::simple("literal", string("/x"))]);
        let profile = ProfileJson {
            rules: vec![rule(Action::Deny, &["signal"], vec![filter])],
            ..ProfileJson::default()
        };
        let config = WriterConfig::new().with_indent(IndentStyle::Tabs);
        assert_eq!(
            to_source(&profile, &config),
            "(deny signal\n\t(require-all\n\t\t(literal \"/x\")))\n"
        );
    }

    #[test]
    fn test_empty_compound() {
        let profile = ProfileJson {
            rules: vec![rule(
                Action::Deny,
                &["signal"],
                vec![FilterJson::with_children("require-all", vec![])],
            )],
            ..ProfileJson::default()
        };
        assert_eq!(print(&profile), "(deny signal\n  (require-all))\n");
    }

    #[test]
    fn test_require_not_is_always_inline() {
        let inner = FilterJson::with_children(
            "require-any",
            vec![
                FilterJson::simple("literal", string("/a")),
                FilterJson::simple("vnode-type", Some(ExprNode::Symbol("SYMLINK".into()))),
            ],
        );
        let profile = ProfileJson {
            rules: vec![rule(
                Action::Allow,
                &["file-write*"],
                vec![FilterJson::with_children(REQUIRE_NOT, vec![inner])],
            )],
            ..ProfileJson::default()
        };
        assert_eq!(
            print(&profile),
            "(allow file-write* (require-not (require-any (literal \"/a\") (vnode-type SYMLINK))))\n"
        );
    }

    #[test]
    fn test_expression_filter_prints_value() {
        let value = ExprNode::List(vec![ExprNode::Integer(42), ExprNode::Boolean(true)]);
        let profile = ProfileJson {
            rules: vec![rule(
                Action::Allow,
                &["file-read*"],
                vec![FilterJson::simple(EXPRESSION, Some(value))],
            )],
            ..ProfileJson::default()
        };
        assert_eq!(print(&profile), "(allow file-read* (42 #t))\n");
    }

    #[test]
    fn test_filter_without_value() {
        let profile = ProfileJson {
            rules: vec![rule(Action::Allow, &["x"], vec![FilterJson::simple("always", None)])],
            ..ProfileJson::default()
        };
        assert_eq!(print(&profile), "(allow x (always))\n");
    }

    #[test]
    fn test_string_escapes() {
        assert_eq!(format_string("a\\b\"c\nd\re\tf"), r#""a\\b\"c\nd\re\tf""#);
        assert_eq!(format_string(""), "\"\"");
        assert_eq!(format_string("\u{263A}"), "\"\u{263A}\"");
    }

    #[test]
    fn test_quote_shorthand() {
        let quoted = ExprNode::quoted(ExprNode::List(vec![ExprNode::Integer(1)]));
        assert_eq!(format_expr(&quoted), "'(1)");
        let three = ExprNode::List(vec![
            ExprNode::Symbol("quote".into()),
            ExprNode::Integer(1),
            ExprNode::Integer(2),
        ]);
        assert_eq!(format_expr(&three), "(quote 1 2)");
        assert_eq!(format_expr(&ExprNode::List(vec![])), "()");
    }

    #[test]
    fn test_writer_is_reusable() {
        let mut writer = SourceWriter::new(WriterConfig::default());
        let profile = ProfileJson {
            version: Some(2),
            ..ProfileJson::default()
        };
        assert_eq!(writer.write_profile(&profile), "(version 2)\n");
        assert_eq!(writer.write_profile(&profile), "(version 2)\n");
        assert_eq!(writer.config(), &WriterConfig::default());
    }
}
