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

//! Parser invariants over arbitrary input.

use proptest::prelude::*;
use sbpl_core::{parse, parse_with_options, DiagnosticCode, ParseOptions};

use super::any_source;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Property: parsing always returns a profile whose range spans the input.
    #[test]
    fn prop_parser_totality(text in any_source()) {
        let output = parse(&text);
        prop_assert_eq!(output.profile.range.end.offset, text.len());
    }

    /// Property: every top-level node lies inside the profile range.
    #[test]
    fn prop_node_ranges_nest(text in any_source()) {
        let profile = parse(&text).profile;
        for rule in &profile.rules {
            prop_assert!(profile.range.contains_range(rule.range));
            for filter in &rule.filters {
                prop_assert!(rule.range.contains_range(filter.range()));
            }
        }
        for definition in &profile.definitions {
            prop_assert!(definition.range.contains_range(definition.name_range));
            prop_assert!(definition.range.contains_range(definition.value.range));
        }
    }

    /// Property: garbage before a valid form never hides it.
    #[test]
    fn prop_synchronization_bound(garbage in "[a-z0-9@ )]{0,40}", version in 0i64..1000) {
        let text = format!("{garbage}\n(version {version})");
        let output = parse(&text);
        prop_assert_eq!(output.profile.version.as_ref().map(|v| v.version), Some(version));
    }

    /// Property: tight nesting limits are reported, never overflowed.
    #[test]
    fn prop_depth_limit(depth in 1usize..64, limit in 1usize..16) {
        let text = format!(
            "(allow file-read* {}(literal \"/x\"){})",
            "(require-any ".repeat(depth),
            ")".repeat(depth)
        );
        let options = ParseOptions::builder().max_depth(limit).build();
        let output = parse_with_options(&text, options);

        let too_deep = output.diagnostics.iter().any(|d| d.code == DiagnosticCode::NestingTooDeep);
        prop_assert_eq!(too_deep, depth + 1 > limit);
        prop_assert_eq!(output.profile.rules.len(), 1);
    }
}
