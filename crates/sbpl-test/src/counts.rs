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

//! Counting utilities for syntax trees.

use sbpl_core::ast::{Filter, Profile};

/// Counts every filter in a profile, nested ones included.
pub fn count_filters(profile: &Profile) -> usize {
    profile
        .rules
        .iter()
        .flat_map(|rule| &rule.filters)
        .map(count_in_filter)
        .sum()
}

fn count_in_filter(filter: &Filter) -> usize {
    match filter {
        Filter::Compound { filters, .. } => 1 + filters.iter().map(count_in_filter).sum::<usize>(),
        Filter::Not { filter, .. } => 1 + count_in_filter(filter),
        Filter::Simple { .. } | Filter::Expression(_) => 1,
    }
}

/// Counts operation names across all rules.
pub fn count_operations(profile: &Profile) -> usize {
    profile.rules.iter().map(|rule| rule.operations.len()).sum()
}

/// Deepest filter nesting in a profile; a rule with one simple filter has
/// depth 1.
pub fn max_filter_depth(profile: &Profile) -> usize {
    profile
        .rules
        .iter()
        .flat_map(|rule| &rule.filters)
        .map(filter_depth)
        .max()
        .unwrap_or(0)
}

fn filter_depth(filter: &Filter) -> usize {
    match filter {
        Filter::Compound { filters, .. } => 1 + filters.iter().map(filter_depth).max().unwrap_or(0),
        Filter::Not { filter, .. } => 1 + filter_depth(filter),
        Filter::Simple { .. } | Filter::Expression(_) => 1,
    }
}
