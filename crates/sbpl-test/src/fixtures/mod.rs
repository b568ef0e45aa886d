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

//! Canonical profile fixtures.
//!
//! - **profiles**: Well-formed profile sources, by feature
//! - **errors**: Malformed sources and the diagnostic each must produce
//! - **builders**: Builders for syntax trees, including shapes source text
//!   cannot produce such as quoted expressions

pub mod builders;
pub mod errors;
mod profiles;

pub use profiles::*;

use crate::SourceList;

/// Returns every well-formed profile source by name.
///
/// Useful for running the same test across the whole corpus.
pub fn all() -> SourceList {
    vec![
        ("minimal", minimal()),
        ("declarations", declarations()),
        ("file_access", file_access()),
        ("compound_filters", compound_filters()),
        ("network", network()),
        ("trivia", trivia()),
        ("function_define", function_define()),
        ("expression_filters", expression_filters()),
        ("escapes", escapes()),
        ("comprehensive", comprehensive()),
    ]
}
