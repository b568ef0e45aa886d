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

//! Shared test fixtures and utilities for the SBPL toolkit.
//!
//! This crate provides a corpus of profile sources, malformed samples with
//! the diagnostic each one must produce, and builders for syntax trees that
//! source text cannot express directly.
//!
//! # Quick Start
//!
//! ```rust
//! use sbpl_test::fixtures;
//!
//! for (name, source) in fixtures::all() {
//!     let profile = sbpl_test::parse_clean(source);
//!     assert!(!profile.is_empty(), "{name}");
//! }
//!
//! use sbpl_test::fixtures::builders::{expr, ProfileBuilder, RuleBuilder};
//!
//! let profile = ProfileBuilder::new()
//!     .version(1)
//!     .rule(RuleBuilder::allow().operation("file-read*").simple("literal", expr::string("/etc")))
//!     .build();
//! assert_eq!(sbpl_test::count_filters(&profile), 1);
//! ```

use sbpl_core::ast::Profile;
use sbpl_core::{parse, Diagnostic, DiagnosticCode};

/// Type alias for a list of named profile sources.
pub type SourceList = Vec<(&'static str, &'static str)>;

/// Canonical profile sources and builders.
pub mod fixtures;

/// Counting utilities for syntax trees.
pub mod counts;

pub use counts::{count_filters, count_operations, max_filter_depth};

/// Parses `source` and panics with the rendered diagnostics if any error
/// was reported.
pub fn parse_clean(source: &str) -> Profile {
    let output = parse(source);
    if output.has_errors() {
        let rendered: Vec<String> = output.diagnostics.iter().map(Diagnostic::to_string).collect();
        panic!("unexpected diagnostics:\n{}", rendered.join("\n"));
    }
    output.profile
}

/// The codes of a diagnostic list, in order.
pub fn codes(diagnostics: &[Diagnostic]) -> Vec<DiagnosticCode> {
    diagnostics.iter().map(|d| d.code).collect()
}
