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

//! Deduplicating diagnostic accumulator.

use std::collections::HashSet;

use super::{Diagnostic, Severity};

/// Collects diagnostics in insertion order, dropping exact duplicates.
#[derive(Debug, Default, Clone)]
pub struct DiagnosticCollector {
    seen: HashSet<Diagnostic>,
    items: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a diagnostic. Returns `false` if an identical one was already
    /// collected.
    pub fn push(&mut self, diagnostic: Diagnostic) -> bool {
        if self.seen.contains(&diagnostic) {
            return false;
        }
        self.seen.insert(diagnostic.clone());
        self.items.push(diagnostic);
        true
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    pub fn error_count(&self) -> usize {
        self.items
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.items.iter()
    }

    /// Consumes the collector, yielding diagnostics in insertion order.
    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.items
    }
}

impl Extend<Diagnostic> for DiagnosticCollector {
    fn extend<I: IntoIterator<Item = Diagnostic>>(&mut self, iter: I) {
        for diagnostic in iter {
            self.push(diagnostic);
        }
    }
}

impl<'a> IntoIterator for &'a DiagnosticCollector {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::DiagnosticCode;
    use crate::span::{SourcePosition, SourceRange};

    fn diag(code: DiagnosticCode, offset: usize, message: &str) -> Diagnostic {
        let pos = SourcePosition::new(0, offset, offset);
        Diagnostic::new(code, message, SourceRange::point(pos))
    }

    #[test]
    fn test_duplicates_are_dropped() {
        let mut collector = DiagnosticCollector::new();
        assert!(collector.push(diag(DiagnosticCode::UnknownCharacter, 1, "bad")));
        assert!(!collector.push(diag(DiagnosticCode::UnknownCharacter, 1, "bad")));
        assert_eq!(collector.len(), 1);
    }

    #[test]
    fn test_distinct_fields_are_kept() {
        let mut collector = DiagnosticCollector::new();
        collector.push(diag(DiagnosticCode::UnknownCharacter, 1, "bad"));
        collector.push(diag(DiagnosticCode::UnknownCharacter, 2, "bad"));
        collector.push(diag(DiagnosticCode::UnknownCharacter, 1, "worse"));
        collector.push(diag(DiagnosticCode::InvalidEscape, 1, "bad"));
        assert_eq!(collector.len(), 4);
    }

    #[test]
    fn test_insertion_order_is_preserved() {
        let mut collector = DiagnosticCollector::new();
        collector.extend(vec![
            diag(DiagnosticCode::ExpectedToken, 9, "b"),
            diag(DiagnosticCode::ExpectedToken, 3, "a"),
            diag(DiagnosticCode::ExpectedToken, 9, "b"),
        ]);
        let offsets: Vec<_> = collector.into_vec().iter().map(|d| d.range.start.offset).collect();
        assert_eq!(offsets, vec![9, 3]);
    }

    #[test]
    fn test_error_count_ignores_warnings() {
        let mut collector = DiagnosticCollector::new();
        collector.push(diag(DiagnosticCode::EmptyList, 0, "empty"));
        assert!(!collector.has_errors());
        collector.push(diag(DiagnosticCode::ExpectedCloseParen, 4, "expected ')'"));
        assert!(collector.has_errors());
        assert_eq!(collector.error_count(), 1);
    }
}
