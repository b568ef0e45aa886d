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

//! Source positions and ranges.
//!
//! Positions carry three coordinates at once: a 0-based line, a 0-based
//! column measured in UTF-16 code units (the unit editors speak), and the
//! byte offset into the UTF-8 source. Ordering only looks at the offset.
//!
//! # Examples
//!
//! ```
//! use sbpl_core::{SourcePosition, SourceRange};
//!
//! let start = SourcePosition::new(0, 1, 1);
//! let end = SourcePosition::new(0, 8, 8);
//! let range = SourceRange::new(start, end);
//!
//! assert_eq!(range.len(), 7);
//! assert!(range.contains(SourcePosition::new(0, 4, 4)));
//! assert!(!range.contains(end));
//! ```

use std::cmp::Ordering;
use std::fmt;

/// A position in source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SourcePosition {
    /// Line number (0-based).
    pub line: usize,
    /// Column number (0-based, UTF-16 code units).
    pub column: usize,
    /// Byte offset into the source.
    pub offset: usize,
}

impl SourcePosition {
    /// Creates a new position.
    #[inline]
    pub const fn new(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }

    /// The position of the first byte of any source.
    #[inline]
    pub const fn start() -> Self {
        Self::new(0, 0, 0)
    }
}

impl PartialOrd for SourcePosition {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SourcePosition {
    fn cmp(&self, other: &Self) -> Ordering {
        self.offset.cmp(&other.offset)
    }
}

impl fmt::Display for SourcePosition {
    /// Renders the 1-based `line:column` form used in diagnostics output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// A half-open range `[start, end)` in source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SourceRange {
    /// Start position (inclusive).
    pub start: SourcePosition,
    /// End position (exclusive).
    pub end: SourcePosition,
}

impl SourceRange {
    /// Creates a range from start and end positions.
    #[inline]
    pub const fn new(start: SourcePosition, end: SourcePosition) -> Self {
        Self { start, end }
    }

    /// Creates a zero-width range at a single position.
    #[inline]
    pub const fn point(pos: SourcePosition) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// Length of the range in bytes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.end.offset.saturating_sub(self.start.offset)
    }

    /// Returns `true` for zero-width ranges.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks whether `pos` falls inside the range (end exclusive).
    #[inline]
    pub fn contains(&self, pos: SourcePosition) -> bool {
        self.start.offset <= pos.offset && pos.offset < self.end.offset
    }

    /// Checks whether `other` lies entirely within this range.
    #[inline]
    pub fn contains_range(&self, other: SourceRange) -> bool {
        self.start.offset <= other.start.offset && other.end.offset <= self.end.offset
    }

    /// Checks whether the two ranges share at least one byte.
    #[inline]
    pub fn overlaps(&self, other: SourceRange) -> bool {
        self.start.offset < other.end.offset && other.start.offset < self.end.offset
    }

    /// Smallest range covering both `self` and `other`.
    pub fn merge(self, other: SourceRange) -> SourceRange {
        SourceRange {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl fmt::Display for SourceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
