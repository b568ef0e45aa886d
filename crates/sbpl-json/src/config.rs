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

//! Source printing configuration.

/// Indentation unit used for nested filters.
///
/// # Examples
///
/// ```
/// use sbpl_json::IndentStyle;
///
/// assert_eq!(IndentStyle::Spaces(4).unit(), "    ");
/// assert_eq!(IndentStyle::Tabs.unit(), "\t");
/// assert_eq!(IndentStyle::default(), IndentStyle::Spaces(2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum IndentStyle {
    /// `n` spaces per level.
    Spaces(usize),
    /// One horizontal tab per level.
    Tabs,
}

impl Default for IndentStyle {
    fn default() -> Self {
        IndentStyle::Spaces(DEFAULT_INDENT_WIDTH)
    }
}

impl IndentStyle {
    /// The text of one indentation level.
    pub fn unit(&self) -> String {
        match self {
            IndentStyle::Spaces(n) => " ".repeat(*n),
            IndentStyle::Tabs => "\t".to_string(),
        }
    }
}

/// Default number of spaces per indentation level.
pub const DEFAULT_INDENT_WIDTH: usize = 2;

/// Configuration for printed profile source.
///
/// # Examples
///
/// ```
/// use sbpl_json::{IndentStyle, WriterConfig};
///
/// let config = WriterConfig::default();
/// assert_eq!(config.indent, IndentStyle::Spaces(2));
///
/// let config = WriterConfig::new().with_indent(IndentStyle::Tabs);
/// assert_eq!(config.indent, IndentStyle::Tabs);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[non_exhaustive]
pub struct WriterConfig {
    /// Indentation unit for filters printed on their own lines.
    ///
    /// Default: two spaces
    pub indent: IndentStyle,
}

impl WriterConfig {
    /// Create a new configuration with all default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new builder for constructing a `WriterConfig`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sbpl_json::{IndentStyle, WriterConfig};
    ///
    /// let config = WriterConfig::builder().spaces(4).build();
    /// assert_eq!(config.indent, IndentStyle::Spaces(4));
    /// ```
    pub fn builder() -> WriterConfigBuilder {
        WriterConfigBuilder::new()
    }

    /// Set the indentation unit.
    pub fn with_indent(mut self, indent: IndentStyle) -> Self {
        self.indent = indent;
        self
    }
}

/// Builder for constructing a `WriterConfig` with a chainable API.
#[derive(Debug, Clone, Default)]
pub struct WriterConfigBuilder {
    indent: IndentStyle,
}

impl WriterConfigBuilder {
    /// Create a new builder with default configuration values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation unit.
    pub fn indent(mut self, indent: IndentStyle) -> Self {
        self.indent = indent;
        self
    }

    /// Indent with `width` spaces per level.
    pub fn spaces(self, width: usize) -> Self {
        self.indent(IndentStyle::Spaces(width))
    }

    /// Indent with one tab per level.
    pub fn tabs(self) -> Self {
        self.indent(IndentStyle::Tabs)
    }

    /// Build the final `WriterConfig`.
    pub fn build(self) -> WriterConfig {
        WriterConfig {
            indent: self.indent,
        }
    }
}
