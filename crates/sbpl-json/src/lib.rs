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

//! SBPL JSON Conversion
//!
//! Converts parsed profiles to a JSON wire model and prints that model back
//! as profile source.
//!
//! # Examples
//!
//! ## Profile to JSON
//!
//! ```rust
//! use sbpl_json::{to_json, ToJsonConfig};
//!
//! let output = sbpl_core::parse("(version 1)\n(allow file-read* (subpath \"/usr\"))");
//! let json = to_json(&output.profile, &ToJsonConfig::compact()).unwrap();
//! assert_eq!(
//!     json,
//!     r#"{"version":1,"rules":[{"action":"allow","operations":["file-read*"],"filters":[{"type":"subpath","value":"\"/usr\""}]}]}"#
//! );
//! ```
//!
//! ## JSON to source
//!
//! ```rust
//! use sbpl_json::{json_to_source, WriterConfig};
//!
//! let json = r#"{"rules": [{"action": "deny", "operations": ["default"]}]}"#;
//! let source = json_to_source(json, &WriterConfig::default()).unwrap();
//! assert_eq!(source, "(deny default)\n");
//! ```
//!
//! ## Reformatting source
//!
//! ```rust
//! use sbpl_json::{format_source, WriterConfig};
//!
//! let (formatted, diagnostics) = format_source("(deny default) (version 1)", &WriterConfig::default());
//! assert!(diagnostics.is_empty());
//! assert_eq!(formatted, "(version 1)\n\n(deny default)\n");
//! ```

mod config;
mod error;
mod from_json;
pub mod model;
mod to_json;
mod writer;

pub use config::{IndentStyle, WriterConfig, WriterConfigBuilder, DEFAULT_INDENT_WIDTH};
pub use error::{ConversionError, ConversionResult};
pub use from_json::{from_json, from_json_value, MAX_JSON_DEPTH};
pub use model::{DefinitionJson, ExprNode, FilterJson, ProfileJson, RuleJson};
pub use to_json::{to_json, to_json_value, to_structured, ToJsonConfig};
pub use writer::{format_expr, to_source, SourceWriter};

use sbpl_core::Diagnostic;
use tracing::debug;

/// Convert wire JSON text straight to profile source
pub fn json_to_source(json: &str, config: &WriterConfig) -> ConversionResult<String> {
    let profile = from_json(json)?;
    Ok(to_source(&profile, config))
}

/// Parse profile source and print it in canonical layout.
///
/// Diagnostics from parsing are returned alongside the output; forms that
/// failed to parse are absent from it.
pub fn format_source(text: &str, config: &WriterConfig) -> (String, Vec<Diagnostic>) {
    let output = sbpl_core::parse(text);
    let formatted = to_source(&to_structured(&output.profile), config);
    debug!(
        input = text.len(),
        output = formatted.len(),
        diagnostics = output.diagnostics.len(),
        "formatted profile"
    );
    (formatted, output.diagnostics)
}
