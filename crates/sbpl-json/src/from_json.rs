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

//! JSON to profile wire model conversion

use serde_json::Value as JsonValue;

use crate::error::{ConversionError, ConversionResult};
use crate::model::ProfileJson;

/// Maximum nesting of arrays and objects accepted by [`from_json_value`].
///
/// Text input is already bounded by serde_json's own recursion limit.
pub const MAX_JSON_DEPTH: usize = 512;

/// Parse wire JSON text into the profile model.
///
/// # Errors
///
/// Returns [`ConversionError::InvalidJson`] if the text is not JSON, the
/// root is not an object, or any field has the wrong shape.
///
/// # Examples
///
/// ```
/// use sbpl_json::from_json;
///
/// let profile = from_json(r#"{"rules": [{"action": "deny", "operations": ["default"]}]}"#).unwrap();
/// assert_eq!(profile.rules[0].operations, vec!["default"]);
///
/// assert!(from_json("[1, 2]").is_err());
/// ```
pub fn from_json(json: &str) -> ConversionResult<ProfileJson> {
    let value: JsonValue = serde_json::from_str(json)?;
    from_json_value(value)
}

/// Convert a parsed serde_json::Value into the profile model.
pub fn from_json_value(value: JsonValue) -> ConversionResult<ProfileJson> {
    if !value.is_object() {
        return Err(ConversionError::InvalidJson(format!(
            "root must be a JSON object, found {}",
            json_type_name(&value)
        )));
    }
    let depth = value_depth(&value);
    if depth > MAX_JSON_DEPTH {
        return Err(ConversionError::InvalidJson(format!(
            "nesting depth {depth} exceeds the maximum of {MAX_JSON_DEPTH}"
        )));
    }
    Ok(serde_json::from_value(value)?)
}

fn json_type_name(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

fn value_depth(value: &JsonValue) -> usize {
    let mut max = 0;
    let mut stack = vec![(value, 1usize)];
    while let Some((value, depth)) = stack.pop() {
        max = max.max(depth);
        match value {
            JsonValue::Array(items) => stack.extend(items.iter().map(|v| (v, depth + 1))),
            JsonValue::Object(map) => stack.extend(map.values().map(|v| (v, depth + 1))),
            _ => {}
        }
    }
    max
}
