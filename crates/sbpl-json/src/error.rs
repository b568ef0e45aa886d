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

//! Error types for profile conversion.

use thiserror::Error;

/// Errors raised while converting between profiles and JSON.
///
/// Problems in profile source text are never errors here: they are
/// diagnostics reported by the parser. Only the JSON side can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// The wire text is not valid JSON or does not match the profile model.
    #[error("invalid JSON: {0}")]
    InvalidJson(String),

    /// JSON serialization failed.
    #[error("JSON serialization error: {0}")]
    Serialize(String),
}

impl From<serde_json::Error> for ConversionError {
    fn from(err: serde_json::Error) -> Self {
        ConversionError::InvalidJson(err.to_string())
    }
}

/// Result alias for conversion operations.
pub type ConversionResult<T> = Result<T, ConversionError>;
