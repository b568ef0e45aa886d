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

//! Property-based tests for lexing and parsing.
//!
//! # Test Modules
//!
//! - `lexer`: tokenization totality, trivia partition, position monotonicity
//! - `parser`: parser totality and synchronization
//!
//! Generated inputs mix well-formed profile fragments with arbitrary text.

pub mod lexer;
pub mod parser;

use proptest::prelude::*;

/// Fragments that exercise every token kind and trivia piece.
const FRAGMENTS: &[&str] = &[
    "(", ")", "allow", "deny", "version", "file-read*", "require-all", "require-not",
    "42", "-7", "+3", "99999999999999999999", "\"str\"", "\"esc\\n\\x41\\u263A\"",
    "\"bad\\q\"", "\"open", "#\"raw\\\"", "#t", "#F", "#x", "#", "@", "😀", " ", "\t",
    "\n", "\r", "\r\n", "; comment", "#| block |#", "#| outer #| inner |# |#", "#| open",
    "'quoted", "é",
];

/// Strings assembled from profile-like fragments.
pub fn fragment_soup() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(FRAGMENTS), 0..64).prop_map(|parts| parts.concat())
}

/// Fragment soup or completely arbitrary text.
pub fn any_source() -> impl Strategy<Value = String> {
    prop_oneof![fragment_soup(), any::<String>(), "[ -~\\n\\r\\t]{0,200}"]
}
