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

//! Character classes for the lexer.
//!
//! # Examples
//!
//! ```
//! use sbpl_core::lex::{is_symbol_start, is_symbol_continue};
//!
//! assert!(is_symbol_start('f'));
//! assert!(is_symbol_start('*'));
//! assert!(!is_symbol_start('7'));
//! assert!(is_symbol_continue('7'));
//! assert!(!is_symbol_continue('@'));
//! ```

/// Punctuation allowed anywhere in a symbol.
const SYMBOL_PUNCTUATION: &[char] = &[
    '_', '$', '*', '-', '+', '/', '<', '>', '=', '?', '!', '.', ':', '\'', '%',
];

/// Can `c` begin a symbol?
#[inline]
pub fn is_symbol_start(c: char) -> bool {
    c.is_alphabetic() || SYMBOL_PUNCTUATION.contains(&c)
}

/// Can `c` continue a symbol?
#[inline]
pub fn is_symbol_continue(c: char) -> bool {
    c.is_alphanumeric() || SYMBOL_PUNCTUATION.contains(&c)
}

#[inline]
pub(crate) fn is_line_terminator(c: char) -> bool {
    c == '\n' || c == '\r'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_start_set() {
        for c in "abcXYZ_$*-+/<>=?!.:'%".chars() {
            assert!(is_symbol_start(c), "{c:?} should start a symbol");
        }
        for c in "0123456789@#\"();| \t\n".chars() {
            assert!(!is_symbol_start(c), "{c:?} should not start a symbol");
        }
    }

    #[test]
    fn test_symbol_continue_adds_digits() {
        assert!(is_symbol_continue('0'));
        assert!(is_symbol_continue('9'));
        assert!(is_symbol_continue('-'));
        assert!(!is_symbol_continue('@'));
        assert!(!is_symbol_continue('('));
        assert!(!is_symbol_continue('"'));
        assert!(!is_symbol_continue('#'));
    }

    #[test]
    fn test_unicode_letters() {
        assert!(is_symbol_start('é'));
        assert!(is_symbol_continue('ß'));
        assert!(!is_symbol_start('😀'));
    }
}
