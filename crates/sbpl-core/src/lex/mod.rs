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

//! Lexical analysis for sandbox profiles.
//!
//! # Module Structure
//!
//! - [`chars`] - Character classes for symbols and whitespace
//! - [`token`] - Token kinds and tokens with attached trivia
//! - [`trivia`] - Whitespace and comment pieces
//! - [`lexer`] - The streaming, error-tolerant lexer
//!
//! # Examples
//!
//! ```
//! use sbpl_core::SourceFile;
//! use sbpl_core::lex::{tokenize, TokenKind};
//!
//! let file = SourceFile::new("(deny default) ; closed by default\n");
//! let (tokens, diagnostics) = tokenize(&file);
//!
//! assert!(diagnostics.is_empty());
//! assert_eq!(tokens.len(), 5);
//! assert_eq!(tokens[3].kind, TokenKind::RightParen);
//! assert_eq!(tokens[3].trailing_trivia.comments().count(), 1);
//! ```
//!
//! # Error Tolerance
//!
//! Lexing never fails. Unknown characters, unterminated strings and
//! comments, bad escapes and out-of-range integers are reported as
//! diagnostics while a best-effort token is still produced.

pub mod chars;
pub mod lexer;
pub mod token;
pub mod trivia;

pub use chars::{is_symbol_continue, is_symbol_start};
pub use lexer::{tokenize, Lexer};
pub use token::{Token, TokenKind};
pub use trivia::{Trivia, TriviaPiece};
