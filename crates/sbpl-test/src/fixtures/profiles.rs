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

//! Well-formed profile sources.
//!
//! None of these use `(quote x)` forms: the writer prints them as `'x`,
//! which reads back as a plain symbol.

/// The smallest useful profile.
pub fn minimal() -> &'static str {
    "(version 1)\n(deny default)\n"
}

/// Every declaration kind, interleaved with rules.
pub fn declarations() -> &'static str {
    r#"(version 1)
(import "system.sb")
(deny default)
(debug deny)
(define home "/Users/sandbox")
(import #"bsd.sb")
(define max-files 64)
(define verbose #f)
(allow process-fork)
"#
}

/// File rules with simple filters.
pub fn file_access() -> &'static str {
    r#"(version 1)
(deny default)
(allow file-read-data (subpath "/usr"))
(allow file-read* file-write* (literal "/dev/null"))
(allow file-read-metadata (regex #"^/private/var/.*$"))
(deny file-write* (subpath "/System"))
(allow file-ioctl (literal "/dev/dtracehelper") (literal "/dev/tty"))
"#
}

/// Nested compound and negated filters.
pub fn compound_filters() -> &'static str {
    r#"(version 1)
(allow file-read*
  (require-any
    (subpath "/usr/lib")
    (subpath "/System/Library")
    (require-all
      (vnode-type REGULAR-FILE)
      (require-not (literal "/etc/master.passwd")))))
(allow file-write* (require-not (subpath "/")))
(deny signal (require-all))
"#
}

/// Network and IPC rules.
pub fn network() -> &'static str {
    r#"(version 1)
(deny default)
(allow network-outbound (remote tcp "*:443"))
(allow network-bind (local ip "localhost:*"))
(allow mach-lookup (global-name "com.apple.system.logger"))
(allow ipc-posix-shm sysctl-read)
"#
}

/// Comments, blank lines, tabs and CRLF line endings.
pub fn trivia() -> &'static str {
    "; header comment\r\n(version 1) ; trailing\r\n\r\n#| block\r\n  #| nested |#\r\n|#\r\n\t(deny default)\r\n(allow file-read* #| inline |# (subpath \"/tmp\"))\r\n"
}

/// Function-style definitions keep only their name and body.
pub fn function_define() -> &'static str {
    r#"(version 1)
(define (home-subpath rel) (subpath (string-append "/Users/me" rel)))
(define paths ("/a" "/b" ("/c" 3)))
(allow file-read* (home-subpath "/Library"))
"#
}

/// Filters whose head is not a symbol.
pub fn expression_filters() -> &'static str {
    r#"(version 1)
(allow file-read* ("literal" "/weird") (42 #t))
(deny file-write* ((nested list) "x"))
"#
}

/// String escapes and literal edge cases.
pub fn escapes() -> &'static str {
    r#"(version -1)
(define quoted "say \"hi\"")
(define control "tab\there\nnewline\rcr\\slash")
(define hex "\x41\u00e9\u263A")
(define raw #"C:\path\no-escapes")
(define bools (#t #F +5 -0))
"#
}

/// A realistic profile exercising most of the language.
pub fn comprehensive() -> &'static str {
    r#";; Application sandbox
(version 1)
(debug allow)
(import "system.sb")

(define app-root "/Applications/Demo.app")
(define cache-dir "/Library/Caches/demo")

(deny default)
(allow process-exec
  (literal "/usr/bin/true"))
(allow file-read* file-read-metadata
  (require-any
    (subpath "/usr/lib")
    (subpath "/System/Library/Frameworks")
    (regex #"^/Applications/Demo\.app/")))
(allow file-write*
  (require-all
    (subpath "/private/tmp")
    (require-not
      (require-any (literal "/private/tmp/lock") (vnode-type SYMLINK)))))
(allow network-outbound (remote tcp "*:443"))
(allow mach-lookup (global-name "com.apple.windowserver.active"))
(allow sysctl-read iokit-open)
"#
}
