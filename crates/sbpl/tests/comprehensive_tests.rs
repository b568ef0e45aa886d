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

//! End-to-end tests through the one-call API.

use sbpl::json::{ExprNode, ProfileJson};
use sbpl::{format, from_json, parse, parse_strict, to_json, validate, SbplError, Severity};
use sbpl_test::fixtures::{self, errors};

#[test]
fn test_every_fixture_survives_the_full_pipeline() {
    for (name, source) in fixtures::all() {
        validate(source).unwrap_or_else(|e| panic!("{name}: {e}"));
        let json = to_json(source).unwrap();
        let printed = from_json(&json).unwrap();
        assert_eq!(printed, format(source).unwrap(), "fixture {name}");
        assert_eq!(format(&printed).unwrap(), printed, "fixture {name}");
    }
}

#[test]
fn test_malformed_samples_fail_with_their_code() {
    for (name, source, code) in errors::malformed_samples() {
        let output = parse(source);
        assert!(
            output.diagnostics.iter().any(|d| d.code == code),
            "{name}: expected {code:?}, got {:?}",
            output.diagnostics
        );
        if code.default_severity() == Severity::Error {
            let err = parse_strict(source).unwrap_err();
            assert!(matches!(err, SbplError::Invalid(_)), "{name}");
            assert!(!err.diagnostics().is_empty());
        }
    }
}

#[test]
fn test_hostile_inputs_never_panic() {
    for (name, source) in errors::hostile_samples() {
        let output = parse(&source);
        for diagnostic in &output.diagnostics {
            assert!(
                diagnostic.range.end.offset <= source.len(),
                "{name}: diagnostic past end of input"
            );
        }
        let _ = format(&source);
    }
}

#[test]
fn test_json_shape() {
    let json = to_json(fixtures::network()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["version"], 1);
    assert_eq!(value["rules"][1]["filters"][0]["type"], "remote");
    assert_eq!(value["rules"][1]["filters"][0]["value"], "tcp");
    assert_eq!(value["rules"][4]["operations"][1], "sysctl-read");
}

#[test]
fn test_wire_model_from_hand_written_json() {
    let profile: ProfileJson = sbpl::json::from_json(
        r#"{"definitions": [{"name": "roots", "value": ["\"/usr\"", "\"/bin\"", 2]}]}"#,
    )
    .unwrap();
    assert_eq!(
        profile.definitions[0].value,
        ExprNode::List(vec![
            ExprNode::String("/usr".into()),
            ExprNode::String("/bin".into()),
            ExprNode::Integer(2),
        ])
    );
    assert_eq!(
        from_json(r#"{"definitions": [{"name": "roots", "value": ["\"/usr\"", "\"/bin\"", 2]}]}"#).unwrap(),
        "(define roots (\"/usr\" \"/bin\" 2))\n"
    );
}

#[test]
fn test_strict_parse_reports_every_diagnostic() {
    let err = parse_strict("(allow)\n(deny file-read* 1 2)").unwrap_err();
    let severities: Vec<Severity> = err.diagnostics().iter().map(|d| d.severity).collect();
    assert!(severities.contains(&Severity::Warning));
    assert!(severities.contains(&Severity::Error));
}
