use recover::{recover, recover_with, RecoverConfig, RecoverError, RecoveryStrategy};
use serde_json::{json, Value};

struct Case {
    name: &'static str,
    input: &'static str,
    expected: Value,
    strategy: RecoveryStrategy,
}

#[test]
fn golden_corpus_regression() {
    let cases = [
        Case {
            name: "clean_object",
            input: r#"{"json":{"title":"Login","components":[]}}"#,
            expected: json!({"json": {"title": "Login", "components": []}}),
            strategy: RecoveryStrategy::Direct,
        },
        Case {
            name: "tagged_fence",
            input: "```json\n{\"title\":\"A\"}\n```",
            expected: json!({"title": "A"}),
            strategy: RecoveryStrategy::Direct,
        },
        Case {
            name: "untagged_fence_with_blank_lines",
            input: "\n\n```\n{\"title\":\"A\"}\n```\n",
            expected: json!({"title": "A"}),
            strategy: RecoveryStrategy::Direct,
        },
        Case {
            name: "trailing_junk",
            input: r#"{"json":{"title":"A"}} trailing-junk"#,
            expected: json!({"json": {"title": "A"}}),
            strategy: RecoveryStrategy::Truncated,
        },
        Case {
            name: "fence_then_prose",
            input: "```json\n{\"title\":\"A\"}\n```\nLet me know if you need changes!",
            expected: json!({"title": "A"}),
            strategy: RecoveryStrategy::Truncated,
        },
        Case {
            name: "cut_off_mid_component",
            input: r#"{"json":{"title":"Shop","components":[{"type":"button","text":"Buy"},{"type":"text","te"#,
            expected: json!({
                "json": {"title": "Shop", "components": [{"type": "button", "text": "Buy"}]}
            }),
            strategy: RecoveryStrategy::ClosedBrackets,
        },
        Case {
            name: "leading_prose",
            input: "Sure! Here is the wireframe:\n{\"title\":\"A\",\"components\":[]}",
            expected: json!({"title": "A", "components": []}),
            strategy: RecoveryStrategy::OutermostObject,
        },
        Case {
            name: "two_objects_in_prose",
            input: "Option one: {\"title\":\"A\"} or option two: {\"title\":\"B\"}",
            expected: json!({"title": "A"}),
            strategy: RecoveryStrategy::FirstObject,
        },
        Case {
            name: "braces_inside_strings",
            input: "note {\"text\":\"use } carefully\"} and {\"x\":1}",
            expected: json!({"text": "use } carefully"}),
            strategy: RecoveryStrategy::FirstObject,
        },
    ];

    for case in cases {
        let found = recover(case.input)
            .unwrap_or_else(|e| panic!("case {} failed: {e}", case.name));
        assert_eq!(found.value, case.expected, "value mismatch for {}", case.name);
        assert_eq!(
            found.strategy, case.strategy,
            "strategy mismatch for {}",
            case.name
        );
    }
}

#[test]
fn failures_are_typed() {
    let failures = [
        ("empty", ""),
        ("whitespace", "   \n\t "),
        ("fence_only", "```json\n\n```"),
    ];
    for (name, input) in failures {
        assert_eq!(recover(input), Err(RecoverError::EmptyInput), "{name}");
    }

    let unrecoverable = [
        ("prose", "I cannot help with that request."),
        ("open_only", "{\"title\": \"A\", \"components\": [{\"type\":"),
        ("garbled", "{ this is not json }"),
    ];
    for (name, input) in unrecoverable {
        match recover(input) {
            Err(RecoverError::Unrecoverable { message }) => {
                assert!(!message.is_empty(), "{name} carries parse message")
            }
            other => panic!("case {name}: expected Unrecoverable, got {other:?}"),
        }
    }
}

#[test]
fn limit_applies_before_parsing() {
    let cfg = RecoverConfig {
        max_input_bytes: Some(16),
        ..Default::default()
    };
    let raw = format!("{{\"title\":\"{}\"}}", "x".repeat(64));
    assert!(matches!(
        recover_with(&raw, &cfg),
        Err(RecoverError::InputTooLarge { limit: 16, .. })
    ));
    assert!(recover_with("{\"a\":1}", &cfg).is_ok());
}
