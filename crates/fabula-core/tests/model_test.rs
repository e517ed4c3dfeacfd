//! Serde shape of the externally-facing model types: planner output is
//! consumed as JSON, so the wire format is part of the contract.

use fabula_core::{Comparison, Event, Problem, Signature, Value};

#[test]
fn event_deserializes_from_planner_json() {
    let json = r#"{
        "signature": { "name": "travel", "arguments": ["tom", "market"] },
        "consenting": ["tom"],
        "precondition": [
            [
                { "fluent": "at_tom", "comparison": "eq", "value": "home" },
                { "fluent": "alive_tom", "comparison": "eq", "value": true }
            ]
        ],
        "effects": [
            { "fluent": "at_tom", "value": "market" }
        ],
        "parameters": [
            { "name": "market", "kind": "place" }
        ]
    }"#;

    let event: Event = serde_json::from_str(json).expect("event should deserialize");
    assert_eq!(event.signature, Signature::new("travel", vec!["tom".into(), "market".into()]));
    assert_eq!(event.consenting.len(), 1);

    let clause = &event.precondition.clauses()[0];
    assert_eq!(clause.len(), 2);
    assert_eq!(clause[0].comparison, Comparison::Eq);
    assert_eq!(clause[0].value, Value::Symbol("home".to_string()));
    assert_eq!(clause[1].value, Value::Bool(true));

    assert_eq!(event.effects[0].value, Value::Symbol("market".to_string()));
    assert_eq!(event.parameters[0].kind, "place");
}

#[test]
fn untagged_values_roundtrip_by_shape() {
    let values: Vec<Value> = serde_json::from_str(r#"[true, 3, "market"]"#).unwrap();
    assert_eq!(
        values,
        vec![
            Value::Bool(true),
            Value::Number(3),
            Value::Symbol("market".to_string())
        ]
    );
}

#[test]
fn problem_exposes_typed_entities() {
    let json = r#"{
        "name": "bribery",
        "characters": ["tom", "mercy"],
        "entities": [
            { "name": "market", "kind": "place" },
            { "name": "home", "kind": "place" },
            { "name": "monday", "kind": "time" },
            { "name": "coin", "kind": "item" }
        ]
    }"#;

    let problem: Problem = serde_json::from_str(json).unwrap();
    assert_eq!(problem.places().count(), 2);
    assert_eq!(problem.times().count(), 1);
    assert_eq!(problem.entities_of_kind("item").count(), 1);
}

#[test]
fn signature_displays_with_arguments() {
    let sig = Signature::new("travel", vec!["tom".into(), "market".into()]);
    assert_eq!(sig.to_string(), "travel(tom, market)");
}
