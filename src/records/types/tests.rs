//! Unit tests for player record accessors

use super::*;
use serde_json::json;

fn record(value: Value) -> PlayerRecord {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_record_deserializes_any_flat_object() {
    let r = record(json!({
        "rank": 1,
        "namePlayer": "Nikola Jokic",
        "team": "DEN",
        "pos": "C",
        "score": 97.4,
        "SCORING_100": 88
    }));

    assert_eq!(r.name(), Some("Nikola Jokic"));
    assert_eq!(r.id(), Some("Nikola Jokic"));
    assert_eq!(r.team(), Some("DEN"));
    assert_eq!(r.position(), Some("C"));
    assert_eq!(r.rank(), Some(1));
    assert_eq!(r.score(), 97.4);
    assert_eq!(r.stat(StatCategory::Scoring), 88.0);
}

#[test]
fn test_name_aliases() {
    assert_eq!(record(json!({"name": "B"})).name(), Some("B"));
    assert_eq!(record(json!({"player_name": "C"})).name(), Some("C"));
    assert_eq!(
        record(json!({"namePlayer": "A", "player_name": "C"})).name(),
        Some("A")
    );
    assert_eq!(record(json!({"team": "X"})).name(), None);
}

#[test]
fn test_position_alias_from_trends_payload() {
    let r = record(json!({"player_name": "D", "position": "SF"}));
    assert_eq!(r.position(), Some("SF"));
}

#[test]
fn test_missing_optional_fields() {
    let r = record(json!({"namePlayer": "A"}));
    assert_eq!(r.team(), None);
    assert_eq!(r.position(), None);
    assert_eq!(r.headshot(), None);
    assert_eq!(r.rank(), None);
    assert_eq!(r.score(), 0.0);
    assert!(!r.has_score());
    for category in StatCategory::ALL {
        assert_eq!(r.stat(category), 0.0);
    }
}

#[test]
fn test_score_aliases() {
    assert_eq!(record(json!({"score_total": 1.234})).score(), 1.234);
    assert_eq!(record(json!({"TOTAL_100": 75})).score(), 75.0);
    assert!(record(json!({"TOTAL_100": 75})).has_score());
    assert!(!record(json!({"score": null})).has_score());
}

#[test]
fn test_rank_ignores_non_positive() {
    assert_eq!(record(json!({"rank": 0})).rank(), None);
    assert_eq!(record(json!({"rank": "12"})).rank(), Some(12));
}

#[test]
fn test_record_serializes_transparently() {
    let r: PlayerRecord = [
        ("namePlayer".to_string(), json!("A")),
        ("team".to_string(), json!("X")),
    ]
    .into_iter()
    .collect();

    let json = serde_json::to_value(&r).unwrap();
    assert_eq!(json, json!({"namePlayer": "A", "team": "X"}));
    assert_eq!(r.fields().len(), 2);
}
