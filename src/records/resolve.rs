//! Alias resolution for loosely-typed record fields.
//!
//! Resolution never fails: a dashboard must render a partially populated
//! record, so anything unresolvable degrades to `0.0` (numbers) or `None`
//! (strings).

use serde_json::Value;

use super::types::PlayerRecord;

/// Resolve a stat by trying `aliases` in order against `record`.
///
/// The first alias present with a non-null value wins and is converted with
/// [`to_number`]. Returns `0.0` when no alias is present.
///
/// # Examples
///
/// ```rust
/// use nba_compare::records::{resolve, PlayerRecord};
/// use serde_json::json;
///
/// let record: PlayerRecord = serde_json::from_value(json!({
///     "namePlayer": "A",
///     "SCORING_100": 80
/// })).unwrap();
///
/// assert_eq!(resolve(&record, &["scoring", "SCORING_100"]), 80.0);
/// assert_eq!(resolve(&record, &["defense"]), 0.0);
/// ```
pub fn resolve(record: &PlayerRecord, aliases: &[&str]) -> f64 {
    aliases
        .iter()
        .find_map(|alias| record.get(alias).filter(|value| !value.is_null()))
        .map(to_number)
        .unwrap_or(0.0)
}

/// Resolve a text field: the first alias holding a non-blank string.
pub fn resolve_str<'a>(record: &'a PlayerRecord, aliases: &[&str]) -> Option<&'a str> {
    aliases.iter().find_map(|alias| {
        record
            .get(alias)
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
    })
}

/// Convert a JSON value to a finite number.
///
/// Numeric strings are parsed after trimming; booleans map to 1/0. Anything
/// else, and any non-finite result, becomes `0.0`.
pub fn to_number(value: &Value) -> f64 {
    let n = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        Value::Bool(true) => 1.0,
        _ => 0.0,
    };

    if n.is_finite() {
        n
    } else {
        0.0
    }
}
