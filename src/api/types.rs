use crate::error::{CompareError, Result};
use crate::records::{resolve, PlayerRecord};
use log::warn;
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

pub const STREAK_ALIASES: &[&str] = &["streak_value"];

/// A null list reads as empty; non-object entries are skipped the same way
/// [`records_from_value`] skips them.
fn de_record_list<'de, D>(deserializer: D) -> std::result::Result<Vec<PlayerRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<Value>> = Deserialize::deserialize(deserializer)?;
    records_from_value(Value::Array(raw.unwrap_or_default())).map_err(de::Error::custom)
}

/// Payload of `/trends`: players on hot and cold streaks.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Trends {
    #[serde(default, deserialize_with = "de_record_list")]
    pub hot: Vec<PlayerRecord>,
    #[serde(default, deserialize_with = "de_record_list")]
    pub cold: Vec<PlayerRecord>,
}

/// Display magnitude of a streak entry (its sign is implied by the list).
pub fn streak_magnitude(record: &PlayerRecord) -> f64 {
    resolve(record, STREAK_ALIASES).abs()
}

/// Window for streak detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StreakRange {
    #[default]
    Last5,
    Last10,
}

impl StreakRange {
    pub fn games(&self) -> u8 {
        match self {
            StreakRange::Last5 => 5,
            StreakRange::Last10 => 10,
        }
    }
}

impl fmt::Display for StreakRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Last {} Games", self.games())
    }
}

impl FromStr for StreakRange {
    type Err = CompareError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "5" => Ok(StreakRange::Last5),
            "10" => Ok(StreakRange::Last10),
            _ => Err(CompareError::InvalidStreakRange {
                range: s.to_string(),
            }),
        }
    }
}

/// Turn a JSON array of flat objects into records.
///
/// Array entries that are not objects are skipped with a warning; a
/// non-array payload is [`CompareError::NoData`].
pub fn records_from_value(value: Value) -> Result<Vec<PlayerRecord>> {
    let Value::Array(items) = value else {
        return Err(CompareError::NoData);
    };

    let total = items.len();
    let records: Vec<PlayerRecord> = items
        .into_iter()
        .filter_map(|item| match item {
            Value::Object(fields) => Some(PlayerRecord::new(fields)),
            _ => None,
        })
        .collect();

    if records.len() < total {
        warn!("skipped {} non-object entries", total - records.len());
    }

    Ok(records)
}
