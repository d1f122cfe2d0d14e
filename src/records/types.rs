use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::category::{StatCategory, OVERALL_ALIASES};
use super::resolve::{resolve, resolve_str};

#[cfg(test)]
mod tests;

pub const NAME_ALIASES: &[&str] = &["namePlayer", "name", "player_name"];
pub const TEAM_ALIASES: &[&str] = &["team"];
pub const POSITION_ALIASES: &[&str] = &["pos", "position"];
pub const HEADSHOT_ALIASES: &[&str] = &["headshot_href"];
pub const RANK_ALIASES: &[&str] = &["rank"];

/// One player's statistics as delivered by the data source.
///
/// Kept as a flat key/value snapshot rather than a fixed struct because the
/// key set differs between ingestion pipelines. Records are never mutated
/// after they are loaded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerRecord(Map<String, Value>);

impl PlayerRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Raw attribute lookup.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Display name, if the record carries one.
    pub fn name(&self) -> Option<&str> {
        resolve_str(self, NAME_ALIASES)
    }

    /// Selection identifier. Identical to the display name.
    pub fn id(&self) -> Option<&str> {
        self.name()
    }

    pub fn team(&self) -> Option<&str> {
        resolve_str(self, TEAM_ALIASES)
    }

    pub fn position(&self) -> Option<&str> {
        resolve_str(self, POSITION_ALIASES)
    }

    pub fn headshot(&self) -> Option<&str> {
        resolve_str(self, HEADSHOT_ALIASES)
    }

    /// Pre-computed rank, when the source supplied a positive one.
    pub fn rank(&self) -> Option<u32> {
        let rank = resolve(self, RANK_ALIASES);
        (rank >= 1.0).then_some(rank as u32)
    }

    /// Pre-computed overall score (0 when absent).
    pub fn score(&self) -> f64 {
        resolve(self, OVERALL_ALIASES)
    }

    /// Whether any overall score alias is present.
    pub fn has_score(&self) -> bool {
        OVERALL_ALIASES
            .iter()
            .any(|alias| self.get(alias).is_some_and(|v| !v.is_null()))
    }

    pub fn stat(&self, category: StatCategory) -> f64 {
        resolve(self, category.aliases())
    }
}

impl From<Map<String, Value>> for PlayerRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

impl FromIterator<(String, Value)> for PlayerRecord {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
