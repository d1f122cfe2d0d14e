//! Comparison output: player cards and radar rows for the current selection.
//!
//! Everything here is derived from a record snapshot plus the selection and
//! is recomputed on every change; nothing is cached between calls.

use crate::core::selection::SelectionManager;
use crate::records::{PlayerRecord, StatCategory};
use log::warn;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;


/// Series colours, one per slot position.
pub const DEFAULT_PALETTE: [&str; 4] = ["#3b82f6", "#ef4444", "#10b981", "#f59e0b"];

/// One labelled stat on a player card.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct StatValue {
    pub category: StatCategory,
    pub label: &'static str,
    pub value: f64,
}

/// Card data for one resolved player.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct PlayerCard {
    pub name: String,
    pub team: Option<String>,
    pub position: Option<String>,
    pub headshot: Option<String>,
    pub score: f64,
    pub stats: Vec<StatValue>,
}

impl PlayerCard {
    pub fn from_record(name: &str, record: &PlayerRecord) -> Self {
        Self {
            name: name.to_string(),
            team: record.team().map(str::to_string),
            position: record.position().map(str::to_string),
            headshot: record.headshot().map(str::to_string),
            score: record.score(),
            stats: StatCategory::ALL
                .into_iter()
                .map(|category| StatValue {
                    category,
                    label: category.label(),
                    value: record.stat(category),
                })
                .collect(),
        }
    }
}

/// Summary for one occupied slot.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlayerSummary {
    /// The slot's id was found in the records.
    Player {
        slot: usize,
        color: Option<String>,
        card: PlayerCard,
    },
    /// The slot's id is not in the current records.
    Empty { slot: usize, requested: String },
}

impl PlayerSummary {
    pub fn slot(&self) -> usize {
        match self {
            PlayerSummary::Player { slot, .. } | PlayerSummary::Empty { slot, .. } => *slot,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, PlayerSummary::Empty { .. })
    }

    pub fn card(&self) -> Option<&PlayerCard> {
        match self {
            PlayerSummary::Player { card, .. } => Some(card),
            PlayerSummary::Empty { .. } => None,
        }
    }

    pub fn color(&self) -> Option<&str> {
        match self {
            PlayerSummary::Player { color, .. } => color.as_deref(),
            PlayerSummary::Empty { .. } => None,
        }
    }
}

/// One entity's value in a row.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesValue {
    pub name: String,
    pub value: f64,
}

/// One radar axis: the category and each resolved player's value in slot
/// order.
///
/// Serializes flat, the shape chart libraries expect:
/// `{"label": "Scoring", "Player A": 80.0, "Player B": 64.5}`.
/// A series named `label` collides with the category key and is left out of
/// the flat form; it is still in `values`.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRow {
    pub category: StatCategory,
    pub label: &'static str,
    pub values: Vec<SeriesValue>,
}

impl ComparisonRow {
    pub fn value_for(&self, name: &str) -> Option<f64> {
        self.values.iter().find(|v| v.name == name).map(|v| v.value)
    }
}

const ROW_LABEL_KEY: &str = "label";

impl Serialize for ComparisonRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry(ROW_LABEL_KEY, self.label)?;
        for v in &self.values {
            if v.name == ROW_LABEL_KEY {
                warn!("series named {:?} omitted from flat {} row", v.name, self.label);
                continue;
            }
            map.serialize_entry(&v.name, &v.value)?;
        }
        map.end()
    }
}

/// Legend entry for one radar polygon.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Series {
    pub slot: usize,
    pub name: String,
    pub color: Option<String>,
}

/// Full comparison output.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Comparison {
    pub summaries: Vec<PlayerSummary>,
    pub rows: Vec<ComparisonRow>,
}

impl Comparison {
    /// Resolved players in slot order with their colours.
    pub fn series(&self) -> Vec<Series> {
        self.summaries
            .iter()
            .filter_map(|s| match s {
                PlayerSummary::Player { slot, color, card } => Some(Series {
                    slot: *slot,
                    name: card.name.clone(),
                    color: color.clone(),
                }),
                PlayerSummary::Empty { .. } => None,
            })
            .collect()
    }
}

/// Colour for a slot position, cycling through `palette`.
pub fn slot_color<S: AsRef<str>>(palette: &[S], slot: usize) -> Option<String> {
    if palette.is_empty() {
        return None;
    }
    Some(palette[slot % palette.len()].as_ref().to_string())
}

/// Build cards and radar rows for the occupied slots of `selection`.
///
/// A selected id missing from `records` yields an [`PlayerSummary::Empty`]
/// placeholder and no row column. There are always exactly six rows.
///
/// # Examples
///
/// ```rust
/// use nba_compare::core::compare::{build, DEFAULT_PALETTE};
/// use nba_compare::{PlayerRecord, SelectionManager};
/// use serde_json::json;
///
/// let records: Vec<PlayerRecord> = serde_json::from_value(json!([
///     {"namePlayer": "A", "scoring": 80},
///     {"namePlayer": "B", "SCORING_100": 60},
/// ])).unwrap();
///
/// let mut selection = SelectionManager::new(2).unwrap();
/// selection.select_at(0, "A").unwrap();
/// selection.select_at(1, "B").unwrap();
///
/// let comparison = build(&records, &selection, &DEFAULT_PALETTE);
/// assert_eq!(comparison.rows.len(), 6);
/// assert_eq!(comparison.rows[1].value_for("B"), Some(60.0));
/// ```
pub fn build<S: AsRef<str>>(
    records: &[PlayerRecord],
    selection: &SelectionManager,
    palette: &[S],
) -> Comparison {
    let mut by_id: HashMap<&str, &PlayerRecord> = HashMap::with_capacity(records.len());
    for record in records {
        if let Some(id) = record.id() {
            by_id.entry(id).or_insert(record);
        }
    }

    let mut summaries = Vec::new();
    let mut resolved: Vec<(&str, &PlayerRecord)> = Vec::new();

    for (slot, id) in selection.occupied_slots() {
        match by_id.get(id) {
            Some(record) => {
                resolved.push((id, record));
                summaries.push(PlayerSummary::Player {
                    slot,
                    color: slot_color(palette, slot),
                    card: PlayerCard::from_record(id, record),
                });
            }
            None => {
                warn!("selected player {} not found in current records", id);
                summaries.push(PlayerSummary::Empty {
                    slot,
                    requested: id.to_string(),
                });
            }
        }
    }

    let rows = StatCategory::ALL
        .into_iter()
        .map(|category| ComparisonRow {
            category,
            label: category.label(),
            values: resolved
                .iter()
                .map(|(name, record)| SeriesValue {
                    name: name.to_string(),
                    value: record.stat(category),
                })
                .collect(),
        })
        .collect();

    Comparison { summaries, rows }
}
