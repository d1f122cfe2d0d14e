//! Client-side record filtering and filter option sets.
//!
//! One engine serves every picker: option lists are built per
//! [`FilterField`] and the same [`FilterState`] drives the rankings table and
//! the comparison pickers.
//!
//! # Matching rules
//!
//! - **team / position**: exact match when set
//! - **search**: case-insensitive substring of the player name; a record with
//!   no name never matches a non-empty search

use crate::records::PlayerRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Label of the synthetic option that clears a filter.
pub const ALL_SENTINEL: &str = "All";

/// A record attribute that can be filtered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterField {
    Team,
    Position,
}

impl FilterField {
    /// The field's value on `record`, if present and non-blank.
    pub fn value_of<'a>(&self, record: &'a PlayerRecord) -> Option<&'a str> {
        match self {
            FilterField::Team => record.team(),
            FilterField::Position => record.position(),
        }
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FilterField::Team => "Team",
            FilterField::Position => "Position",
        };
        write!(f, "{}", s)
    }
}

/// One entry of a filter dropdown.
///
/// The sentinel entry has no value; selecting it clears the filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub label: String,
    pub value: Option<String>,
}

impl SelectOption {
    pub fn all() -> Self {
        Self {
            label: ALL_SENTINEL.to_string(),
            value: None,
        }
    }

    pub fn value(value: &str) -> Self {
        Self {
            label: value.to_string(),
            value: Some(value.to_string()),
        }
    }

    pub fn is_all(&self) -> bool {
        self.value.is_none()
    }
}

/// Current filter selections. The default filters nothing.
///
/// # Examples
///
/// ```rust
/// use nba_compare::core::filters::{apply_filters, FilterState};
/// use nba_compare::PlayerRecord;
/// use serde_json::json;
///
/// let records: Vec<PlayerRecord> = serde_json::from_value(json!([
///     {"namePlayer": "Stephen Curry", "team": "GSW", "pos": "PG"},
///     {"namePlayer": "Draymond Green", "team": "GSW", "pos": "PF"},
///     {"namePlayer": "Seth Curry", "team": "CHA", "pos": "SG"},
/// ])).unwrap();
///
/// let state = FilterState::default().with_team("GSW").with_search("curry");
/// let hits = apply_filters(&records, &state);
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].name(), Some("Stephen Curry"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub team: Option<String>,
    pub position: Option<String>,
    pub search: String,
}

impl FilterState {
    pub fn with_team(mut self, team: &str) -> Self {
        self.team = Some(team.to_string());
        self
    }

    pub fn with_position(mut self, position: &str) -> Self {
        self.position = Some(position.to_string());
        self
    }

    pub fn with_search(mut self, search: &str) -> Self {
        self.search = search.to_string();
        self
    }

    /// Apply a dropdown choice to `field`; the sentinel clears it.
    pub fn select(&mut self, field: FilterField, option: &SelectOption) {
        let slot = match field {
            FilterField::Team => &mut self.team,
            FilterField::Position => &mut self.position,
        };
        *slot = option.value.clone();
    }

    pub fn get(&self, field: FilterField) -> Option<&str> {
        match field {
            FilterField::Team => self.team.as_deref(),
            FilterField::Position => self.position.as_deref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.team.is_none() && self.position.is_none() && self.search.is_empty()
    }

    /// Whether `record` passes every active filter.
    pub fn matches(&self, record: &PlayerRecord) -> bool {
        let field_ok = |field: FilterField| match self.get(field) {
            Some(wanted) => field.value_of(record) == Some(wanted),
            None => true,
        };

        field_ok(FilterField::Team)
            && field_ok(FilterField::Position)
            && matches_search(record, &self.search)
    }
}

/// Case-insensitive name search. An empty needle matches everything.
pub fn matches_search(record: &PlayerRecord, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    record
        .name()
        .is_some_and(|name| name.to_lowercase().contains(&search.to_lowercase()))
}

/// Distinct non-empty values of `field`, in first-seen order, after the
/// [`ALL_SENTINEL`].
///
/// A record value spelled exactly like the sentinel is not listed again.
pub fn distinct_values(records: &[PlayerRecord], field: FilterField) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut values = vec![ALL_SENTINEL.to_string()];

    for value in records.iter().filter_map(|r| field.value_of(r)) {
        if value != ALL_SENTINEL && seen.insert(value) {
            values.push(value.to_string());
        }
    }

    values
}

/// [`distinct_values`] as dropdown options.
pub fn options(records: &[PlayerRecord], field: FilterField) -> Vec<SelectOption> {
    distinct_values(records, field)
        .into_iter()
        .enumerate()
        .map(|(i, v)| {
            if i == 0 {
                SelectOption::all()
            } else {
                SelectOption::value(&v)
            }
        })
        .collect()
}

/// Records passing `state`, in input order.
pub fn apply_filters<'a>(records: &'a [PlayerRecord], state: &FilterState) -> Vec<&'a PlayerRecord> {
    records.iter().filter(|r| state.matches(r)).collect()
}
