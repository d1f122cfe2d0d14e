//! Error types for the NBA comparison engine and CLI

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, CompareError>;

#[derive(Error, Debug)]
pub enum CompareError {
    #[error("Invalid slot count {requested}: must be between {min} and {max} and may only grow one slot at a time (currently {current})")]
    InvalidSlotCount {
        requested: usize,
        current: usize,
        min: usize,
        max: usize,
    },

    #[error("Player {id} is already selected in slot {slot}")]
    DuplicateSelection { id: String, slot: usize },

    #[error("Slot {index} is out of range ({slot_count} slots)")]
    SlotOutOfRange { index: usize, slot_count: usize },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No record file given and {env_var} environment variable not set")]
    MissingDataSource { env_var: String },

    #[error("Invalid ranking stat: {stat}")]
    InvalidStat { stat: String },

    #[error("Invalid streak range: {range} (expected 5 or 10)")]
    InvalidStreakRange { range: String },

    #[error("Rankings API returned no data")]
    NoData,
}
