//! NBA player comparison engine
//!
//! Turns a loosely-typed collection of player statistic records into filter
//! option sets, filtered pick lists, and normalized multi-series rows for a
//! 2-4 player radar comparison.
//!
//! ## Features
//!
//! - **Alias-tolerant stats**: each canonical stat is resolved from an ordered
//!   list of historical key names; missing data reads as 0
//! - **One filter engine**: team/position option sets and name search shared
//!   by every picker
//! - **Bounded selection**: 2-4 ordered slots with uniqueness enforced
//! - **Comparison output**: player cards plus six radar rows with a stable
//!   colour per slot
//! - **Rankings API client**: fetch ranked snapshots and hot/cold streaks
//!
//! ## Quick Start
//!
//! ```rust
//! use nba_compare::{core::compare::{build, DEFAULT_PALETTE}, PlayerRecord, SelectionManager};
//! use serde_json::json;
//!
//! # fn example() -> nba_compare::Result<()> {
//! let records: Vec<PlayerRecord> = serde_json::from_value(json!([
//!     {"namePlayer": "A", "team": "X", "pos": "G", "SCORING_100": 80},
//!     {"namePlayer": "B", "team": "Y", "pos": "F", "scoring": 72},
//! ]))?;
//!
//! let mut selection = SelectionManager::new(2)?;
//! selection.select_at(0, "A")?;
//! selection.select_at(1, "B")?;
//!
//! let comparison = build(&records, &selection, &DEFAULT_PALETTE);
//! assert_eq!(comparison.rows.len(), 6);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Environment Configuration
//!
//! Set the rankings API base URL to avoid passing it in every command:
//! ```bash
//! export NBA_COMPARE_API_URL=http://localhost:8000
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod records;

// Re-export commonly used types
pub use config::API_URL_ENV_VAR;
pub use crate::core::{
    compare::Comparison,
    filters::{FilterField, FilterState},
    selection::SelectionManager,
};
pub use error::{CompareError, Result};
pub use records::{PlayerRecord, RankingStat, StatCategory};
