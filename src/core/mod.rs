//! The comparison engine.
//!
//! Pure, synchronous transformations over an in-memory record snapshot:
//! - `filters`: option sets and filtered record lists
//! - `selection`: the bounded comparison slots
//! - `compare`: player cards and radar rows for the selection
//! - `overview`: dashboard totals

pub mod compare;
pub mod filters;
pub mod overview;
pub mod selection;

// Re-export commonly used items for convenience
pub use compare::{build, Comparison, ComparisonRow, PlayerCard, PlayerSummary, DEFAULT_PALETTE};
pub use filters::{apply_filters, distinct_values, options, FilterField, FilterState, SelectOption};
pub use overview::{overview, Overview};
pub use selection::{SelectionManager, MAX_SLOTS, MIN_SLOTS};
