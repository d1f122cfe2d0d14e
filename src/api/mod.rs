//! Rankings API access: the HTTP client and its payload types.

pub mod http;
pub mod types;

pub use http::{RankingsClient, DEFAULT_LIMIT};
pub use types::{records_from_value, streak_magnitude, StreakRange, Trends};
