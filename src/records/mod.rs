//! Player statistic records and alias-tolerant stat lookup.
//!
//! Records arrive from several generations of ingestion pipelines, so the
//! same rating can live under different keys. This module keeps the record
//! itself loosely typed and resolves canonical stats through fixed alias
//! lists:
//! - `types`: the `PlayerRecord` snapshot and its identity accessors
//! - `category`: the six canonical stat categories and ranking stat keys
//! - `resolve`: the pure alias resolver

pub mod category;
pub mod resolve;
pub mod types;

pub use category::{RankingStat, StatCategory, OVERALL_ALIASES};
pub use resolve::{resolve, resolve_str, to_number};
pub use types::PlayerRecord;
