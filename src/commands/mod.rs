//! Command implementations for the nba-compare CLI

pub mod common;
pub mod compare;
pub mod dashboard;
pub mod options;
pub mod search;
pub mod streaks;
