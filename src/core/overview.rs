//! League overview figures for the dashboard.

use crate::records::PlayerRecord;
use serde::Serialize;

/// Top entry on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopPlayer {
    pub rank: Option<u32>,
    pub name: Option<String>,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overview {
    pub total_players: usize,
    /// Mean overall score, rounded to two decimals. 0 for no records.
    pub average_score: f64,
    pub top_players: Vec<TopPlayer>,
}

/// Summarise `records`. The source delivers records already ranked, so the
/// top entries are simply the first `top_n`.
pub fn overview(records: &[PlayerRecord], top_n: usize) -> Overview {
    let total_players = records.len();
    let average_score = if total_players == 0 {
        0.0
    } else {
        let sum: f64 = records.iter().map(PlayerRecord::score).sum();
        round2(sum / total_players as f64)
    };

    let top_players = records
        .iter()
        .take(top_n)
        .map(|r| TopPlayer {
            rank: r.rank(),
            name: r.name().map(str::to_string),
            score: r.score(),
        })
        .collect();

    Overview {
        total_players,
        average_score,
        top_players,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
