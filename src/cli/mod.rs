//! CLI argument definitions and parsing.

use crate::{api::StreakRange, records::RankingStat};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Where records come from, shared by every record-based command.
#[derive(Debug, Args)]
pub struct SourceArgs {
    /// Read records from a JSON file (array of flat objects) instead of the API.
    #[clap(long, short)]
    pub file: Option<PathBuf>,

    /// Rankings API base URL (or set `NBA_COMPARE_API_URL`).
    #[clap(long)]
    pub api_url: Option<String>,

    /// Ranking stat to fetch: IMPACT_100, SCORING_100, PLAY_100, REB_100,
    /// DISC_100, DEF_100 or TOTAL_100.
    #[clap(long, default_value_t = RankingStat::default())]
    pub stat: RankingStat,

    /// Number of ranked players to fetch (default 360).
    #[clap(long)]
    pub limit: Option<u32>,
}

/// Record filters for the rankings table.
#[derive(Debug, Args)]
pub struct FilterArgs {
    /// Only players on this team code, e.g. `BOS`.
    #[clap(long, short)]
    pub team: Option<String>,

    /// Only players at this position code, e.g. `PG`.
    #[clap(long, short)]
    pub position: Option<String>,

    /// Case-insensitive substring of the player name.
    #[clap(long, short)]
    pub name: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the team and position filter options.
    Options {
        #[clap(flatten)]
        source: SourceArgs,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Show the ranked players matching the filters.
    Search {
        #[clap(flatten)]
        source: SourceArgs,

        #[clap(flatten)]
        filters: FilterArgs,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Compare 2-4 players across the six stat categories.
    ///
    /// Players fill slots in the order given. Names that are not in the
    /// current records show up as empty slots.
    Compare {
        #[clap(flatten)]
        source: SourceArgs,

        /// Player to compare (repeatable): `-p "Luka Doncic" -p "Jayson Tatum"`.
        #[clap(short = 'p', long = "player", required = true)]
        players: Vec<String>,

        /// Number of comparison slots (2-4). Defaults to the number of players.
        #[clap(long)]
        slots: Option<usize>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// League overview: player count, average rating and the top players.
    Dashboard {
        #[clap(flatten)]
        source: SourceArgs,

        /// How many top players to list.
        #[clap(long, default_value_t = 5)]
        top: usize,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Hot and cold streaks over the last 5 or 10 games.
    Streaks {
        /// Rankings API base URL (or set `NBA_COMPARE_API_URL`).
        #[clap(long)]
        api_url: Option<String>,

        /// Streak window in games: 5 or 10.
        #[clap(long, default_value = "5")]
        range: StreakRange,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "nba-compare", about = "NBA player filtering and comparison")]
pub struct NbaCompare {
    /// Enable debug logging (`RUST_LOG` takes precedence).
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}
