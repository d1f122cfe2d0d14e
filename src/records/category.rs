//! Canonical stat categories and the ranking stat keys served by the API.

use crate::error::CompareError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Aliases for the pre-computed overall score.
pub const OVERALL_ALIASES: &[&str] = &["score", "TOTAL_100", "score_total"];

/// One of the six fixed comparison dimensions (the radar axes).
///
/// Each category owns an ordered alias list: the modern short key first,
/// then the `_100` key from the percentile pipeline, then the `Z_` key from
/// the z-score pipeline.
///
/// # Examples
///
/// ```rust
/// use nba_compare::StatCategory;
///
/// assert_eq!(StatCategory::Scoring.label(), "Scoring");
/// assert_eq!(
///     StatCategory::Scoring.aliases(),
///     &["scoring", "SCORING_100", "Z_SCORING"]
/// );
/// assert_eq!(StatCategory::ALL.len(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatCategory {
    Impact,
    Scoring,
    Playmaking,
    Rebounding,
    Discipline,
    Defense,
}

impl StatCategory {
    /// All categories in radar axis order.
    pub const ALL: [StatCategory; 6] = [
        StatCategory::Impact,
        StatCategory::Scoring,
        StatCategory::Playmaking,
        StatCategory::Rebounding,
        StatCategory::Discipline,
        StatCategory::Defense,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StatCategory::Impact => "Impact",
            StatCategory::Scoring => "Scoring",
            StatCategory::Playmaking => "Playmaking",
            StatCategory::Rebounding => "Rebounding",
            StatCategory::Discipline => "Discipline",
            StatCategory::Defense => "Defense",
        }
    }

    /// Record keys that may hold this category, most preferred first.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            StatCategory::Impact => &["impact", "IMPACT_100", "Z_IMPACT"],
            StatCategory::Scoring => &["scoring", "SCORING_100", "Z_SCORING"],
            StatCategory::Playmaking => &["playmaking", "PLAY_100", "Z_PLAY"],
            StatCategory::Rebounding => &["rebounding", "REB_100", "Z_REB"],
            StatCategory::Discipline => &["discipline", "DISC_100", "Z_DISC"],
            StatCategory::Defense => &["defense", "DEF_100", "Z_DEF"],
        }
    }

    /// The server-side ranking key for this category.
    pub fn ranking_stat(&self) -> RankingStat {
        match self {
            StatCategory::Impact => RankingStat::Impact,
            StatCategory::Scoring => RankingStat::Scoring,
            StatCategory::Playmaking => RankingStat::Play,
            StatCategory::Rebounding => RankingStat::Reb,
            StatCategory::Discipline => RankingStat::Disc,
            StatCategory::Defense => RankingStat::Def,
        }
    }
}

impl fmt::Display for StatCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for StatCategory {
    type Err = CompareError;

    /// Accepts the label (any case) or any of the category's aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        StatCategory::ALL
            .into_iter()
            .find(|c| {
                c.label().eq_ignore_ascii_case(needle)
                    || c.aliases().iter().any(|a| a.eq_ignore_ascii_case(needle))
            })
            .ok_or_else(|| CompareError::InvalidStat {
                stat: s.to_string(),
            })
    }
}

/// Stat keys the rankings endpoint can sort by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RankingStat {
    Impact,
    Scoring,
    Play,
    Reb,
    Disc,
    Def,
    #[default]
    Total,
}

impl RankingStat {
    pub const ALL: [RankingStat; 7] = [
        RankingStat::Impact,
        RankingStat::Scoring,
        RankingStat::Play,
        RankingStat::Reb,
        RankingStat::Disc,
        RankingStat::Def,
        RankingStat::Total,
    ];

    /// Query value for `/rankings?stat=`.
    pub fn query_key(&self) -> &'static str {
        match self {
            RankingStat::Impact => "IMPACT_100",
            RankingStat::Scoring => "SCORING_100",
            RankingStat::Play => "PLAY_100",
            RankingStat::Reb => "REB_100",
            RankingStat::Disc => "DISC_100",
            RankingStat::Def => "DEF_100",
            RankingStat::Total => "TOTAL_100",
        }
    }

    /// Short column header, e.g. `SCORING`.
    pub fn label(&self) -> &'static str {
        let key = self.query_key();
        key.strip_suffix("_100").unwrap_or(key)
    }
}

impl fmt::Display for RankingStat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.query_key())
    }
}

impl FromStr for RankingStat {
    type Err = CompareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        let key = upper.strip_suffix("_100").unwrap_or(&upper);
        RankingStat::ALL
            .into_iter()
            .find(|stat| stat.label() == key)
            .or_else(|| {
                key.parse::<StatCategory>()
                    .ok()
                    .map(|category| category.ranking_stat())
            })
            .ok_or_else(|| CompareError::InvalidStat {
                stat: s.to_string(),
            })
    }
}
