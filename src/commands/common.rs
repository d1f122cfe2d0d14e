//! Common utilities and helper functions shared across commands.

use crate::{
    api::{records_from_value, RankingsClient},
    cli::SourceArgs,
    config::{resolve_api_url, Settings, API_URL_ENV_VAR},
    records::{PlayerRecord, RankingStat},
    CompareError, Result,
};
use log::info;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Resolved origin of a record snapshot.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordSource {
    File(PathBuf),
    Api {
        base_url: String,
        limit: u32,
        stat: RankingStat,
    },
}

impl RecordSource {
    /// Pick the source for `args`: an explicit file wins, otherwise the API
    /// URL from flag, env or config.
    pub fn resolve(args: &SourceArgs, settings: &Settings) -> Result<Self> {
        if let Some(path) = &args.file {
            return Ok(RecordSource::File(path.clone()));
        }

        let base_url = resolve_api_url(args.api_url.clone(), settings).ok_or_else(|| {
            CompareError::MissingDataSource {
                env_var: API_URL_ENV_VAR.to_string(),
            }
        })?;

        Ok(RecordSource::Api {
            base_url,
            limit: args.limit.unwrap_or_else(|| settings.limit()),
            stat: args.stat,
        })
    }

    /// Load a fresh snapshot. Each call replaces the previous one wholesale.
    pub async fn load(&self) -> Result<Vec<PlayerRecord>> {
        match self {
            RecordSource::File(path) => load_records_file(path),
            RecordSource::Api {
                base_url,
                limit,
                stat,
            } => {
                RankingsClient::new(base_url)
                    .fetch_rankings(*limit, *stat)
                    .await
            }
        }
    }
}

/// Read a JSON array of player records from disk.
pub fn load_records_file(path: &Path) -> Result<Vec<PlayerRecord>> {
    let contents = fs::read_to_string(path)?;
    let records = records_from_value(serde_json::from_str(&contents)?)?;
    info!("loaded {} players from {}", records.len(), path.display());
    Ok(records)
}

/// `N/A` stand-in for missing text fields.
pub fn or_na(value: Option<&str>) -> &str {
    value.unwrap_or("N/A")
}

/// Overall score to one decimal, or `—` when the record has none.
pub fn format_score(record: &PlayerRecord) -> String {
    if record.has_score() {
        format!("{:.1}", record.score())
    } else {
        "—".to_string()
    }
}

/// Pretty JSON for `--json` output.
pub fn to_json<T: serde::Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
