//! `streaks`: hot and cold players over a recent window.

use super::common::{or_na, to_json};
use crate::{
    api::{streak_magnitude, RankingsClient, StreakRange, Trends},
    config::{resolve_api_url, Settings, API_URL_ENV_VAR},
    records::PlayerRecord,
    CompareError, Result,
};

fn format_list(title: &str, players: &[PlayerRecord], lines: &mut Vec<String>) {
    lines.push(title.to_string());
    if players.is_empty() {
        lines.push(format!("  No {} found.", title.to_lowercase()));
        return;
    }
    for p in players {
        lines.push(format!(
            "  {} ({} • {})  {:.1}",
            p.name().unwrap_or("Unknown"),
            or_na(p.team()),
            or_na(p.position()),
            streak_magnitude(p)
        ));
    }
}

pub fn format_trends(trends: &Trends, range: StreakRange) -> Vec<String> {
    let mut lines = vec![format!("Hot & Cold Streaks ({range})"), String::new()];
    format_list("Hot Players", &trends.hot, &mut lines);
    lines.push(String::new());
    format_list("Cold Players", &trends.cold, &mut lines);
    lines
}

/// Handle the streaks command
pub async fn handle_streaks(
    api_url: Option<String>,
    range: StreakRange,
    json: bool,
    settings: &Settings,
) -> Result<()> {
    let base_url =
        resolve_api_url(api_url, settings).ok_or_else(|| CompareError::MissingDataSource {
            env_var: API_URL_ENV_VAR.to_string(),
        })?;
    let trends = RankingsClient::new(&base_url).fetch_trends(range).await?;

    if json {
        println!("{}", to_json(&trends)?);
    } else {
        for line in format_trends(&trends, range) {
            println!("{line}");
        }
    }

    Ok(())
}
