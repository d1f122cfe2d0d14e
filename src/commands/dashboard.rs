//! `dashboard`: league totals and the top of the rankings.

use super::common::{to_json, RecordSource};
use crate::{
    cli::SourceArgs,
    config::Settings,
    core::overview::{overview, Overview},
    Result,
};

pub fn format_overview(o: &Overview) -> Vec<String> {
    let mut lines = vec![
        format!("Total Players: {}", o.total_players),
        format!("Average Rating: {:.2}", o.average_score),
        String::new(),
        format!("Top {} Players", o.top_players.len()),
    ];

    lines.extend(o.top_players.iter().enumerate().map(|(i, p)| {
        format!(
            "{}. {} – {:.1}",
            p.rank.map_or(i + 1, |r| r as usize),
            p.name.as_deref().unwrap_or("Unknown"),
            p.score
        )
    }));

    lines
}

/// Handle the dashboard command
pub async fn handle_dashboard(
    source: &SourceArgs,
    top: usize,
    json: bool,
    settings: &Settings,
) -> Result<()> {
    let records = RecordSource::resolve(source, settings)?.load().await?;
    let o = overview(&records, top);

    if json {
        println!("{}", to_json(&o)?);
    } else {
        for line in format_overview(&o) {
            println!("{line}");
        }
    }

    Ok(())
}
