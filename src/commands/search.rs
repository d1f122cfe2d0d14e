//! `search`: the filtered rankings table.

use super::common::{format_score, or_na, to_json, RecordSource};
use crate::{
    cli::{FilterArgs, SourceArgs},
    config::Settings,
    core::filters::{apply_filters, FilterState},
    records::{PlayerRecord, RankingStat},
    Result,
};
use log::debug;

/// Build the filter state from CLI flags. Blank values count as unset.
pub fn filter_state(args: &FilterArgs) -> FilterState {
    let non_blank = |v: &Option<String>| v.clone().filter(|s| !s.trim().is_empty());

    FilterState {
        team: non_blank(&args.team),
        position: non_blank(&args.position),
        search: args.name.clone().unwrap_or_default(),
    }
}

/// Table lines for `players`, headed by the ranking stat label.
pub fn format_rankings(players: &[&PlayerRecord], stat: RankingStat) -> Vec<String> {
    let mut lines = vec![format!(
        "{:>4}  {:<28} {:<5} {:<5} {}",
        "Rank",
        "Player",
        "Team",
        "Pos",
        stat.label()
    )];

    if players.is_empty() {
        lines.push("No players found.".to_string());
        return lines;
    }

    lines.extend(players.iter().map(|p| {
        format!(
            "{:>4}  {:<28} {:<5} {:<5} {}",
            p.rank().map(|r| r.to_string()).unwrap_or_else(|| "-".to_string()),
            p.name().unwrap_or("Unknown"),
            or_na(p.team()),
            or_na(p.position()),
            format_score(p)
        )
    }));

    lines
}

/// Handle the search command
pub async fn handle_search(
    source: &SourceArgs,
    filters: &FilterArgs,
    json: bool,
    settings: &Settings,
) -> Result<()> {
    let records = RecordSource::resolve(source, settings)?.load().await?;
    let state = filter_state(filters);
    let hits = apply_filters(&records, &state);
    debug!("{} of {} players match {:?}", hits.len(), records.len(), state);

    if json {
        println!("{}", to_json(&hits)?);
    } else {
        for line in format_rankings(&hits, source.stat) {
            println!("{line}");
        }
    }

    Ok(())
}
