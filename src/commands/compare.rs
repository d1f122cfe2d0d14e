//! `compare`: player cards and the radar table for 2-4 players.

use super::common::{or_na, to_json, RecordSource};
use crate::{
    cli::SourceArgs,
    config::Settings,
    core::{
        compare::{build, Comparison, PlayerSummary, Series},
        selection::{SelectionManager, MIN_SLOTS},
    },
    records::PlayerRecord,
    Result,
};
use log::debug;
use serde::Serialize;

/// JSON payload: the comparison plus its radar legend.
#[derive(Debug, Serialize)]
pub struct ComparisonOutput<'a> {
    pub series: Vec<Series>,
    #[serde(flatten)]
    pub comparison: &'a Comparison,
}

/// Map a typed name to a record id: exact match first, then a
/// case-insensitive one (Unicode lowercase, as in name search). Unknown names
/// are kept as typed.
pub fn match_player_id(records: &[PlayerRecord], typed: &str) -> String {
    let typed = typed.trim();
    let typed_lower = typed.to_lowercase();
    records
        .iter()
        .filter_map(PlayerRecord::id)
        .find(|id| *id == typed)
        .or_else(|| {
            records
                .iter()
                .filter_map(PlayerRecord::id)
                .find(|id| id.to_lowercase() == typed_lower)
        })
        .unwrap_or(typed)
        .to_string()
}

/// Fill a selection with `players` in order.
///
/// The requested (or configured) slot count must lie in
/// [`MIN_SLOTS`]..=[`MAX_SLOTS`](crate::core::selection::MAX_SLOTS). The selection then grows one slot at a time
/// to fit the players, so more than four players is an `InvalidSlotCount`
/// error and a repeated player is a `DuplicateSelection` error.
pub fn build_selection(
    records: &[PlayerRecord],
    players: &[String],
    slots: Option<usize>,
    settings: &Settings,
) -> Result<SelectionManager> {
    let requested = slots.or(settings.default_slots).unwrap_or(MIN_SLOTS);
    let mut selection = SelectionManager::new(requested)?;

    while selection.slot_count() < players.len() {
        selection.add_slot()?;
    }

    for (slot, typed) in players.iter().enumerate() {
        let id = match_player_id(records, typed);
        debug!("slot {} -> {}", slot, id);
        selection.select_at(slot, &id)?;
    }

    Ok(selection)
}

/// Card and table lines for text output.
pub fn format_comparison(comparison: &Comparison) -> Vec<String> {
    let mut lines = Vec::new();

    for summary in &comparison.summaries {
        match summary {
            PlayerSummary::Player { slot, color, card } => {
                lines.push(format!(
                    "[{}] {} ({} • {}){}",
                    slot + 1,
                    card.name,
                    or_na(card.team.as_deref()),
                    or_na(card.position.as_deref()),
                    color.as_deref().map(|c| format!("  {c}")).unwrap_or_default()
                ));
                lines.push(format!("    Overall Score: {:.1}", card.score));
                for stat in &card.stats {
                    lines.push(format!("    {:<11} {:>6.1}", stat.label, stat.value));
                }
            }
            PlayerSummary::Empty { slot, requested } => {
                lines.push(format!("[{}] Empty Slot ({} not found)", slot + 1, requested));
            }
        }
    }

    let series = comparison.series();
    if series.is_empty() {
        return lines;
    }

    lines.push(String::new());
    let mut header = format!("{:<11}", "Stat");
    for s in &series {
        header.push_str(&format!(" {:>12}", truncate(&s.name, 12)));
    }
    lines.push(header);

    for row in &comparison.rows {
        let mut line = format!("{:<11}", row.label);
        for v in &row.values {
            line.push_str(&format!(" {:>12.1}", v.value));
        }
        lines.push(line);
    }

    lines
}

fn truncate(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// Handle the compare command
pub async fn handle_compare(
    source: &SourceArgs,
    players: &[String],
    slots: Option<usize>,
    json: bool,
    settings: &Settings,
) -> Result<()> {
    let records = RecordSource::resolve(source, settings)?.load().await?;
    let selection = build_selection(&records, players, slots, settings)?;
    let comparison = build(&records, &selection, &settings.palette());

    if json {
        let output = ComparisonOutput {
            series: comparison.series(),
            comparison: &comparison,
        };
        println!("{}", to_json(&output)?);
    } else {
        for line in format_comparison(&comparison) {
            println!("{line}");
        }
    }

    Ok(())
}
