//! `options`: the team and position dropdown contents.

use super::common::{to_json, RecordSource};
use crate::{
    cli::SourceArgs,
    config::Settings,
    core::filters::{options, FilterField, SelectOption},
    records::PlayerRecord,
    Result,
};
use serde::Serialize;

/// Option lists for both filterable fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterOptions {
    pub teams: Vec<SelectOption>,
    pub positions: Vec<SelectOption>,
}

pub fn filter_options(records: &[PlayerRecord]) -> FilterOptions {
    FilterOptions {
        teams: options(records, FilterField::Team),
        positions: options(records, FilterField::Position),
    }
}

pub fn format_options(opts: &FilterOptions) -> Vec<String> {
    let join = |list: &[SelectOption]| {
        list.iter()
            .map(|o| o.label.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };

    vec![
        format!("{}s: {}", FilterField::Team, join(&opts.teams)),
        format!("{}s: {}", FilterField::Position, join(&opts.positions)),
    ]
}

/// Handle the options command
pub async fn handle_options(source: &SourceArgs, json: bool, settings: &Settings) -> Result<()> {
    let records = RecordSource::resolve(source, settings)?.load().await?;
    let opts = filter_options(&records);

    if json {
        println!("{}", to_json(&opts)?);
    } else {
        for line in format_options(&opts) {
            println!("{line}");
        }
    }

    Ok(())
}
