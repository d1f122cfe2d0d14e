//! Entry point: parse CLI, set up logging and dispatch to command handlers.

use clap::Parser;
use env_logger::Env;
use nba_compare::{
    cli::{Commands, NbaCompare},
    commands::{
        compare::handle_compare, dashboard::handle_dashboard, options::handle_options,
        search::handle_search, streaks::handle_streaks,
    },
    config::Settings,
    Result,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = NbaCompare::parse();

    let log_level = if app.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    let settings = Settings::load()?;

    match app.command {
        Commands::Options { source, json } => handle_options(&source, json, &settings).await?,

        Commands::Search {
            source,
            filters,
            json,
        } => handle_search(&source, &filters, json, &settings).await?,

        Commands::Compare {
            source,
            players,
            slots,
            json,
        } => handle_compare(&source, &players, slots, json, &settings).await?,

        Commands::Dashboard { source, top, json } => {
            handle_dashboard(&source, top, json, &settings).await?
        }

        Commands::Streaks {
            api_url,
            range,
            json,
        } => handle_streaks(api_url, range, json, &settings).await?,
    }

    Ok(())
}
