use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use vidsearch::core::config::{self, CliOverrides};
use vidsearch::search::SearchOrder;
use vidsearch::tui;

#[derive(Parser)]
#[command(name = "vidsearch", about = "Search YouTube from the terminal")]
struct Args {
    /// Search term to run at start-up
    #[arg(short, long)]
    term: Option<String>,

    /// Number of results per search (1-50)
    #[arg(short = 'n', long)]
    max_results: Option<u32>,

    /// Result ordering
    #[arg(short, long, value_enum)]
    order: Option<SearchOrder>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to vidsearch.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("vidsearch.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().map_err(|e| {
        log::warn!("Failed to load config: {}", e);
        std::io::Error::other(e)
    })?;
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            term: args.term.as_deref(),
            max_results: args.max_results,
            order: args.order,
        },
    );

    log::info!(
        "vidsearch starting up: initial_term={:?}, max_results={}, order={:?}",
        resolved.initial_term,
        resolved.max_results,
        resolved.order
    );

    tui::run(resolved)
}
