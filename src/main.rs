//! cdv: a terminal company directory viewer.

use clap::Parser;
use cdv::config;
use cdv::logging;
use cdv::model::{AppError, InvalidSortSpec, SortSpec};
use cdv::source;
use cdv::state::AppState;
use cdv::view;
use std::path::PathBuf;
use tracing::info;

/// Browse a company directory feed: search, filter, sort, paginate.
#[derive(Parser, Debug)]
#[command(name = "cdv", version, about)]
struct Args {
    /// Feed URL (http/https) or path to a local JSON file.
    ///
    /// Falls back to `feed_url` from the config file or `CDV_FEED_URL`.
    source: Option<String>,

    /// Path to the config file (default: ~/.config/cdv/config.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Initial search query.
    #[arg(long)]
    search: Option<String>,

    /// Initial sort, e.g. "name-asc" or "employees-desc".
    #[arg(long, value_parser = parse_sort)]
    sort: Option<SortSpec>,

    /// Companies per page.
    #[arg(long)]
    page_size: Option<usize>,
}

fn parse_sort(token: &str) -> Result<SortSpec, InvalidSortSpec> {
    SortSpec::parse(token)
}

fn main() {
    if let Err(error) = run() {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_file = config::load_config_with_precedence(args.config.clone())?;
    let resolved = config::merge_config(config_file)?;
    let resolved = config::apply_env_overrides(resolved);
    let resolved =
        config::apply_cli_overrides(resolved, args.source.clone(), args.sort, args.page_size);

    logging::init(&resolved.log_file_path)?;
    info!(version = env!("CARGO_PKG_VERSION"), "cdv starting");

    let feed_source = resolved.feed_url.clone().ok_or(AppError::NoFeed)?;
    info!(source = %feed_source, page_size = resolved.page_size, "Loading directory feed");
    let feed = source::detect_feed(&feed_source);

    let mut state = AppState::new(resolved.page_size);
    state.set_sort(resolved.sort);
    if let Some(query) = args.search {
        state.set_search(query);
    }

    view::run_with_feed(feed, state)?;
    info!("cdv exiting");
    Ok(())
}
