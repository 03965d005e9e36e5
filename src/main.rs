use std::path::Path;

use chrono::Utc;
use tracing::{error, info};

use mhlw_rss::{Config, PageFetcher, Result, TARGETS};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load("config.toml") {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config.toml: {e}");
            eprintln!("Using default configuration.");
            Config::default()
        }
    };

    // Initialize logging
    if let Err(e) = mhlw_rss::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        // Fall back to console-only logging
        mhlw_rss::logging::init_console_only(&config.logging.level);
    }

    info!("mhlw-rss - MHLW page to RSS feed generator");

    if let Err(e) = run(&config).await {
        error!("Run aborted: {e}");
        std::process::exit(1);
    }
}

async fn run(config: &Config) -> Result<()> {
    let fetcher = PageFetcher::new(&config.fetch)?;
    let output_dir = Path::new(&config.output.dir);

    // One timestamp for the whole run; every date-less item shares it
    let now = Utc::now();

    for target in TARGETS.iter() {
        let count = mhlw_rss::pipeline::run_target(&fetcher, target, output_dir, now).await?;
        info!("{}: {} item(s)", target.name, count);
    }

    info!("RSS feed generation complete");
    Ok(())
}
