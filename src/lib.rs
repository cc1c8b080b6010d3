// Core modules
pub mod config;
pub mod domain;
pub mod feeds;
pub mod models;
pub mod utils;

// Re-export commonly used types outside of crate
pub use config::{DASHBOARD, DashboardConfig, Dataset};
pub use domain::Cadence;
pub use feeds::FeedGenerator;
pub use models::{Regime, s5_badge_text};

// CLI argument parsing
use {
    anyhow::{Context, Result},
    clap::Parser,
    std::path::PathBuf,
};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Generation cadence: daily, tplus3 (or t+3) or weekly. Unknown values mean daily.
    #[arg(long, env = "CADENCE", default_value = "daily")]
    pub cadence: String,

    /// Directory the dashboard is served from; feeds land under its /output paths
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Print the dashboard config as JSON instead of generating feeds
    #[arg(long, default_value_t = false)]
    pub print_config: bool,
}

/// Entry point for the binary. Writes the feeds (or prints the config) and
/// returns the summary line for the caller to report.
pub fn run(args: &Cli) -> Result<String> {
    if args.print_config {
        return DASHBOARD
            .to_json_pretty()
            .context("Failed to serialize dashboard config");
    }

    let cadence = Cadence::parse_or_daily(&args.cadence);
    let generator = FeedGenerator::new(&config::GENERATOR, cadence, utils::now_feed_time());

    let written = generator.write_all(&args.root, &DASHBOARD.data)?;
    log::info!("{} feeds written under {}", written.paths.len(), args.root.display());

    let market = serde_json::to_value(&written.market_regime)
        .context("Failed to serialize market regime")?;
    log::info!("Badge: {}", DASHBOARD.s5_badge_text(Some(&market)));

    Ok(format!(
        "[ok] wrote output/*.json | cadence={} | updated_at={}",
        cadence.key(),
        generator.updated_at()
    ))
}
