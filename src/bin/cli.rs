//! delivery-listings
//!
//! Scrapes every configured delivery area and writes one xlsx sheet per area.
//! With no arguments it scrapes athina, thessaloniki and patra into
//! `athina_thessaloniki_patra.xlsx`.

use anyhow::Context;
use clap::Parser;
use delivery_listings::{ChromeLoader, ConnectionOptions, ScrapeConfig, logging, runner};
use log::LevelFilter;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "delivery-listings")]
#[command(version)]
#[command(about = "Scrape delivery-platform shop listings into an xlsx workbook", long_about = None)]
struct Cli {
    /// JSON config file (base URL, areas, selectors, output, launch options)
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Base URL of the platform
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Output workbook path
    #[arg(long, short = 'o', value_name = "FILE")]
    output: Option<PathBuf>,

    /// Path to custom browser executable
    #[arg(long, value_name = "PATH")]
    chrome_path: Option<PathBuf>,

    /// Chrome profile directory
    #[arg(long, value_name = "DIR")]
    user_data_dir: Option<PathBuf>,

    /// Disable the Chrome sandbox (needed in some containers)
    #[arg(long)]
    no_sandbox: bool,

    /// How long to wait for the first listing to render, in milliseconds
    #[arg(long, value_name = "MS")]
    ready_timeout: Option<u64>,

    /// WebSocket endpoint of a running browser to attach to instead of launching one
    #[arg(long, value_name = "URL")]
    ws_endpoint: Option<String>,

    /// Launch browser in headed mode (default: headless)
    #[arg(long, short = 'H')]
    headed: bool,

    /// Default log level; RUST_LOG overrides it
    #[arg(long, default_value = "debug")]
    log_level: LevelFilter,
}

impl Cli {
    fn into_config(self) -> anyhow::Result<(ScrapeConfig, Option<String>)> {
        let mut config = match &self.config {
            Some(path) => ScrapeConfig::from_file(path).with_context(|| format!("Loading {}", path.display()))?,
            None => ScrapeConfig::default(),
        };

        if let Some(base_url) = self.base_url {
            config.base_url = base_url;
        }
        if let Some(output) = self.output {
            config.output = output;
        }

        let mut launch = config.launch;
        if let Some(path) = self.chrome_path {
            launch = launch.chrome_path(path);
        }
        if let Some(dir) = self.user_data_dir {
            launch = launch.user_data_dir(dir);
        }
        if let Some(ms) = self.ready_timeout {
            launch = launch.ready_timeout(Duration::from_millis(ms));
        }
        if self.headed {
            launch = launch.headless(false);
        }
        if self.no_sandbox {
            launch = launch.sandbox(false);
        }
        config.launch = launch;

        Ok((config, self.ws_endpoint))
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::install(logging::build_logger(cli.log_level)).context("Failed to install logger")?;

    let (config, ws_endpoint) = cli.into_config()?;

    let mut loader = match ws_endpoint {
        Some(ws_url) => {
            log::info!("Attaching to browser at {}", ws_url);
            ChromeLoader::connect(ConnectionOptions::new(ws_url), config.launch.clone())
        }
        None => ChromeLoader::new(config.launch.clone()),
    };

    let summary = runner::run(&config, &mut loader);

    if !summary.failed.is_empty() {
        log::warn!("Areas that failed to load: {}", summary.failed.join(", "));
    }

    // Export problems are already logged; a finished run always exits cleanly
    let _ = runner::export_results(&summary, &config.output);

    Ok(())
}
