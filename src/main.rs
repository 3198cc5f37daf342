use std::io::Write;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use hotel_merge::config::{ACME_URL, DEFAULT_TIMEOUT_MS, PAPERFLIES_URL, PATAGONIA_URL};
use hotel_merge::{fetch_hotels, to_json_pretty, HotelFilter, PipelineConfig};

/// Fetch hotel data from every supplier, merge it and print it as JSON.
#[derive(Debug, Parser)]
#[command(name = "hotel_merge", version)]
struct Cli {
    /// Comma-separated hotel ids, or "none"
    hotel_ids: String,

    /// Comma-separated destination ids, or "none"
    destination_ids: String,

    /// Per-supplier request timeout in milliseconds
    #[arg(long, env = "HOTEL_MERGE_TIMEOUT_MS", default_value_t = DEFAULT_TIMEOUT_MS)]
    timeout_ms: u64,

    /// Maximum number of supplier requests in flight
    #[arg(long, env = "HOTEL_MERGE_MAX_CONCURRENT_FETCHES", default_value_t = 3)]
    max_concurrent_fetches: usize,

    #[arg(long, env = "HOTEL_MERGE_ACME_URL", default_value = ACME_URL)]
    acme_url: String,

    #[arg(long, env = "HOTEL_MERGE_PAPERFLIES_URL", default_value = PAPERFLIES_URL)]
    paperflies_url: String,

    #[arg(long, env = "HOTEL_MERGE_PATAGONIA_URL", default_value = PATAGONIA_URL)]
    patagonia_url: String,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> PipelineConfig {
        PipelineConfig {
            timeout_ms: self.timeout_ms,
            max_concurrent_fetches: self.max_concurrent_fetches,
            acme_url: self.acme_url.clone(),
            paperflies_url: self.paperflies_url.clone(),
            patagonia_url: self.patagonia_url.clone(),
        }
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // Logs go to stderr; stdout carries only the JSON output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let filter = HotelFilter::from_args(&cli.hotel_ids, &cli.destination_ids);
    let output = fetch_hotels(&cli.config(), &filter)
        .await
        .context("failed to initialise supplier transport")?;

    let json = to_json_pretty(&output.hotels).context("failed to serialize hotels")?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}").context("failed to write output")?;
    Ok(())
}
