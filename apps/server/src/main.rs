//! ETH futures volume watcher.
//!
//! Polls exchange REST endpoints for 24h ETH derivative volume,
//! normalizes everything to USD notional, persists snapshots, and
//! alerts on sharp moves in the aggregate total.

mod config;
mod runner;

use clap::Parser;
use config::Config;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;
use volwatch_alerts::TelegramNotifier;
use volwatch_store::Database;

/// Volume watcher CLI
#[derive(Parser, Debug)]
#[command(name = "volwatch")]
#[command(about = "ETH futures 24h volume watcher", long_about = None)]
struct Args {
    /// Database URL
    #[arg(long, default_value = "sqlite:eth_futures_volume.db")]
    db: String,

    /// Run a single poll cycle and exit
    #[arg(long, default_value_t = false)]
    once: bool,

    /// Poll interval in seconds (overrides POLL_SECONDS)
    #[arg(short, long)]
    interval: Option<u64>,

    /// Log level: trace, debug, info, warn, error
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn init_logging(level: &str) {
    let level = match level {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let args = Args::parse();
    init_logging(&args.log_level);

    let mut config = Config::from_env();
    if args.once {
        config.run_once = true;
    }
    if let Some(interval) = args.interval {
        config.poll_seconds = interval;
    }

    info!(
        poll_seconds = config.poll_seconds,
        run_once = config.run_once,
        change_pct = config.thresholds.change_pct,
        change_usd = config.thresholds.change_usd,
        "starting volume watcher"
    );

    let db = match Database::connect(&args.db).await {
        Ok(db) => db,
        Err(e) => {
            error!("failed to open database {}: {}", args.db, e);
            std::process::exit(1);
        }
    };

    let notifier = TelegramNotifier::from_env();

    if let Err(e) = runner::run(&config, &db, notifier.as_ref()).await {
        error!("poll loop failed: {}", e);
        std::process::exit(1);
    }
}
