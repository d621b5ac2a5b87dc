//! CLI entry point for the regional air-quality aggregator.
//!
//! Provides subcommands for querying one region (optionally one station),
//! listing integrated regions, and fetching every region concurrently.

use airq::config::AirQualityConfig;
use airq::output::{print_pretty, render_table, to_json};
use airq::{AirQualityService, RegionRouter, RegionSnapshot};
use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::ffi::OsStr;
use std::path::Path;
use tracing::Instrument;
use tracing::{error, info};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "airq")]
#[command(about = "Unified air-quality readings across regional providers", long_about = None)]
struct Cli {
    /// JSON config file; environment variables are used when omitted
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the latest snapshot for one region
    Query {
        /// Region name (e.g. "seoul", "busan")
        #[arg(value_name = "REGION")]
        region: String,

        /// Only show the station with exactly this name
        #[arg(short, long)]
        station: Option<String>,

        #[arg(short, long, value_enum, default_value_t = Format::Pretty)]
        format: Format,
    },
    /// List regions with an integrated provider
    Regions,
    /// Fetch every integrated region concurrently
    All {
        #[arg(short, long, value_enum, default_value_t = Format::Pretty)]
        format: Format,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Pretty,
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/airq.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("airq.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AirQualityConfig::load(path)?,
        None => AirQualityConfig::from_env()?,
    };
    let service = AirQualityService::new(RegionRouter::from_config(&config)?);

    match cli.command {
        Commands::Query {
            region,
            station,
            format,
        } => {
            let snapshot = service
                .get_air_quality(&region, station.as_deref())
                .await?;
            emit(&snapshot, format)?;
        }
        Commands::Regions => {
            for region in service.router().regions() {
                println!("{region}");
            }
        }
        Commands::All { format } => {
            fetch_all(&service, format).await?;
        }
    }

    Ok(())
}

fn emit(snapshot: &RegionSnapshot, format: Format) -> Result<()> {
    print_pretty(snapshot);
    match format {
        Format::Pretty => print!("{}", render_table(snapshot)),
        Format::Json => println!("{}", to_json(snapshot)?),
    }
    Ok(())
}

/// Fetches every registered region in parallel. A failing region is logged
/// and does not stop the others.
#[tracing::instrument(skip_all)]
async fn fetch_all(service: &AirQualityService, format: Format) -> Result<()> {
    let mut tasks = vec![];

    for adapter in service.router().adapters() {
        let adapter = adapter.clone();
        let span = tracing::info_span!("fetch_region", region = %adapter.region());

        let task = tokio::spawn(
            async move {
                let region = adapter.region();
                (region, adapter.fetch_snapshot().await)
            }
            .instrument(span),
        );
        tasks.push(task);
    }

    let mut failures = 0;
    for task in tasks {
        match task.await? {
            (_, Ok(snapshot)) => emit(&snapshot, format)?,
            (region, Err(e)) => {
                failures += 1;
                error!(region = %region, retryable = e.is_retryable(), error = %e, "Region fetch failed");
            }
        }
    }

    info!(failures, "Finished fetching all regions");
    Ok(())
}
