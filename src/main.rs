//! vdisplay-bridge - replay host display and input traces through the bridge
//!
//! Entry point for the bridge binary.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use vdisplay_bridge::backend::{RecordingBackend, TracingBackend};
use vdisplay_bridge::config::Config;
use vdisplay_bridge::trace::{replay, Trace};
use vdisplay_bridge::utils::format_user_error;
use vdisplay_bridge::DisplayBridge;

const LOG_FILE_NAME: &str = "vdisplay-bridge.log";

/// Where backend calls go
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Emit {
    /// Log every backend call through tracing
    Log,
    /// Print every backend call as one JSON line on stdout
    Json,
}

/// Command-line arguments for vdisplay-bridge
#[derive(Parser, Debug)]
#[command(name = "vdisplay-bridge")]
#[command(version, about = "Virtual display input bridge", long_about = None)]
pub struct Args {
    /// Configuration file path (default: $XDG_CONFIG_HOME/vdisplay-bridge/config.toml)
    #[arg(short, long, env = "VDISPLAY_BRIDGE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Host event trace to replay (JSON)
    #[arg(short, long)]
    pub trace: PathBuf,

    /// Verbose logging (can be specified multiple times)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Log format (json|pretty|compact)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Write logs to file (in addition to stderr)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Apply steps back to back, ignoring their timestamps
    #[arg(long)]
    pub no_timing: bool,

    /// Replay speed multiplier
    #[arg(long)]
    pub speed: Option<f64>,

    /// Backend output
    #[arg(long, value_enum, default_value_t = Emit::Log)]
    pub emit: Emit,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if let Err(e) = run(args).await {
        eprintln!("{}", format_user_error(&e));
        return Err(e);
    }
    Ok(())
}

async fn run(args: Args) -> Result<()> {
    let config = Config::load_or_default(args.config.as_deref())?.with_overrides(
        args.log_format.clone(),
        args.no_timing,
        args.speed,
    );
    config.validate()?;

    let _guard = init_logging(&args, &config)?;

    info!("════════════════════════════════════════════════════════");
    info!("  vdisplay-bridge v{}", env!("CARGO_PKG_VERSION"));
    info!("  Built: {} {}", env!("BUILD_DATE"), env!("BUILD_TIME"));
    info!("  Commit: {}", env!("GIT_HASH"));
    info!("  Profile: {}", if cfg!(debug_assertions) { "debug" } else { "release" });
    info!("════════════════════════════════════════════════════════");
    tracing::debug!("Config: {:?}", config);

    let trace = Trace::load(&args.trace)?;
    if config.replay.honor_timestamps {
        match trace.scaled_duration(config.replay.speed) {
            Some(span) => info!("Paced replay will take {:?}", span),
            None => warn!(
                "Trace offsets overflow at {}x; late steps will run without delay",
                config.replay.speed
            ),
        }
    }

    let (bridge, summary) = match args.emit {
        Emit::Log => {
            let backend = Arc::new(TracingBackend::new());
            let bridge = DisplayBridge::new(config.input.clone(), backend.clone(), backend);
            let summary = replay(&trace, &bridge, &config.replay).await;
            (bridge, summary)
        }
        Emit::Json => {
            let backend = Arc::new(RecordingBackend::new());
            let bridge = DisplayBridge::new(config.input.clone(), backend.clone(), backend.clone());
            let summary = replay(&trace, &bridge, &config.replay).await;
            for call in backend.take() {
                println!(
                    "{}",
                    serde_json::to_string(&call).context("Failed to encode backend call")?
                );
            }
            (bridge, summary)
        }
    };

    info!(
        "Applied {} steps: {} forwarded, {} dropped, {} filtered",
        summary.steps, summary.forwarded, summary.dropped, summary.filtered
    );
    println!(
        "{}",
        serde_json::to_string(&summary).context("Failed to encode replay summary")?
    );
    println!(
        "{}",
        bridge
            .metrics()
            .export_json()
            .context("Failed to encode metrics")?
    );
    Ok(())
}

fn init_logging(args: &Args, config: &Config) -> Result<Option<WorkerGuard>> {
    let log_level = match args.verbose {
        0 => config.logging.level.as_str(),
        1 => "debug",
        _ => "trace",
    };

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(format!(
            "vdisplay_bridge={level},warn",
            level = log_level
        ))
    });

    let json = config.logging.format == "json";

    // stdout carries --emit json output, so console logs go to stderr
    let console = match config.logging.format.as_str() {
        "json" => tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .boxed(),
        "compact" => tracing_subscriber::fmt::layer()
            .compact()
            .with_writer(std::io::stderr)
            .boxed(),
        _ => tracing_subscriber::fmt::layer()
            .pretty()
            .with_writer(std::io::stderr)
            .boxed(),
    };

    let target = match (&args.log_file, &config.logging.log_dir) {
        (Some(path), _) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("."));
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| LOG_FILE_NAME.to_string());
            Some((dir, name))
        }
        (None, Some(dir)) => Some((dir.clone(), LOG_FILE_NAME.to_string())),
        (None, None) => None,
    };

    let (file_layer, guard, file_path) = match target {
        Some((dir, name)) => {
            let appender = RollingFileAppender::builder()
                .rotation(Rotation::NEVER)
                .filename_prefix(&name)
                .build(&dir)
                .with_context(|| {
                    format!("Failed to open log file in log directory {}", dir.display())
                })?;
            let (writer, guard) = tracing_appender::non_blocking(appender);

            let layer = if json {
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_ansi(false)
                    .boxed()
            } else {
                tracing_subscriber::fmt::layer()
                    .with_writer(writer)
                    .with_ansi(false)
                    .boxed()
            };
            (Some(layer), Some(guard), Some(dir.join(name)))
        }
        None => (None, None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console)
        .with(file_layer)
        .init();

    if let Some(path) = file_path {
        info!("Logging to file: {}", path.display());
    }

    Ok(guard)
}
