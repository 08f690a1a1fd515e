use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use drive_tracker::{render, DriverTracker, OutputFormat, TrackerConfig};

/// Summarize driving history from Driver/Trip command files
#[derive(Parser, Debug)]
#[command(name = "drive-tracker")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the file containing driver data (reads stdin when omitted)
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// JSON config file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Report format (overrides config)
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Slowest trip speed (mph) that still counts (overrides config)
    #[arg(long, value_name = "MPH")]
    min_speed: Option<f64>,

    /// Fastest trip speed (mph) that still counts (overrides config)
    #[arg(long, value_name = "MPH")]
    max_speed: Option<f64>,

    /// Enable info logging
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let args = Args::parse();
    init_tracing(&args);

    if let Err(err) = run(&args) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

/// Logs go to stderr: --debug > --verbose > RUST_LOG > "warn"
fn init_tracing(args: &Args) {
    let filter = if args.debug {
        EnvFilter::new("debug")
    } else if args.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn resolve_config(args: &Args) -> Result<TrackerConfig> {
    let mut config = match &args.config {
        Some(path) => TrackerConfig::from_file(path)?,
        None => TrackerConfig::default(),
    };

    if let Some(format) = args.format {
        config.format = format;
    }
    if let Some(min) = args.min_speed {
        config.min_average_speed = min;
    }
    if let Some(max) = args.max_speed {
        config.max_average_speed = max;
    }

    config.validate()?;
    Ok(config)
}

fn run(args: &Args) -> Result<()> {
    let config = resolve_config(args)?;
    let mut tracker = DriverTracker::new(config.validator());

    let stats = match &args.file {
        Some(path) => {
            info!(file = %path.display(), "loading");
            let file = File::open(path).with_context(|| format!("Failed to open file: {}", path.display()))?;
            tracker.process_reader(BufReader::new(file))?
        }
        None => {
            info!("loading from stdin");
            tracker.process_reader(io::stdin().lock())?
        }
    };
    info!(?stats, "processing complete");

    let reports = tracker.summarize();
    render(&reports, config.format, io::stdout().lock())?;

    Ok(())
}
