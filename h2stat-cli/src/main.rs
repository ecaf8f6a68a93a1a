use clap::Parser;
use h2stat_common::{H2StatError, Result};
use h2stat_core::{analyze, write_report};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, IsTerminal};
use std::path::PathBuf;
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
use config::{OutputTarget, DEFAULT_LOG_LEVEL};

#[derive(Parser, Debug)]
#[command(name = "h2stat", about = "Produce summary statistics from an h2load log file.")]
struct Args {
    /// Path to the h2load log file which should be processed
    log_file: PathBuf,

    /// Path to the output CSV file (stdout when omitted or empty)
    #[arg(short, long)]
    output: Option<String>,
}

fn main() {
    let args = Args::parse();
    init_tracing();

    if let Err(e) = run(&args) {
        eprintln!("{e}");
        process::exit(1);
    }
}

/// Diagnostics go to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

fn run(args: &Args) -> Result<()> {
    let log = File::open(&args.log_file).map_err(|e| {
        H2StatError::Io(format!("{}: {e}", args.log_file.display()))
    })?;

    // Nothing is opened for writing until the whole log has been ingested.
    let rows = analyze(BufReader::new(log))?;

    match OutputTarget::from_arg(args.output.as_deref()) {
        OutputTarget::Stdout => {
            let stdout = io::stdout();
            write_report(&rows, stdout.lock())?;
        }
        OutputTarget::File(path) => {
            let file = File::create(&path)
                .map_err(|e| H2StatError::Io(format!("{}: {e}", path.display())))?;
            write_report(&rows, BufWriter::new(file))?;
        }
    }

    info!(
        log = %args.log_file.display(),
        rows = rows.len(),
        "report written"
    );
    Ok(())
}
