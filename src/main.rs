use anyhow::{Context, Result};
use clap::Parser;
use std::{
    io::{self, Write},
    path::PathBuf,
    process::exit,
};
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, EnvFilter};
use udprn_overlap::{run, OsSource, HEADER_NAME};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Count udprn values in two CSV files and report how much they overlap",
    after_help = "Paths starting with '-' must follow a '--' separator."
)]
struct Args {
    /// First CSV file
    file1: PathBuf,

    /// Second CSV file
    file2: PathBuf,

    /// Further paths are accepted but ignored
    #[arg(hide = true)]
    extra: Vec<PathBuf>,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let env = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(args.verbose)));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = compare(&args, &mut io::stdout().lock()) {
        error!("{:#}", e);
        exit(1);
    }
}

/// Log level used when RUST_LOG is unset. Successful runs stay quiet on stderr.
fn default_level(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Build the report for both files and write it to `out`.
///
/// Nothing is written unless both files were read successfully.
fn compare<W: Write>(args: &Args, out: &mut W) -> Result<()> {
    if !args.extra.is_empty() {
        warn!(ignored = args.extra.len(), "only the first two paths are compared");
    }
    info!(file1 = %args.file1.display(), file2 = %args.file2.display(), "comparing");

    let report = run(&OsSource, &args.file1, &args.file2, HEADER_NAME).with_context(|| {
        format!(
            "comparing {} and {}",
            args.file1.display(),
            args.file2.display()
        )
    })?;
    write!(out, "{}", report).context("writing report")?;
    out.flush().context("flushing report")?;
    Ok(())
}
