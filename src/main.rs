use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use orgstats::analyze;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Per-country descriptive statistics over an organizations CSV"
)]
struct Args {
    /// Path to the comma-delimited dataset
    csv: PathBuf,
    /// Country the queries are scoped to
    country: String,
    /// Emit the report as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    // ─── 2) run the analysis once ────────────────────────────────────
    let args = Args::parse();
    info!(csv = %args.csv.display(), country = %args.country, "startup");
    let report = analyze(&args.csv, &args.country)?;

    // ─── 3) print ────────────────────────────────────────────────────
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }
    Ok(())
}
