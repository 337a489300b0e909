//! Validate the on-disk lookup datasets without starting the server.
//!
//! Loads the district and legislator rosters exactly the way the server
//! does and fails when either comes up empty. Configuration is loaded
//! and validated first, so a key must be present:
//!
//! Usage: `CL_AUTH__KEY=dev cargo run --bin data_check -- --districts data/kansas.csv`

#![deny(
    clippy::expect_used,
    clippy::panic,
    clippy::print_stdout,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used
)]

use clap::Parser;

use civiclookup_api::config::Config;
use civiclookup_api::kansas::districts::load_districts;
use civiclookup_api::legislators::loader::load_legislators;

/// Dataset sanity check for the lookup service
#[derive(Parser, Debug)]
#[command(name = "data_check")]
#[command(about = "Load the rosters and report what the server would see")]
struct Args {
    /// Alternate config file path (default: config.yaml)
    #[arg(long)]
    config: Option<String>,

    /// District roster CSV, overriding the configured path
    #[arg(long)]
    districts: Option<String>,

    /// Legislator roster YAML, overriding the configured path
    #[arg(long)]
    legislators: Option<String>,
}

fn main() -> Result<(), anyhow::Error> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .map_err(|e| anyhow::anyhow!("{e}"))?;

    std::env::set_var("RUST_LOG", &config.logging.level);
    tracing_subscriber::fmt::init();

    let districts_path = args.districts.unwrap_or(config.data.districts_path);
    let legislators_path = args.legislators.unwrap_or(config.data.legislators_path);

    let districts = load_districts(&districts_path);
    let legislators = load_legislators(&legislators_path);

    tracing::info!(
        districts = districts.len(),
        legislators = legislators.len(),
        "dataset check complete"
    );

    if districts.is_empty() {
        anyhow::bail!("district roster at {districts_path} produced an empty registry");
    }
    if legislators.is_empty() {
        anyhow::bail!("legislator roster at {legislators_path} produced an empty roster");
    }

    Ok(())
}
