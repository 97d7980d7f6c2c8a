//! Build a purchase event payload from an order snapshot
//!
//! Usage:
//!   cargo run --release --bin build_payload -- --input order.json

use anyhow::{bail, Context, Result};
use carrier_sync::custom_data::conversion_payload;
use carrier_sync::models::OrderSnapshot;
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "build_payload")]
#[command(about = "Hash customer match keys and build the purchase payload for an order")]
struct Args {
    /// Order snapshot JSON
    #[arg(long)]
    input: PathBuf,

    /// Write payload here instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let raw = fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let order: OrderSnapshot = serde_json::from_str(&raw).context("parsing order snapshot")?;

    let Some(payload) = conversion_payload(Some(&order)) else {
        bail!("no payload for order");
    };
    info!(
        "Order {:?}: {} match keys, {} line items",
        order.id,
        payload.user_data.len(),
        payload.custom_data.contents.len()
    );

    let json = serde_json::to_string_pretty(&payload)?;
    match args.output {
        Some(path) => {
            fs::write(&path, json).with_context(|| format!("writing {}", path.display()))?;
            info!("Wrote payload to {:?}", path);
        }
        None => println!("{}", json),
    }

    Ok(())
}
