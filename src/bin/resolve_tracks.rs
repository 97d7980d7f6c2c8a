//! Resolve carrier codes for a tracking export
//!
//! Reads a CSV with `order_id,track_number,carrier_code,title` columns and
//! writes it back with `canonical_code` and `api_code` appended.
//!
//! Usage:
//!   cargo run --release --bin resolve_tracks -- [OPTIONS]
//!
//! Options:
//!   --input <PATH>   Input CSV path (default: data/tracks.csv)
//!   --output <PATH>  Output CSV path (default: data/tracks_resolved.csv)

use anyhow::{Context, Result};
use carrier_sync::models::{ResolvedTrackRecord, TrackCsvRecord};
use carrier_sync::resolver::{canonical_carrier_code, carrier_code_for_api};
use clap::Parser;
use csv::{ReaderBuilder, WriterBuilder};
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::{info, warn};

/// Resolve tracking entries to external API carrier codes
#[derive(Parser, Debug)]
#[command(name = "resolve_tracks")]
#[command(about = "Resolve carrier codes for a tracking CSV export")]
struct Args {
    /// Input CSV path
    #[arg(long, default_value = "data/tracks.csv")]
    input: PathBuf,

    /// Output CSV path
    #[arg(long, default_value = "data/tracks_resolved.csv")]
    output: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .init();

    let args = Args::parse();

    info!("Reading CSV from {:?}", args.input);
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(&args.input)
        .with_context(|| format!("opening {}", args.input.display()))?;

    let mut writer = WriterBuilder::new()
        .has_headers(true)
        .from_path(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;

    let mut resolved_count = 0;
    let mut error_count = 0;
    let mut by_code: HashMap<&'static str, usize> = HashMap::new();

    for (line, result) in reader.deserialize::<TrackCsvRecord>().enumerate() {
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                // header is line 1
                warn!("Skipping row {}: {}", line + 2, e);
                error_count += 1;
                continue;
            }
        };

        let track = record.to_track();
        let api_code = carrier_code_for_api(&track);
        *by_code.entry(api_code).or_default() += 1;

        writer.serialize(ResolvedTrackRecord {
            canonical_code: canonical_carrier_code(&track),
            api_code,
            order_id: record.order_id,
            track_number: record.track_number,
            carrier_code: record.carrier_code,
            title: record.title,
        })?;
        resolved_count += 1;
    }

    writer.flush()?;

    info!(
        "Resolved {} tracks ({} skipped), wrote {:?}",
        resolved_count, error_count, args.output
    );

    let mut counts: Vec<_> = by_code.into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
    for (code, count) in counts.iter().take(10) {
        info!("  {:24} {:>8}", code, count);
    }

    Ok(())
}
