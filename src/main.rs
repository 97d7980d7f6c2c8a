use anyhow::Result;
use carrier_sync::carriers::{self, SUPPORTED_CARRIERS};
use carrier_sync::models::Track;
use carrier_sync::resolver::{canonical_carrier_code, carrier_code_for_api};
use clap::{Parser, Subcommand};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "carrier_sync")]
#[command(about = "Map store shipment carriers to external API carrier codes")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve one carrier identifier and title
    Resolve {
        /// Carrier identifier as stored on the shipment (e.g. ups, custom)
        #[arg(long)]
        carrier: String,

        /// Free-text carrier title
        #[arg(long, default_value = "")]
        title: String,
    },
    /// List supported carrier codes
    List {
        /// Only show codes or titles containing this text
        #[arg(long)]
        filter: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()))
        .init();

    match Args::parse().command {
        Command::Resolve { carrier, title } => {
            let track = Track::new(&carrier, &title);
            let canonical = canonical_carrier_code(&track);
            let api_code = carrier_code_for_api(&track);

            info!("Resolved {:?} / {:?}", carrier, title);
            println!("Canonical code: {}", canonical);
            println!(
                "API code:       {} ({})",
                api_code,
                carriers::carrier_title(api_code).unwrap_or_default()
            );
        }
        Command::List { filter } => {
            let filter = filter.map(|f| f.to_lowercase());
            let mut shown = 0;
            for (code, title) in SUPPORTED_CARRIERS {
                if let Some(f) = &filter {
                    if !code.to_lowercase().contains(f) && !title.to_lowercase().contains(f) {
                        continue;
                    }
                }
                println!("  {:40} {}", code, title);
                shown += 1;
            }
            println!("\n{} of {} carriers", shown, SUPPORTED_CARRIERS.len());
        }
    }

    Ok(())
}
