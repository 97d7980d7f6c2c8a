//! REST API Server for carrier sync
//!
//! Usage:
//!   ./target/release/api_server [options]
//!
//! Options:
//!   --port PORT       Port to listen on (default: 8080)
//!
//! REST endpoints:
//!   GET  /api/v1/health                 - Health check
//!   GET  /api/v1/carriers               - Supported carriers (with optional ?limit=N)
//!   GET  /api/v1/carriers/:code         - Single carrier
//!   POST /api/v1/carriers/resolve       - Resolve one tracking entry
//!   POST /api/v1/carriers/resolve/batch - Resolve many tracking entries
//!   GET  /api/v1/regions/:id            - Region code for a region id
//!   POST /api/v1/user-data/order        - Purchase payload for an order snapshot
//!   POST /api/v1/user-data/session      - Match keys for a customer snapshot

use anyhow::Result;
use carrier_sync::api::{create_rest_router, SyncService};
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "api_server")]
#[command(about = "Serve carrier resolution and conversion payloads over REST")]
struct Args {
    /// Port to listen on
    #[arg(long, default_value = "8080")]
    port: u16,
}

fn print_banner(port: u16) {
    println!("============================================================");
    println!("              CARRIER SYNC API SERVER");
    println!("============================================================");
    println!();
    println!("  Port:     {}", port);
    println!("  REST:     http://localhost:{}/api/v1/", port);
    println!();
    println!("REST Endpoints:");
    println!("  GET  /api/v1/health                 Health check");
    println!("  GET  /api/v1/carriers               Supported carriers");
    println!("  GET  /api/v1/carriers/:code         Carrier lookup");
    println!("  POST /api/v1/carriers/resolve       Resolve track");
    println!("  POST /api/v1/carriers/resolve/batch Resolve tracks");
    println!("  GET  /api/v1/regions/:id            Region code");
    println!("  POST /api/v1/user-data/order        Order payload");
    println!("  POST /api/v1/user-data/session      Session match keys");
    println!();
    println!("============================================================");
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .init();

    let args = Args::parse();
    print_banner(args.port);

    let service = Arc::new(SyncService::default());
    let app = create_rest_router(service);

    let addr: SocketAddr = format!("0.0.0.0:{}", args.port).parse()?;
    tracing::info!("Starting REST server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
