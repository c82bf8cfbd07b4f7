//! Bookshelf HTTP Server - REST backend for the book inventory catalog.
//!
//! This binary seeds the in-memory catalog and serves the `/books` routes
//! from `bookshelf-http` until it receives a shutdown signal.

use anyhow::Result;
use bookshelf_core::Catalog;
use bookshelf_http::server;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "bookshelf-http")]
#[command(about = "REST API server for the Bookshelf catalog")]
struct Args {
    /// Port to listen on (0 = auto-assign)
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .compact()
        .init();

    info!("Starting Bookshelf HTTP Server");

    // Seed the catalog and start the server
    let catalog = Catalog::with_seed();
    let addr = server::start_server(catalog, &args.host, args.port).await?;

    info!("Server running on {}", addr);

    // Wait for shutdown signal
    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received, exiting");

    Ok(())
}
