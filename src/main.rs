//! repo-shelf - serve a directory of git repositories over HTTP
//!
//! # Usage
//! ```bash
//! repo-shelf                                  # Serve ./repositories on 127.0.0.1:3001
//! repo-shelf --repos-dir /srv/git --port 8080 # Custom store root and port
//! RUST_LOG=repo_shelf=debug repo-shelf        # Verbose logging
//! ```

mod error;
mod git;
mod models;
mod routes;

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use clap::Parser;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use git::RepositoryStore;

/// Browse and manage a directory of bare git repositories
#[derive(Parser)]
#[command(name = "repo-shelf")]
#[command(about = "Read-only HTTP access to a directory of git repositories", long_about = None)]
struct Cli {
    /// Directory holding one bare repository per subdirectory
    #[arg(short, long, value_name = "DIR", default_value = "./repositories")]
    repos_dir: PathBuf,

    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to run the server on
    #[arg(short, long, default_value = "3001")]
    port: u16,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let store = RepositoryStore::new(&cli.repos_dir);
    if let Err(e) = store.ensure_root() {
        eprintln!("✗ Failed to create repository directory: {}", e);
        eprintln!("  Path: {}", cli.repos_dir.display());
        std::process::exit(1);
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .merge(routes::create_router(Arc::new(store)))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", cli.host, cli.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("✗ Failed to bind to {}: {}", addr, e);
            eprintln!("  Try a different port with --port <PORT>");
            std::process::exit(1);
        }
    };

    let repos_dir = std::fs::canonicalize(&cli.repos_dir).unwrap_or_else(|_| cli.repos_dir.clone());
    tracing::info!("Serving {} on http://{}", repos_dir.display(), addr);
    println!("  Repositories: {}", repos_dir.display());
    println!("  Server:       http://{}", addr);
    println!("  Press Ctrl+C to stop");

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
        }
        println!("\n  Shutting down...");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
