use std::collections::HashSet;
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use label_print::server::build_app_router;
use label_print::server::state::AppState;
use label_print::sheet;

/// Serve a web form that prints product name labels from a spreadsheet.
#[derive(Parser, Debug)]
#[command(name = "label_print")]
#[command(about = "Print product name labels from a spreadsheet.", long_about = None)]
struct Args {
    /// Address to bind the server to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 8080)]
    port: u16,

    /// Local spreadsheet (csv, xlsx or xls) to preload products from
    #[arg(long)]
    products: Option<PathBuf>,

    /// Shared Google Sheet link (or any CSV URL) to preload products from
    #[arg(long)]
    sheet_url: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("label_print=debug,tower_http=debug"))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("label_print=info,tower_http=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Load the startup product list from the configured sources.
///
/// Both sources may be given; their lists are concatenated and deduplicated
/// preserving order.
async fn preload_products(args: &Args) -> Result<Vec<String>> {
    let mut products = Vec::new();

    if let Some(path) = &args.products {
        let loaded = sheet::load_products_from_path(path)
            .with_context(|| format!("Failed to load products from {:?}", path))?;
        tracing::info!(count = loaded.len(), path = %path.display(), "Preloaded products from file");
        products.extend(loaded);
    }

    if let Some(url) = &args.sheet_url {
        let fetched = sheet::fetch_products_from_url(url)
            .await
            .with_context(|| format!("Failed to fetch products from {}", url))?;
        tracing::info!(count = fetched.len(), "Preloaded products from sheet URL");
        products.extend(fetched);
    }

    let mut seen = HashSet::new();
    products.retain(|name| seen.insert(name.clone()));
    Ok(products)
}

async fn run(args: Args) -> Result<()> {
    let products = preload_products(&args).await?;
    let state = AppState::new(products);
    let app = build_app_router(state);

    let host = args
        .host
        .parse()
        .with_context(|| format!("Invalid host address: {}", args.host))?;
    let addr = SocketAddr::new(host, args.port);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    tracing::info!(%addr, "Starting server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Graceful shutdown complete");
    Ok(())
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server shuts
/// down cleanly whether stopped interactively or by a process manager.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(args).await {
        eprintln!("Error: {}", e);
        for cause in e.chain().skip(1) {
            eprintln!("Caused by: {}", cause);
        }
        std::process::exit(1);
    }
}
