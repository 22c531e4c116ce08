use clap::Parser;
use color_eyre::eyre::{Result, WrapErr, bail};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use mediashelf_config::Settings;
use mediashelf_server::AppState;

/// Serves an HTML listing of a media directory over HTTP.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Root directory of the media library to serve.
    root: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    setup_logging();

    let args = Args::parse();
    let settings = Settings::load().await?;

    let root = tokio::fs::canonicalize(&args.root)
        .await
        .wrap_err_with(|| format!("failed to resolve root directory {}", args.root.display()))?;
    if !root.is_dir() {
        bail!("root path {} is not a directory", root.display());
    }

    let state = Arc::new(AppState::new(&settings, root.clone()));
    let app = mediashelf_server::router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], settings.port));
    info!("serving media library {} on http://{}", root.display(), addr);

    let listener = TcpListener::bind(addr)
        .await
        .wrap_err_with(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app).await.wrap_err("server error")?;

    Ok(())
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("mediashelf=info,tower_http=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
