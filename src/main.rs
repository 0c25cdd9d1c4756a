//! quotidian - Inspirational quote generation service
//!
//! Entry point for the quotidian HTTP server.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use quotidian::api;
use quotidian::config::Settings;
use quotidian::llm::LlamaCppClient;

/// quotidian - generate and collect inspirational quotes
#[derive(Parser, Debug)]
#[command(name = "quotidian")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to an alternate configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listen address (e.g. 127.0.0.1:8000)
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();

    let mut settings = match &cli.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };

    if let Some(bind) = cli.bind {
        settings.server.bind = bind;
    }

    settings.ensure_dirs()?;

    let backend =
        LlamaCppClient::from_settings(&settings).context("Failed to build completion client")?;

    let router = api::create_router(Arc::new(settings.clone()), Arc::new(backend));

    let listener = tokio::net::TcpListener::bind(&settings.server.bind)
        .await
        .with_context(|| format!("Failed to bind server to {}", settings.server.bind))?;

    info!("Listening on http://{}", settings.server.bind);
    info!("Completion backend: {}", settings.llm.base_url);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to listen for Ctrl+C");
    info!("Shutting down...");
}
