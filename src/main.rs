mod app;
mod cli;
mod config;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, Tool};
use config::Config;
use mergington_enrollment::ActivityStore;
use tokio::{net::TcpListener, signal, task::JoinSet};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if cli.health_check {
        return run_health_check();
    }

    match cli.command {
        Some(Command::Tools { tool }) => run_tools(tool),
        _ => run_service().await,
    }
}

fn run_tools(tool: Tool) -> Result<()> {
    info!("Executing tool: {:?}", tool);

    match tool {
        Tool::Catalog => {
            let catalog = ActivityStore::seeded().list_activities();
            println!("{}", serde_json::to_string_pretty(&catalog)?);
        }
    }

    Ok(())
}

fn run_health_check() -> Result<()> {
    // Ensures config loads, the UI assets are present and the catalog builds.
    let config = Config::try_from_env()?;
    anyhow::ensure!(
        config.static_dir.join("index.html").is_file(),
        "No index.html under static directory {}",
        config.static_dir.display()
    );
    let store = ActivityStore::seeded();
    anyhow::ensure!(!store.is_empty(), "Seed catalog is empty");
    info!("Health check successful.");
    Ok(())
}

async fn run_service() -> Result<()> {
    info!("Mergington High School activities service");

    info!("Loading configuration from environment variables");
    let config = Config::try_from_env()?;

    let store = ActivityStore::seeded();
    info!("Loaded {} activities from the seed catalog", store.len());

    let app = app::app(store, &config.static_dir);
    let listener = TcpListener::bind(&config.bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_address))?;
    info!("Listening on {}", listener.local_addr()?);

    let mut services = JoinSet::new();

    services.spawn(async move {
        info!("HTTP server starting.");
        if let Err(e) = axum::serve(listener, app).await {
            error!("HTTP server failed: {}", e);
        }
        info!("HTTP server finished.");
    });

    // --- Run until shutdown ---
    info!("Activities service is running. Press Ctrl+C to shutdown.");
    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Shutdown signal received.");
        },
        Some(res) = services.join_next() => {
            error!("A service task exited early: {:?}", res);
        },
    }

    info!("Shutting down...");

    // Aborting drops the server future, which closes the listener.
    services.abort_all();
    while (services.join_next().await).is_some() {}

    info!("Activities service shut down gracefully.");
    Ok(())
}
