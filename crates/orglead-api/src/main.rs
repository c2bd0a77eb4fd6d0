//! OrgLead backend entry point.
//!
//! Binary name: `orglead`
//!
//! Loads configuration, initializes tracing, database and services, then
//! runs the requested command.

mod cli;
mod http;
mod state;

use clap::Parser;

use orglead_infra::config::{LoadedConfig, load_config, resolve_data_dir};
use orglead_observe::tracing_setup::{init_tracing, shutdown_tracing};

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let data_dir = resolve_data_dir();
    let LoadedConfig {
        mut config,
        warnings,
    } = load_config(cli.config.as_deref(), &data_dir).await;

    if let Some(filter) = cli.filter_override() {
        config.logging.filter = filter.to_string();
    }
    init_tracing(&config.logging)?;
    for warning in &warnings {
        tracing::warn!("{warning}");
    }

    let state = AppState::init(&config, &data_dir).await?;
    let db_pool = state.db_pool.clone();

    match cli.command {
        Commands::Migrate => {
            tracing::info!("database is up to date");
        }

        Commands::Serve { host, port } => {
            let host = host.unwrap_or(config.server.host.clone());
            let port = port.unwrap_or(config.server.port);

            let addr = format!("{host}:{port}");
            let listener = tokio::net::TcpListener::bind(&addr).await?;

            println!(
                "  {} OrgLead API listening on {}",
                console::style("⚡").bold(),
                console::style(format!("http://{addr}")).cyan()
            );
            println!(
                "  {} chat backend: {}",
                console::style("↪").dim(),
                console::style(&config.chat.base_url).cyan()
            );
            println!("  {}", console::style("Press Ctrl+C to stop").dim());

            let router = http::router::build_router(state);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            println!("\n  Server stopped.");
        }
    }

    db_pool.close().await;
    shutdown_tracing();
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
