//! Ringcraft CLI and REST API entry point.
//!
//! Binary name: `ringcraft`
//!
//! Parses CLI arguments, initializes the database and service
//! configuration, then dispatches to the command handler or starts the
//! REST API server.

mod cli;
mod http;
mod state;

use clap::Parser;

use cli::{Cli, Commands, ConfigCommands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,ringcraft=debug",
        _ => "trace",
    };
    if let Err(err) = ringcraft_observe::tracing_setup::init_tracing(filter, cli.json) {
        eprintln!("failed to initialize tracing: {err}");
    }

    let state = AppState::init().await?;

    match cli.command {
        Commands::Config { command } => match command {
            ConfigCommands::Show => {
                cli::config::show_config(&state, cli.json).await?;
            }
            ConfigCommands::Set { feature, handle } => {
                cli::config::set_feature(&state, feature, handle, cli.json).await?;
            }
        },

        Commands::Serve { port, host } => {
            let host = host.unwrap_or_else(|| state.service_config.host.clone());
            let port = port.unwrap_or(state.service_config.port);
            let addr = format!("{host}:{port}");
            let listener = tokio::net::TcpListener::bind(&addr).await?;

            println!(
                "  {} Ringcraft API listening on {}",
                console::style("⚡").bold(),
                console::style(format!("http://{addr}")).cyan()
            );
            println!("  {}", console::style("Press Ctrl+C to stop").dim());

            let router = http::router::build_router(state);

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            println!("\n  Server stopped.");
        }
    }

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
