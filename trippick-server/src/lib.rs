//! HTTP server for the `TripPick` destination catalogue and swipe ledger.
//!
//! The `trippick serve` command seeds an in-memory store, either from the
//! built-in catalogue or from a JSON file, and exposes it over the
//! `/api/...` routes built by [`router`]. All state lives for the process
//! lifetime and is lost on shutdown.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

mod config;
mod error;
mod routes;
mod state;

pub use config::{DEFAULT_BIND, DEFAULT_PORT, ServeConfig};
pub use error::{ApiError, ServerError};
pub use routes::router;
pub use state::{AppState, load_catalogue};

use config::ServeArgs;

const DEFAULT_LOG_FILTER: &str = "info";

/// Run the `TripPick` CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`ServerError`] when arguments or configuration are invalid, the
/// catalogue cannot be loaded, or the listener fails.
pub fn run() -> Result<(), ServerError> {
    let cli = Cli::try_parse().map_err(ServerError::ArgumentParsing)?;
    match cli.command {
        Command::Serve(args) => {
            let config = args.into_config()?;
            config.validate_sources()?;
            init_logging();
            let runtime = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .map_err(ServerError::Runtime)?;
            runtime.block_on(serve(config))
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "trippick",
    about = "Travel destination discovery API",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve the destination and swipe API.
    Serve(ServeArgs),
}

/// Build the state `config` describes.
///
/// # Errors
/// Returns [`ServerError::ReadCatalogue`] or
/// [`ServerError::InvalidCatalogue`] when a configured catalogue cannot be
/// used.
pub fn build_state(config: &ServeConfig) -> Result<AppState, ServerError> {
    match &config.catalogue {
        Some(path) => {
            let drafts = load_catalogue(path)?;
            info!(%path, destinations = drafts.len(), "loaded catalogue");
            Ok(AppState::with_catalogue(drafts))
        }
        None => Ok(AppState::seeded()),
    }
}

/// Bind `config.addr` and serve until Ctrl+C or SIGTERM.
///
/// # Errors
/// Returns [`ServerError`] when the state cannot be built, the address
/// cannot be bound, or the server fails.
pub async fn serve(config: ServeConfig) -> Result<(), ServerError> {
    let state = build_state(&config)?;
    let app = router(state);

    info!("Binding to {}", config.addr);
    let listener = TcpListener::bind(config.addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: config.addr,
            source,
        })?;
    info!("Server running on {}", config.addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    info!("Server shut down");
    Ok(())
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    if let Err(err) = fmt().with_env_filter(filter).try_init() {
        tracing::warn!("logging already initialised: {err}");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(err) => {
                tracing::warn!("failed to listen for Ctrl+C: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(err) => {
                tracing::warn!("failed to listen for SIGTERM: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}

#[cfg(test)]
mod tests;
