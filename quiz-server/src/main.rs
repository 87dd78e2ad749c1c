use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

use quiz_core::{FallbackProvider, QuestionProvider, StaticProvider};
use quiz_server::{config::Config, create_routes, gemini::GeminiClient};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting Carnaval Quiz question service...");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    let provider: Arc<dyn QuestionProvider> = match config.gemini.clone() {
        Some(gemini) => {
            info!("Generating questions with model {}", gemini.model);
            match GeminiClient::new(gemini) {
                Ok(client) => Arc::new(FallbackProvider::new(client)),
                Err(e) => {
                    error!("Failed to build question generator client: {}", e);
                    std::process::exit(1);
                }
            }
        }
        None => {
            info!("GEMINI_API_KEY not set - serving built-in questions only");
            Arc::new(StaticProvider)
        }
    };

    let routes = create_routes(provider);

    info!("Server starting on {}", config.addr());

    let (addr, server) =
        match warp::serve(routes).try_bind_with_graceful_shutdown(config.addr(), shutdown_signal()) {
            Ok(bound) => bound,
            Err(e) => {
                error!("Failed to bind {}: {}", config.addr(), e);
                std::process::exit(1);
            }
        };

    info!(
        "Server started successfully on {}. Press Ctrl+C to stop.",
        addr
    );
    server.await;
    info!("Server shutdown complete.");
}

async fn shutdown_signal() {
    // Wait for SIGINT (Ctrl+C) or SIGTERM
    #[cfg(unix)]
    {
        use signal::unix::{SignalKind, signal};

        let (mut sigint, mut sigterm) =
            match (signal(SignalKind::interrupt()), signal(SignalKind::terminate())) {
                (Ok(sigint), Ok(sigterm)) => (sigint, sigterm),
                _ => {
                    error!("Failed to install signal handlers, falling back to Ctrl+C");
                    wait_for_ctrl_c().await;
                    return;
                }
            };

        tokio::select! {
            _ = sigint.recv() => {
                info!("Received SIGINT, shutting down gracefully...");
            }
            _ = sigterm.recv() => {
                info!("Received SIGTERM, shutting down gracefully...");
            }
        }
    }

    #[cfg(not(unix))]
    wait_for_ctrl_c().await;
}

async fn wait_for_ctrl_c() {
    match signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl+C, shutting down gracefully..."),
        Err(e) => {
            error!("Failed to listen for ctrl+c: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
