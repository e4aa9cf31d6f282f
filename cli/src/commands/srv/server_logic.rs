//! # CampusBot HTTP Server Implementation
//!
//! File: cli/src/commands/srv/server_logic.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! This module implements the HTTP front end for the `campusbot srv` command:
//! - `GET /get_response?message=<text>` answers with `{"response": "<text>"}`
//! - `GET /health` answers with `ok`
//! - Port availability checking with automatic fallback
//! - Optional permissive CORS
//! - Graceful shutdown handling
//!
//! ## Architecture
//!
//! The server implementation uses Axum and follows these steps:
//! 1. Build one `Assistant` and share it through `AppState` behind an `Arc`
//! 2. Find an available port if the requested one is in use
//! 3. Start the server with graceful shutdown handlers
//!
//! Every request is answered through `assistant::boundary::respond`, so the
//! handler always returns `200` with a JSON body, including for empty,
//! over-long and unanswerable messages.
//!
use super::config::ServerConfig;
use crate::assistant::{boundary, Assistant};
use crate::core::error::Result;
use anyhow::Context;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, warn, Level};

/// Shared state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub assistant: Arc<Assistant>,
    pub max_input_length: usize,
}

/// Query string of `/get_response`. A missing `message` is treated as empty.
#[derive(Deserialize, Debug)]
pub struct QueryParams {
    #[serde(default)]
    pub message: String,
}

/// JSON body of `/get_response`.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct ChatResponse {
    pub response: String,
}

/// # Run HTTP Server (`run_server`)
///
/// Binds to the first free port at or after `config.port` and serves until
/// Ctrl+C or SIGTERM.
///
/// ## Errors
///
/// This function can return errors if:
/// - An available port cannot be found within the specified attempts.
/// - Binding the `TcpListener` to the chosen address fails (e.g., permissions).
/// - The Axum server itself encounters a fatal error during operation.
pub async fn run_server(config: ServerConfig, assistant: Assistant) -> Result<()> {
    let max_port_attempts = 10;
    let addr = find_available_port(config.host, config.port, max_port_attempts).await?;

    let institution = assistant.knowledge().institution.name.clone();
    let state = AppState {
        assistant: Arc::new(assistant),
        max_input_length: config.max_input_length,
    };
    let app = create_app(state, config.enable_cors);

    println!("\n=================================================================");
    println!("🏫 Answering for:     {}", institution);
    println!("🌐 Local URL:         http://{}/get_response?message=hello", addr);
    println!("🩺 Health check:      http://{}/health", addr);
    println!("🔒 CORS enabled:      {}", config.enable_cors);
    println!("📏 Max input length:  {} characters", config.max_input_length);
    println!("=================================================================\n");

    info!("Starting server on {}", addr);
    println!("Server starting! Press Ctrl+C to stop.");

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind TCP listener to address {}", addr))?;

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    println!("\nServer shutdown complete.");
    Ok(())
}

/// # Handle Shutdown Signal (`shutdown_signal`)
///
/// Resolves when Ctrl+C or, on Unix, SIGTERM is received. A handler that
/// cannot be installed leaves its branch pending forever.
async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, initiating graceful shutdown..."),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
                info!("Received SIGTERM, initiating graceful shutdown...");
            }
            Err(e) => {
                error!(
                    "Failed to install SIGTERM handler: {}. Shutdown on SIGTERM might not work.",
                    e
                );
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

/// # Find Available Port (`find_available_port`)
///
/// Tries `start_port` and up to `max_attempts - 1` following ports, returning
/// the first address a listener could bind to.
async fn find_available_port(
    req_host: IpAddr,
    start_port: u16,
    max_attempts: u8,
) -> Result<SocketAddr> {
    let mut current_port = start_port;

    for attempt in 0..max_attempts {
        let addr = SocketAddr::new(req_host, current_port);

        match TcpListener::bind(addr).await {
            Ok(listener) => {
                drop(listener);
                if attempt > 0 {
                    info!(
                        "Port {} was unavailable, successfully bound to available port {}.",
                        start_port, current_port
                    );
                }
                return Ok(addr);
            }
            Err(e) => {
                warn!(
                    "Attempt {}: Port {} on host {} is unavailable (Error: {}). Trying next port...",
                    attempt + 1,
                    current_port,
                    req_host,
                    e
                );
                current_port = match current_port.checked_add(1) {
                    Some(next) => next,
                    None => break,
                };
            }
        }
    }

    anyhow::bail!(
        "Could not find an available port on host {} starting from port {} after trying {} ports.",
        req_host,
        start_port,
        max_attempts
    )
}

/// # Create Axum Application (`create_app`)
///
/// Builds the router with both routes, request tracing and, when enabled,
/// permissive CORS.
pub fn create_app(state: AppState, enable_cors: bool) -> Router {
    let cors_layer = if enable_cors {
        info!("CORS middleware enabled (permissive).");
        CorsLayer::permissive()
    } else {
        info!("CORS middleware disabled.");
        CorsLayer::new()
    };

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::default().include_headers(true))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/get_response", get(get_response))
        .route("/health", get(health))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(trace_layer) // Apply tracing first.
                .layer(cors_layer),
        )
}

async fn get_response(
    State(state): State<AppState>,
    Query(params): Query<QueryParams>,
) -> Json<ChatResponse> {
    let response = boundary::respond(&state.assistant, &params.message, state.max_input_length);
    Json(ChatResponse { response })
}

async fn health() -> &'static str {
    "ok"
}
