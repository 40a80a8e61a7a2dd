//! HTTP server setup and request dispatch.
//!
//! # Responsibilities
//! - Create the Axum Router with the echo handler on every path
//! - Wire up middleware (tracing, request timeout)
//! - Classify each request and run the selected echo mode
//! - Serve until a signal or the shutdown broadcast fires

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};
use tracing::Instrument;

use crate::config::EchoConfig;
use crate::http::request::EchoQuery;
use crate::http::response::{self, EchoReply};
use crate::lifecycle::signals::shutdown_signal;
use crate::routing::{classify, EchoMode};
use crate::sequence::SequenceCursor;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub cursor: Arc<SequenceCursor>,
    pub max_body_bytes: usize,
}

/// HTTP server for the echo endpoints.
pub struct EchoServer {
    router: Router,
    config: EchoConfig,
    cursor: Arc<SequenceCursor>,
}

impl EchoServer {
    /// Create a new server with a fresh status-code cursor.
    pub fn new(config: EchoConfig) -> Self {
        Self::with_cursor(config, Arc::new(SequenceCursor::new()))
    }

    /// Create a server that shares an existing cursor.
    pub fn with_cursor(config: EchoConfig, cursor: Arc<SequenceCursor>) -> Self {
        let state = AppState {
            cursor: cursor.clone(),
            max_body_bytes: config.limits.max_body_bytes,
        };
        let router = Self::build_router(&config, state);
        Self {
            router,
            config,
            cursor,
        }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &EchoConfig, state: AppState) -> Router {
        Router::new()
            .route("/", any(echo_handler))
            .route("/{*path}", any(echo_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(TraceLayer::new_for_http())
    }

    /// The fully layered router, for embedding or driving in tests.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn cursor(&self) -> &Arc<SequenceCursor> {
        &self.cursor
    }

    pub fn config(&self) -> &EchoConfig {
        &self.config
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Returns after a graceful drain once Ctrl+C / SIGTERM arrives or
    /// `shutdown` receives a message.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "Server starting on {}", addr);

        axum::serve(listener, self.router)
            .with_graceful_shutdown(wait_for_shutdown(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

async fn wait_for_shutdown(mut shutdown: broadcast::Receiver<()>) {
    tokio::select! {
        () = shutdown_signal() => {},
        _ = shutdown.recv() => {
            tracing::info!("Shutdown requested");
        },
    }
}

/// Single handler behind every path and method.
async fn echo_handler(State(state): State<AppState>, request: Request<Body>) -> EchoReply {
    let query = EchoQuery::from_uri(request.uri());
    let mode = classify(&query, request.headers());

    let span = tracing::info_span!(
        "echo_request",
        method = %request.method(),
        path = %request.uri().path(),
        mode = mode.name(),
    );

    dispatch(&state, mode, request).instrument(span).await
}

async fn dispatch(state: &AppState, mode: EchoMode, request: Request<Body>) -> EchoReply {
    match mode {
        EchoMode::StatusSequence { raw, reinit } => {
            resolve_status_sequence(&state.cursor, &raw, reinit)
        }
        EchoMode::Time => {
            let reply = response::current_time(&chrono::Local::now());
            tracing::info!("Echoed current time");
            reply
        }
        EchoMode::Headers => {
            let reply = response::headers(request.headers());
            tracing::info!("Echoed request headers");
            reply
        }
        EchoMode::Body => {
            match axum::body::to_bytes(request.into_body(), state.max_body_bytes).await {
                Ok(bytes) => {
                    let reply = response::body(bytes);
                    tracing::info!("Processed request to echo body");
                    reply
                }
                Err(e) => {
                    tracing::error!(error = %e, "Failed to read the request body");
                    response::internal_error()
                }
            }
        }
        EchoMode::Welcome => {
            tracing::info!("Served the default welcome response");
            response::welcome()
        }
    }
}

fn resolve_status_sequence(cursor: &SequenceCursor, raw: &str, reinit: bool) -> EchoReply {
    let _span = tracing::info_span!("status_sequence", reinit).entered();

    let Some(code) = cursor.resolve_next(raw, reinit) else {
        tracing::error!(sequence = %raw, "Invalid status code sequence");
        return response::invalid_sequence();
    };

    match response::status_code(code) {
        Ok(reply) => {
            tracing::info!(code, "Responded with HTTP status code: {}", code);
            reply
        }
        Err(e) => {
            tracing::error!(
                code,
                error = %e,
                "Sequence code cannot be served as a response status"
            );
            response::internal_error()
        }
    }
}
