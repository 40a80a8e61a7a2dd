//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the global `tracing` subscriber once at startup
//! - Pick JSON or plain-text output from config
//! - Attach the OpenTelemetry layer when span export is enabled
//!
//! # Design Decisions
//! - `RUST_LOG` directives win over the configured level
//! - Plain text has full timestamps and no colours, for log shippers

use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::trace::SdkTracerProvider;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::schema::{LogFormat, LogsConfig, ParseLogLevelError, TracingConfig};
use crate::observability::telemetry::{self, SERVICE_NAME};

/// Error raised while bringing up logging and tracing.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("invalid log level: {0}")]
    Level(#[from] ParseLogLevelError),
    #[error("failed to install tracing subscriber: {0}")]
    Subscriber(#[from] TryInitError),
}

/// Keeps the tracer provider alive; call [`TelemetryGuard::shutdown`] before
/// exit so buffered spans are flushed.
#[derive(Default)]
pub struct TelemetryGuard {
    tracer_provider: Option<SdkTracerProvider>,
}

impl TelemetryGuard {
    pub fn shutdown(self) {
        let Some(provider) = self.tracer_provider else {
            return;
        };
        if let Err(err) = provider.force_flush() {
            eprintln!("Error flushing traces: {:#?}", err);
        }
        if let Err(err) = provider.shutdown() {
            eprintln!("Error shutting down tracer: {:#?}", err);
        }
    }
}

/// Build a filter from the configured level, letting `RUST_LOG` override it.
pub fn env_filter(logs: &LogsConfig) -> Result<EnvFilter, ParseLogLevelError> {
    let level = logs.level()?;
    Ok(EnvFilter::builder()
        .with_default_directive(tracing::level_filters::LevelFilter::from(level).into())
        .from_env_lossy())
}

/// Install the global subscriber and, if enabled, the span exporter.
pub fn init_telemetry(
    logs: &LogsConfig,
    tracing_config: &TracingConfig,
) -> Result<TelemetryGuard, TelemetryError> {
    let filter = env_filter(logs)?;

    let (json, text) = match logs.format() {
        LogFormat::Json => (
            Some(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(false),
            ),
            None,
        ),
        LogFormat::Text => (None, Some(fmt::layer().with_ansi(false))),
    };

    let tracer_provider = if tracing_config.enabled {
        telemetry::init_propagator();
        let provider = telemetry::init_tracer();
        opentelemetry::global::set_tracer_provider(provider.clone());
        Some(provider)
    } else {
        None
    };
    let otel = tracer_provider
        .as_ref()
        .map(|p| tracing_opentelemetry::layer().with_tracer(p.tracer(SERVICE_NAME)));

    tracing_subscriber::registry()
        .with(filter)
        .with(json)
        .with(text)
        .with(otel)
        .try_init()?;

    Ok(TelemetryGuard { tracer_provider })
}
