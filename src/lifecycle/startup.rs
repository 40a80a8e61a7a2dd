//! Startup orchestration.
//!
//! Order: resolve config, validate, install logging and tracing. Any failure
//! here is fatal and nothing is served.

use crate::config::{resolve_config, CliArgs, ConfigError, EchoConfig};
use crate::observability::{init_telemetry, TelemetryError, TelemetryGuard};

/// Fatal error before the listener is bound.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("telemetry initialization failed: {0}")]
    Telemetry(#[from] TelemetryError),
}

/// Everything `main` needs once startup succeeded.
pub struct Startup {
    pub config: EchoConfig,
    pub telemetry: TelemetryGuard,
}

/// Resolve configuration and bring up telemetry.
pub fn bootstrap(args: &CliArgs) -> Result<Startup, StartupError> {
    let config = resolve_config(args)?;
    let telemetry = init_telemetry(&config.logs, &config.tracing)?;

    tracing::info!(
        bind_address = %config.listener.bind_address,
        log_level = %config.logs.level,
        log_format = %config.logs.format,
        tracing_enabled = config.tracing.enabled,
        "Configuration loaded"
    );

    Ok(Startup { config, telemetry })
}
