//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Request handling produces:
//!     → log events (tracing::info!/error!) → logging.rs (JSON or text)
//!     → spans (echo_request, status_sequence) → telemetry.rs (OpenTelemetry)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//!     → Span export (stdout exporter, batched)
//! ```

pub mod logging;
pub mod telemetry;

pub use logging::{init_telemetry, TelemetryError, TelemetryGuard};
