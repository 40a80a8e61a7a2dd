//! Diagnostic HTTP echo server library.
//!
//! Reflects caller-supplied inputs back for testing HTTP clients, proxies and
//! load balancers.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ http::server ──▶ routing::matcher ──▶ EchoMode
//!                                                              │
//!            ┌──────────────┬──────────────┬─────────────┬─────┴───────┐
//!            ▼              ▼              ▼             ▼             ▼
//!     status sequence     time          headers        body         welcome
//!            │
//!            ▼
//!     sequence::SequenceCursor (one shared, mutex-guarded cursor)
//!
//!     Client Response ◀── http::response (status + plain-text body)
//! ```
//!
//! Cross-cutting: `config` (file + CLI/env), `observability` (logs and
//! OpenTelemetry spans), `lifecycle` (startup and shutdown).

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;
pub mod sequence;

pub use config::EchoConfig;
pub use http::EchoServer;
pub use lifecycle::Shutdown;
pub use sequence::SequenceCursor;
