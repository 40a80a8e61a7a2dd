//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! defaults
//!     → optional config file (TOML, --config / ECHO_CONFIG)
//!     → CLI flags and environment (LOGS_LEVEL, LOGS_FORMAT, ...)
//!     → validation.rs (semantic checks)
//!     → EchoConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is read once at startup and never reloaded
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - An invalid log level is fatal: the process exits before binding

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, resolve_config, CliArgs, ConfigError};
pub use schema::{EchoConfig, ListenerConfig, LogFormat, LogLevel, LogsConfig};
pub use validation::{validate_config, ValidationError};
