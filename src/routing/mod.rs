//! Request classification subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request
//!     → http/request.rs (decode query string)
//!     → matcher.rs (query flags + headers → EchoMode)
//!     → http/server.rs (run the mode, format the reply)
//! ```

pub mod matcher;

pub use matcher::{classify, EchoMode};
