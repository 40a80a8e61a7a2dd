//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, handler)
//!     → request.rs (decode query flags)
//!     → routing (pick the echo mode)
//!     → response.rs (format status + plain-text body)
//!     → Send to client
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use request::{EchoQuery, X_ECHO_CODE};
pub use response::EchoReply;
pub use server::{AppState, EchoServer};
