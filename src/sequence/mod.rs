//! Cyclic status-code sequences.
//!
//! # Data Flow
//! ```text
//! "200-404-500" (query param or x-echo-code header)
//!     → parse.rs (split on '-', drop unparseable tokens)
//!     → cursor.rs (lock, maybe replace sequence, read + advance index)
//!     → next status code, or None when the sequence is empty
//! ```
//!
//! # Design Decisions
//! - One cursor per server, shared via Arc and injected into handler state
//! - A single mutex guards the parse-decide-read-advance step
//! - Unparseable tokens are dropped silently. This is observable behaviour
//!   that clients rely on ("200-oops-500" cycles 200, 500), so it is kept even
//!   though rejecting the whole sequence would be stricter.

pub mod cursor;
pub mod parse;

pub use cursor::SequenceCursor;
pub use parse::parse_sequence;
