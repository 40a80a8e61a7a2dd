//! Echo mode classification.
//!
//! # Responsibilities
//! - Decide which echo mode serves a request
//! - Extract the parameters that mode needs
//!
//! # Design Decisions
//! - Fixed priority, first match wins: status sequence, time, headers, body,
//!   welcome
//! - The `echo_code` query parameter beats the `x-echo-code` header
//! - An empty `x-echo-code` header is treated as absent
//! - Classification is pure; nothing is written to the response here

use axum::http::HeaderMap;

use crate::http::request::{
    EchoQuery, ECHO_BODY, ECHO_CODE, ECHO_ENV, ECHO_TIME, INIT, X_ECHO_CODE,
};

/// The response strategy selected for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EchoMode {
    /// Cycle through a caller-supplied status code list.
    StatusSequence {
        /// Unparsed hyphen-separated codes.
        raw: String,
        /// Replace the stored sequence even if one exists.
        reinit: bool,
    },
    /// Reply with the current local time.
    Time,
    /// Reply with the request headers.
    Headers,
    /// Reply with the request body.
    Body,
    /// Fixed greeting.
    Welcome,
}

impl EchoMode {
    /// Short name used in logs and span fields.
    pub fn name(&self) -> &'static str {
        match self {
            EchoMode::StatusSequence { .. } => "status_sequence",
            EchoMode::Time => "time",
            EchoMode::Headers => "headers",
            EchoMode::Body => "body",
            EchoMode::Welcome => "welcome",
        }
    }
}

/// Classify a request by its query flags and headers.
pub fn classify(query: &EchoQuery, headers: &HeaderMap) -> EchoMode {
    if let Some(raw) = status_sequence(query, headers) {
        return EchoMode::StatusSequence {
            raw,
            reinit: query.first(INIT) == Some("1"),
        };
    }

    if query.contains(ECHO_TIME) {
        EchoMode::Time
    } else if query.contains(ECHO_ENV) {
        EchoMode::Headers
    } else if query.contains(ECHO_BODY) {
        EchoMode::Body
    } else {
        EchoMode::Welcome
    }
}

fn status_sequence(query: &EchoQuery, headers: &HeaderMap) -> Option<String> {
    if let Some(raw) = query.first(ECHO_CODE) {
        return Some(raw.to_string());
    }

    headers
        .get(&X_ECHO_CODE)
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
        .filter(|v| !v.is_empty())
}
