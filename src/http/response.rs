//! Response formatting.
//!
//! # Responsibilities
//! - One pure formatter per echo mode
//! - Map failures to their fixed status/body pairs
//!
//! # Design Decisions
//! - All bodies are plain text
//! - Header echo sorts header names so output is stable between runs

use std::borrow::Cow;
use std::fmt::{Display, Write as _};

use axum::body::{Body, Bytes};
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, SecondsFormat, TimeZone};

pub const WELCOME_MESSAGE: &str = "Welcome to the Echo Server";
pub const EMPTY_BODY_MESSAGE: &str = "No body content provided";
pub const INVALID_SEQUENCE_MESSAGE: &str = "Invalid status code sequence";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// A complete status/body pair for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EchoReply {
    pub status: StatusCode,
    pub body: Bytes,
}

impl EchoReply {
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn ok(body: impl Into<Bytes>) -> Self {
        Self::new(StatusCode::OK, body)
    }

    /// Body as text, replacing invalid UTF-8.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

impl IntoResponse for EchoReply {
    fn into_response(self) -> Response {
        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = self.status;
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("text/plain; charset=utf-8"),
        );
        response
    }
}

/// A sequence code that cannot be sent as a final response status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("status code {0} cannot be sent as a final response")]
pub struct UnservableStatus(pub u16);

/// Reply carrying a resolved sequence code as its status.
///
/// Fails when the code cannot appear on an HTTP status line, or is
/// informational (1xx), which hyper refuses as a final response.
pub fn status_code(code: u16) -> Result<EchoReply, UnservableStatus> {
    let status = StatusCode::from_u16(code).map_err(|_| UnservableStatus(code))?;
    if status.is_informational() {
        return Err(UnservableStatus(code));
    }
    Ok(EchoReply::new(status, format!("HTTP/1.1 {}\n", code)))
}

pub fn invalid_sequence() -> EchoReply {
    EchoReply::new(StatusCode::BAD_REQUEST, INVALID_SEQUENCE_MESSAGE)
}

pub fn internal_error() -> EchoReply {
    EchoReply::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
}

/// RFC 3339 timestamp with seconds precision and `Z` for UTC.
pub fn current_time<Tz>(now: &DateTime<Tz>) -> EchoReply
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    EchoReply::ok(format!(
        "Current Time: {}",
        now.to_rfc3339_opts(SecondsFormat::Secs, true)
    ))
}

/// One `name: [v1 v2]` line per distinct header name.
///
/// Names are printed lowercase, as normalised by the HTTP stack
/// (`user-agent`, not `User-Agent`).
pub fn headers(headers: &HeaderMap) -> EchoReply {
    let mut names: Vec<_> = headers.keys().map(|name| name.as_str()).collect();
    names.sort_unstable();

    let mut out = String::new();
    for name in names {
        let values: Vec<_> = headers
            .get_all(name)
            .iter()
            .map(|v| String::from_utf8_lossy(v.as_bytes()))
            .collect();
        // Writing to a String cannot fail
        let _ = writeln!(out, "{}: [{}]", name, values.join(" "));
    }
    EchoReply::ok(out)
}

pub fn body(body: Bytes) -> EchoReply {
    if body.is_empty() {
        EchoReply::ok(EMPTY_BODY_MESSAGE)
    } else {
        EchoReply::ok(body)
    }
}

pub fn welcome() -> EchoReply {
    EchoReply::ok(WELCOME_MESSAGE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_status_code_reply() {
        let reply = status_code(503).unwrap();
        assert_eq!(reply.status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(reply.text(), "HTTP/1.1 503\n");

        assert_eq!(status_code(42), Err(UnservableStatus(42)));
        assert_eq!(status_code(100), Err(UnservableStatus(100)));
        assert!(status_code(199).is_err());
        assert!(status_code(1000).is_err());
    }

    #[test]
    fn test_current_time_format() {
        let utc = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 5).unwrap();
        assert_eq!(
            current_time(&utc).text(),
            "Current Time: 2024-03-01T12:30:05Z"
        );

        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let local = offset.with_ymd_and_hms(2024, 3, 1, 14, 30, 5).unwrap();
        assert_eq!(
            current_time(&local).text(),
            "Current Time: 2024-03-01T14:30:05+02:00"
        );
    }

    #[test]
    fn test_headers_one_line_per_name() {
        let mut map = HeaderMap::new();
        map.insert("x-b", HeaderValue::from_static("two"));
        map.append("accept", HeaderValue::from_static("text/plain"));
        map.append("accept", HeaderValue::from_static("*/*"));

        let reply = headers(&map);
        assert_eq!(reply.status, StatusCode::OK);
        assert_eq!(reply.text(), "accept: [text/plain */*]\nx-b: [two]\n");
    }

    #[test]
    fn test_body_echo() {
        assert_eq!(body(Bytes::new()).text(), EMPTY_BODY_MESSAGE);

        let raw = Bytes::from_static(b"\x00binary\xff");
        assert_eq!(body(raw.clone()).body, raw);
    }

    #[test]
    fn test_into_response_sets_content_type() {
        let response = invalid_sequence().into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );
    }
}
