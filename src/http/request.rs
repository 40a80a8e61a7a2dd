//! Request inspection.
//!
//! # Responsibilities
//! - Parse the query string into ordered key/value pairs
//! - Answer presence and first-value lookups for echo flags
//!
//! # Design Decisions
//! - A key counts as present even with an empty value (`?echo_time`)
//! - For repeated keys the first occurrence wins
//! - Percent-decoding is lossy; malformed escapes never fail a request

use axum::http::{HeaderName, Uri};
use url::form_urlencoded;

/// Query parameter carrying a hyphen-separated status code list.
pub const ECHO_CODE: &str = "echo_code";
/// Query parameter forcing the stored sequence to be replaced.
pub const INIT: &str = "init";
/// Query flag selecting the time echo.
pub const ECHO_TIME: &str = "echo_time";
/// Query flag selecting the header echo.
pub const ECHO_ENV: &str = "echo_env";
/// Query flag selecting the body echo.
pub const ECHO_BODY: &str = "echo_body";
/// Header carrying a status code list when the query parameter is absent.
pub const X_ECHO_CODE: HeaderName = HeaderName::from_static("x-echo-code");

/// Decoded query string of one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EchoQuery {
    pairs: Vec<(String, String)>,
}

impl EchoQuery {
    /// Parse a raw query string (without the leading `?`).
    pub fn parse(query: Option<&str>) -> Self {
        let pairs = query
            .map(|q| form_urlencoded::parse(q.as_bytes()).into_owned().collect())
            .unwrap_or_default();
        Self { pairs }
    }

    pub fn from_uri(uri: &Uri) -> Self {
        Self::parse(uri.query())
    }

    /// True if `key` appears at all, whatever its value.
    pub fn contains(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    /// First value supplied for `key`.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presence_without_value() {
        let query = EchoQuery::parse(Some("echo_time&echo_env="));
        assert!(query.contains(ECHO_TIME));
        assert!(query.contains(ECHO_ENV));
        assert!(!query.contains(ECHO_BODY));
        assert_eq!(query.first(ECHO_TIME), Some(""));
    }

    #[test]
    fn test_first_value_wins() {
        let query = EchoQuery::parse(Some("echo_code=200-500&echo_code=404&init=1"));
        assert_eq!(query.first(ECHO_CODE), Some("200-500"));
        assert_eq!(query.first(INIT), Some("1"));
    }

    #[test]
    fn test_decodes_values() {
        let uri: Uri = "/?echo_code=200%2D301".parse().unwrap();
        let query = EchoQuery::from_uri(&uri);
        assert_eq!(query.first(ECHO_CODE), Some("200-301"));
    }

    #[test]
    fn test_no_query() {
        let uri: Uri = "/anything".parse().unwrap();
        assert_eq!(EchoQuery::from_uri(&uri), EchoQuery::default());
    }
}
