//! Status sequence parsing.

/// Separator between codes in a sequence string.
pub const SEPARATOR: char = '-';

/// Parse a hyphen-separated list of status codes.
///
/// Tokens that are not valid `u16` integers (including empty tokens from
/// leading, trailing or doubled separators) are skipped.
pub fn parse_sequence(raw: &str) -> Vec<u16> {
    raw.split(SEPARATOR)
        .filter_map(|token| token.parse::<u16>().ok())
        .collect()
}
