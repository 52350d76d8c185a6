//! Compiled input patterns
//!
//! Every pattern is ASCII-only for word and digit classes, and `.`-style
//! "rest of the line" matches stop at any line terminator
//! (`\n`, `\r`, U+2028, U+2029).

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Acceptable URL: protocol, auth, domain, port, path/query.
    /// Only the domain is mandatory; it needs at least one dot and a TLD of 2+ chars.
    pub static ref ACCEPTABLE_URL: Regex = Regex::new(concat!(
        r"^(?:[0-9A-Za-z_]+?://)?",
        r"(?:[^@/?]+@)?",
        r"(?:(?:[^.:/?]+\.)+?[^.:/?]{2,})",
        r"(?::[0-9]{2,5})?",
        r"(?:[/?][^\n\r\x{2028}\x{2029}]*)?$",
    ))
    .unwrap();

    /// Leading `scheme://`
    pub static ref HAS_PROTOCOL: Regex = Regex::new(r"^[0-9A-Za-z_]+://").unwrap();

    /// Anything with exactly one `@` and something on both sides of it
    pub static ref ACCEPTABLE_EMAIL: Regex = Regex::new(r"^[^@]+@[^@]+$").unwrap();

    /// Runs of whitespace and/or commas.
    /// Whitespace is the ECMAScript set: Unicode White_Space minus NEL, plus BOM.
    pub static ref CSV_SEPARATOR: Regex = Regex::new(r"[[\s,\x{FEFF}]--\x{85}]+").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_pattern_parts() {
        assert!(ACCEPTABLE_URL.is_match("example.com"));
        assert!(ACCEPTABLE_URL.is_match("ftp://user@files.example.org:2121/pub?x=1"));
        assert!(ACCEPTABLE_URL.is_match("sub.domain.example.io?q"));
        assert!(!ACCEPTABLE_URL.is_match("example"));
        assert!(!ACCEPTABLE_URL.is_match("example.c"));
        assert!(!ACCEPTABLE_URL.is_match("example.com:1"));
        assert!(!ACCEPTABLE_URL.is_match("example.com:123456"));
    }

    #[test]
    fn test_url_pattern_is_ascii_only_for_digits_and_words() {
        // Arabic-Indic digits in the port must not count as digits
        assert!(!ACCEPTABLE_URL.is_match("example.com:\u{0661}\u{0662}"));
        // Non-ASCII scheme is not a protocol
        assert!(!HAS_PROTOCOL.is_match("é://example.com"));
    }

    #[test]
    fn test_url_path_stops_at_line_terminators() {
        assert!(ACCEPTABLE_URL.is_match("example.com/path"));
        assert!(!ACCEPTABLE_URL.is_match("example.com/path\nmore"));
        assert!(!ACCEPTABLE_URL.is_match("example.com/path\u{2028}more"));
    }

    #[test]
    fn test_has_protocol() {
        assert!(HAS_PROTOCOL.is_match("https://example.com"));
        assert!(HAS_PROTOCOL.is_match("git_ssh://host.io"));
        assert!(!HAS_PROTOCOL.is_match("example.com"));
        assert!(!HAS_PROTOCOL.is_match("//example.com"));
    }

    #[test]
    fn test_email_pattern() {
        assert!(ACCEPTABLE_EMAIL.is_match("a@b"));
        assert!(!ACCEPTABLE_EMAIL.is_match("@b"));
        assert!(!ACCEPTABLE_EMAIL.is_match("a@"));
        assert!(!ACCEPTABLE_EMAIL.is_match("a@b@c"));
    }

    #[test]
    fn test_csv_separator() {
        let parts: Vec<&str> = CSV_SEPARATOR.split("a, b\t\nc").collect();
        assert_eq!(parts, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_csv_separator_whitespace_set() {
        assert!(CSV_SEPARATOR.is_match("\u{FEFF}"));
        assert!(CSV_SEPARATOR.is_match("\u{A0}"));
        assert!(CSV_SEPARATOR.is_match("\u{3000}"));
        assert!(!CSV_SEPARATOR.is_match("\u{85}"));
        assert!(!CSV_SEPARATOR.is_match("\u{200B}"));
    }
}
