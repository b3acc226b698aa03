//! IPv4 literal extraction from raw file content.
//!
//! The scan runs over bytes rather than `&str` so that files with stray
//! non-UTF-8 sequences are still processed. Word boundaries are ASCII-only:
//! a non-ASCII letter directly before a literal does not hide it.
//!
//! Octet ranges are enforced by the expression itself
//! (`25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?`), so `999.999.999.999` never
//! matches. Leading zeros are kept as written (`010.1.1.1` matches); whether
//! such text is a usable address is decided later by the parser.

use once_cell::sync::Lazy;
use regex::bytes::Regex;

/// Dotted-decimal IPv4 pattern with per-octet 0-255 alternation.
pub const IPV4_PATTERN: &str = r"(?-u:\b)(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)(?-u:\b)";

static IPV4_RE: Lazy<Regex> = Lazy::new(|| Regex::new(IPV4_PATTERN).unwrap());

/// Iterate over every IPv4-shaped substring of `content`, in file order,
/// duplicates included.
pub fn extract_candidates(content: &[u8]) -> impl Iterator<Item = &str> {
    IPV4_RE
        .find_iter(content)
        // Matches only ever span ASCII digits and dots.
        .filter_map(|m| std::str::from_utf8(m.as_bytes()).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(s: &str) -> Vec<&str> {
        extract_candidates(s.as_bytes()).collect()
    }

    #[test]
    fn finds_addresses_in_prose() {
        assert_eq!(
            extract("visit 8.8.8.8 and 127.0.0.1 twice 127.0.0.1"),
            vec!["8.8.8.8", "127.0.0.1", "127.0.0.1"]
        );
    }

    #[test]
    fn rejects_out_of_range_octets() {
        assert!(extract("999.999.999.999").is_empty());
        assert!(extract("256.1.1.1").is_empty());
        assert!(extract("1.2.3.256").is_empty());
    }

    #[test]
    fn requires_word_boundaries() {
        assert!(extract("a1.2.3.4").is_empty());
        assert!(extract("1.2.3.4b").is_empty());
        assert!(extract("12345.1.1.1").is_empty());
        assert_eq!(extract("(10.0.0.1),[192.168.0.1]"), vec!["10.0.0.1", "192.168.0.1"]);
    }

    #[test]
    fn longer_dotted_runs_yield_leading_quad() {
        assert_eq!(extract("1.2.3.4.5"), vec!["1.2.3.4"]);
    }

    #[test]
    fn keeps_leading_zeros() {
        assert_eq!(extract("host 010.001.002.003 up"), vec!["010.001.002.003"]);
    }

    #[test]
    fn boundaries_are_ascii_only() {
        assert_eq!(extract("é8.8.4.4"), vec!["8.8.4.4"]);
    }

    #[test]
    fn tolerates_invalid_utf8() {
        let mut content = vec![0xff, 0xfe, b' '];
        content.extend_from_slice(b"203.0.113.9");
        content.push(0xc3);
        let found: Vec<&str> = extract_candidates(&content).collect();
        assert_eq!(found, vec!["203.0.113.9"]);
    }

    #[test]
    fn no_digits_no_matches() {
        assert!(extract("nothing to see here. move along.").is_empty());
        assert_eq!(extract_candidates(b"").count(), 0);
        assert_eq!(extract_candidates(b"0.0.0.0 0.0.0.0 1.1.1.1").count(), 3);
    }
}
