//! Report line formatting.
//!
//! Every processed address produces exactly one line on stdout:
//!
//! ```text
//! 192.168.0.1: ローカルIP
//! 8.8.8.8: dns.google.
//! 203.0.113.9: 逆引き失敗 (lookup 203.0.113.9: no record found ...)
//! ```
//!
//! An input without any address produces [`NOT_FOUND_MESSAGE`] instead.

use std::fmt;

/// Label for private / local addresses.
pub const LOCAL_LABEL: &str = "ローカルIP";

/// Prefix for failed reverse lookups.
pub const LOOKUP_FAILED_LABEL: &str = "逆引き失敗";

/// Printed once when the file held no usable address.
pub const NOT_FOUND_MESSAGE: &str = "ファイルにIPアドレスが見つかりませんでした。";

/// What happened to one address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// Private or local; no lookup performed.
    Local,
    /// Names returned by the resolver, in resolver order.
    Resolved(Vec<String>),
    /// Lookup failed; the error detail is shown to the user.
    Failed(String),
}

/// A single report line.
#[derive(Debug, Clone)]
pub struct ReportLine<'a> {
    pub address: &'a str,
    pub outcome: LookupOutcome,
}

impl<'a> ReportLine<'a> {
    pub fn new(address: &'a str, outcome: LookupOutcome) -> Self {
        Self { address, outcome }
    }
}

impl fmt::Display for ReportLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            LookupOutcome::Local => write!(f, "{}: {}", self.address, LOCAL_LABEL),
            LookupOutcome::Resolved(names) => write!(f, "{}: {}", self.address, names.join(", ")),
            LookupOutcome::Failed(detail) => {
                write!(f, "{}: {} ({})", self.address, LOOKUP_FAILED_LABEL, detail)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_line() {
        let line = ReportLine::new("127.0.0.1", LookupOutcome::Local);
        assert_eq!(line.to_string(), "127.0.0.1: ローカルIP");
    }

    #[test]
    fn resolved_names_keep_order() {
        let line = ReportLine::new(
            "203.0.113.1",
            LookupOutcome::Resolved(vec!["b.example.".into(), "a.example.".into()]),
        );
        assert_eq!(line.to_string(), "203.0.113.1: b.example., a.example.");
    }

    #[test]
    fn failed_line() {
        let line = ReportLine::new(
            "8.8.8.8",
            LookupOutcome::Failed("lookup 8.8.8.8: timed out".into()),
        );
        assert_eq!(
            line.to_string(),
            "8.8.8.8: 逆引き失敗 (lookup 8.8.8.8: timed out)"
        );
    }
}
