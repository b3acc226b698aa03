//! ipinfo library
//!
//! Extracts IPv4 literals from a text file, deduplicates and sorts them,
//! labels private/local ones and reverse-resolves the rest:
//!
//! - Scan raw bytes for dotted-decimal IPv4 literals
//! - Collapse duplicates, drop `0.0.0.0`, sort by address bytes
//! - Classify RFC1918 addresses and 127.0.0.1 as local
//! - Reverse DNS (PTR) for everything else, one query at a time
//!
//! # Example
//!
//! ```rust
//! use ipinfo::address::AddressSet;
//! use ipinfo::extract::extract_candidates;
//! use ipinfo::netutil::{classify, AddressScope};
//!
//! let text = b"gw 192.168.0.1, dns 8.8.8.8, gw again 192.168.0.1";
//! let sorted = AddressSet::from_candidates(extract_candidates(text)).into_sorted();
//! assert_eq!(sorted.as_strs(), vec!["8.8.8.8", "192.168.0.1"]);
//!
//! let scopes: Vec<AddressScope> = sorted.iter().map(|a| classify(a.ip())).collect();
//! assert_eq!(scopes, vec![AddressScope::Public, AddressScope::Local]);
//! ```

pub mod address;
pub mod app;
pub mod cli;
pub mod config;
pub mod errors;
pub mod extract;
pub mod logging;
pub mod netutil;
pub mod output;
pub mod resolver;

// Re-export commonly used types and functions for convenience
pub use address::{Address, AddressSet, SortedAddresses};
pub use app::{App, RunOutcome, RunStats};
pub use config::{Config, DnsConfig};
pub use errors::{IpInfoError, Result};
pub use netutil::{AddressScope, classify};
pub use resolver::{DnsResolver, ReverseResolver};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
