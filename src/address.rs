use std::cmp::Ordering;
use std::collections::HashSet;
use std::net::{IpAddr, Ipv4Addr};
use std::str::FromStr;

use crate::netutil::as_ipv4;

/// Placeholder literal that is never reported as an address.
pub const UNSPECIFIED_SENTINEL: &str = "0.0.0.0";

/// An extracted address: the text exactly as it appeared in the file plus
/// its parsed value. Text that does not parse (e.g. `01.2.3.4`, which the
/// standard parser rejects for its leading zero) keeps `ip == None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    text: String,
    ip: Option<IpAddr>,
}

impl Address {
    pub fn parse(text: &str) -> Self {
        Self {
            text: text.to_string(),
            ip: IpAddr::from_str(text).ok(),
        }
    }

    /// Original textual form.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn ip(&self) -> Option<IpAddr> {
        self.ip
    }

    /// 4-byte form, if the address parsed and has one.
    pub fn ipv4(&self) -> Option<Ipv4Addr> {
        self.ip.and_then(as_ipv4)
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

impl Ord for Address {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_ips(self.ip, other.ip).then_with(|| self.text.cmp(&other.text))
    }
}

impl PartialOrd for Address {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Three-way comparison of parsed addresses.
///
/// Unparseable sorts first, then addresses with a 4-byte form, then raw
/// byte order of the 16-byte (IPv4-mapped) representation. For two IPv4
/// addresses the byte order is the usual numeric dotted-decimal order.
pub fn compare_ips(a: Option<IpAddr>, b: Option<IpAddr>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(a), Some(b)) => {
            let a4 = as_ipv4(a).is_some();
            let b4 = as_ipv4(b).is_some();
            b4.cmp(&a4).then_with(|| raw_octets(a).cmp(&raw_octets(b)))
        }
    }
}

fn raw_octets(ip: IpAddr) -> [u8; 16] {
    match ip {
        IpAddr::V4(v4) => v4.to_ipv6_mapped().octets(),
        IpAddr::V6(v6) => v6.octets(),
    }
}

/// Unique textual forms seen during extraction.
///
/// The sentinel `0.0.0.0` is rejected on insert, so it can never reach the
/// sorted output.
#[derive(Default, Debug, Clone)]
pub struct AddressSet {
    seen: HashSet<String>,
}

impl AddressSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self {
            seen: HashSet::new(),
        }
    }

    /// Collect candidates, dropping duplicates and the sentinel.
    pub fn from_candidates<'a, I>(candidates: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut set = Self::new();
        for candidate in candidates {
            set.insert(candidate);
        }
        set
    }

    /// Insert a textual address. Returns true if it was not already present.
    pub fn insert(&mut self, text: &str) -> bool {
        if text == UNSPECIFIED_SENTINEL || self.seen.contains(text) {
            return false;
        }
        self.seen.insert(text.to_string())
    }

    /// Parse every entry and order the result.
    pub fn into_sorted(self) -> SortedAddresses {
        let mut addresses: Vec<Address> = self.seen.iter().map(|s| Address::parse(s)).collect();
        addresses.sort();
        SortedAddresses { addresses }
    }
}

/// Addresses in report order.
#[derive(Debug, Clone, Default)]
pub struct SortedAddresses {
    addresses: Vec<Address>,
}

impl SortedAddresses {
    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Address> {
        self.addresses.iter()
    }

    pub fn as_strs(&self) -> Vec<&str> {
        self.addresses.iter().map(Address::as_str).collect()
    }
}

impl<'a> IntoIterator for &'a SortedAddresses {
    type Item = &'a Address;
    type IntoIter = std::slice::Iter<'a, Address>;

    fn into_iter(self) -> Self::IntoIter {
        self.addresses.iter()
    }
}
