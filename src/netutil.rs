/*!
Network helpers for ipinfo.

This module centralizes:
- RFC1918 private range detection
- Local vs public classification of extracted addresses
- in-addr.arpa construction (diagnostics only)

Only the exact address 127.0.0.1 counts as local loopback; the rest of
127.0.0.0/8 is treated as public and goes through reverse DNS.
*/

use std::net::{IpAddr, Ipv4Addr};

/// The single loopback address treated as local.
pub const LOCALHOST: Ipv4Addr = Ipv4Addr::new(127, 0, 0, 1);

/// Where an extracted address lives, as far as reporting is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressScope {
    /// Private (RFC1918 / unique-local) or 127.0.0.1; never looked up.
    Local,
    /// Anything else, including addresses that failed to parse.
    Public,
}

/// Return true if the IPv4 address is in RFC1918 private ranges.
pub fn is_rfc1918(ip: Ipv4Addr) -> bool {
    let o = ip.octets();
    (o[0] == 10) || (o[0] == 172 && (16..=31).contains(&o[1])) || (o[0] == 192 && o[1] == 168)
}

/// Return true if the address is private: RFC1918 for IPv4 (including
/// IPv4-mapped IPv6), fc00::/7 for other IPv6 addresses.
pub fn is_private(ip: IpAddr) -> bool {
    match ip {
        IpAddr::V4(v4) => is_rfc1918(v4),
        IpAddr::V6(v6) => match v6.to_ipv4_mapped() {
            Some(v4) => is_rfc1918(v4),
            None => (v6.segments()[0] & 0xfe00) == 0xfc00,
        },
    }
}

/// 4-byte form of an address, if it has one.
pub fn as_ipv4(ip: IpAddr) -> Option<Ipv4Addr> {
    match ip {
        IpAddr::V4(v4) => Some(v4),
        IpAddr::V6(v6) => v6.to_ipv4_mapped(),
    }
}

/// Classify a (possibly unparseable) address.
pub fn classify(ip: Option<IpAddr>) -> AddressScope {
    let Some(ip) = ip else {
        return AddressScope::Public;
    };
    let local = match as_ipv4(ip) {
        Some(v4) => is_rfc1918(v4) || v4 == LOCALHOST,
        None => is_private(ip),
    };
    if local {
        AddressScope::Local
    } else {
        AddressScope::Public
    }
}

/// Convert an IPv4 address to its reverse in-addr.arpa domain.
pub fn ipv4_to_inaddr(ip: Ipv4Addr) -> String {
    let o = ip.octets();
    format!("{}.{}.{}.{}.in-addr.arpa", o[3], o[2], o[1], o[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scope(s: &str) -> AddressScope {
        classify(Some(s.parse().unwrap()))
    }

    #[test]
    fn test_ipv4_to_inaddr() {
        let ip: Ipv4Addr = "203.0.113.7".parse().unwrap();
        assert_eq!(ipv4_to_inaddr(ip), "7.113.0.203.in-addr.arpa");
    }

    #[test]
    fn test_rfc1918() {
        assert!(is_rfc1918("10.0.0.1".parse().unwrap()));
        assert!(is_rfc1918("172.16.0.1".parse().unwrap()));
        assert!(is_rfc1918("172.31.255.255".parse().unwrap()));
        assert!(is_rfc1918("192.168.1.5".parse().unwrap()));
        assert!(!is_rfc1918("172.32.0.1".parse().unwrap()));
        assert!(!is_rfc1918("8.8.8.8".parse().unwrap()));
    }

    #[test]
    fn private_and_exact_loopback_are_local() {
        for addr in ["192.168.1.1", "10.0.0.5", "172.16.0.1", "127.0.0.1"] {
            assert_eq!(scope(addr), AddressScope::Local, "{addr}");
        }
    }

    #[test]
    fn rest_of_loopback_block_is_public() {
        assert_eq!(scope("127.0.0.2"), AddressScope::Public);
        assert_eq!(scope("127.255.255.255"), AddressScope::Public);
    }

    #[test]
    fn public_addresses() {
        assert_eq!(scope("8.8.8.8"), AddressScope::Public);
        assert_eq!(scope("172.15.0.1"), AddressScope::Public);
        assert_eq!(scope("169.254.1.1"), AddressScope::Public);
    }

    #[test]
    fn unparseable_is_public() {
        assert_eq!(classify(None), AddressScope::Public);
    }

    #[test]
    fn ipv6_only_uses_private_range() {
        assert_eq!(scope("fd00::1"), AddressScope::Local);
        assert_eq!(scope("::1"), AddressScope::Public);
        assert_eq!(scope("2001:db8::1"), AddressScope::Public);
        assert_eq!(scope("::ffff:127.0.0.1"), AddressScope::Local);
        assert_eq!(scope("::ffff:192.168.0.1"), AddressScope::Local);
    }
}
