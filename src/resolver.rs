//! Reverse DNS (PTR) lookups.
//!
//! `ReverseResolver` is the seam between the report loop and the network:
//! the binary uses [`DnsResolver`], tests substitute a canned implementation.

use async_trait::async_trait;
use tracing::{debug, trace, warn};
use trust_dns_resolver::{
    TokioAsyncResolver,
    config::{ResolverConfig, ResolverOpts},
    proto::rr::Name,
    system_conf::read_system_conf,
};

use crate::address::Address;
use crate::config::DnsConfig;
use crate::errors::{IpInfoError, Result};
use crate::netutil::ipv4_to_inaddr;

/// Something that can map an address to the names that point back at it.
#[async_trait]
pub trait ReverseResolver: Send + Sync {
    /// Names for `address`, in the order the resolver returned them.
    async fn reverse(&self, address: &Address) -> Result<Vec<String>>;
}

/// Resolver backed by trust-dns, using the host's resolver configuration.
pub struct DnsResolver {
    inner: TokioAsyncResolver,
}

impl DnsResolver {
    /// Build from the system configuration (`/etc/resolv.conf` or platform
    /// equivalent). If that cannot be read, fall back to the library's
    /// default upstream servers.
    pub fn from_config(dns: &DnsConfig) -> Self {
        let (config, base_opts) = match read_system_conf() {
            Ok(pair) => pair,
            Err(e) => {
                warn!("system resolver configuration unavailable ({e}); using default upstreams");
                (ResolverConfig::default(), ResolverOpts::default())
            }
        };
        let opts = dns.resolver_opts(base_opts);
        debug!(
            "resolver ready: timeout={}s attempts={}",
            opts.timeout.as_secs(),
            opts.attempts
        );
        Self {
            inner: TokioAsyncResolver::tokio(config, opts),
        }
    }
}

/// PTR target as it appears on the wire: punycode labels stay encoded and
/// the trailing root dot is kept.
fn ptr_name_text(name: &Name) -> String {
    name.to_ascii()
}

#[async_trait]
impl ReverseResolver for DnsResolver {
    async fn reverse(&self, address: &Address) -> Result<Vec<String>> {
        let Some(ip) = address.ip() else {
            return Err(IpInfoError::unrecognized_address(address.as_str()));
        };

        if let Some(v4) = address.ipv4() {
            trace!("PTR {}", ipv4_to_inaddr(v4));
        }

        match self.inner.reverse_lookup(ip).await {
            Ok(resp) => {
                let names: Vec<String> = resp.iter().map(|ptr| ptr_name_text(&ptr.0)).collect();
                debug!("{address}: {} name(s)", names.len());
                Ok(names)
            }
            Err(e) => {
                debug!("{address}: reverse lookup failed: {e}");
                Err(IpInfoError::dns_resolution(address.as_str(), e.to_string()))
            }
        }
    }
}
