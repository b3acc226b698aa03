//! Run configuration for ipinfo.
//!
//! A `Config` is assembled once at startup from the parsed command line and
//! passed explicitly into the application. There is no configuration file
//! and no environment lookup.

use std::path::PathBuf;
use std::time::Duration;

use trust_dns_resolver::config::ResolverOpts;

use crate::cli::Cli;
use crate::errors::IpInfoError;

/// Main configuration structure.
#[derive(Debug, Clone)]
pub struct Config {
    /// Text file to scan
    pub input: PathBuf,

    /// Diagnostic verbosity (0 = silent .. 5 = trace)
    pub verbosity: u8,

    /// Reverse lookup settings
    pub dns: DnsConfig,
}

/// Resolver overrides. `None` keeps whatever the system configuration
/// (or the resolver library default) says.
#[derive(Debug, Clone, Default)]
pub struct DnsConfig {
    /// Per-query timeout
    pub timeout: Option<Duration>,

    /// Attempts per query before giving up
    pub attempts: Option<usize>,
}

impl DnsConfig {
    /// Apply the overrides on top of a base set of resolver options.
    pub fn resolver_opts(&self, base: ResolverOpts) -> ResolverOpts {
        let mut opts = base;
        if let Some(timeout) = self.timeout {
            opts.timeout = timeout;
        }
        if let Some(attempts) = self.attempts {
            opts.attempts = attempts;
        }
        opts
    }
}

impl Config {
    /// Configuration for `input` with default settings.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            verbosity: 1,
            dns: DnsConfig::default(),
        }
    }

    /// Build from CLI arguments. Returns `None` when no input file was given,
    /// in which case the caller prints usage instead of running.
    pub fn from_cli(cli: &Cli) -> Option<Self> {
        let input = cli.input_path()?;
        Some(Self {
            input: input.to_path_buf(),
            verbosity: cli.verbose,
            dns: DnsConfig {
                timeout: cli.dns_timeout.map(Duration::from_secs),
                attempts: cli.dns_attempts,
            },
        })
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dns.timeout.is_some_and(|t| t.is_zero()) {
            return Err(ConfigError::InvalidValue {
                field: "dns.timeout".to_string(),
                value: "0".to_string(),
                reason: "Timeout must be greater than 0".to_string(),
            });
        }

        if self.dns.attempts == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "dns.attempts".to_string(),
                value: "0".to_string(),
                reason: "At least one attempt is required".to_string(),
            });
        }

        if self.verbosity > 5 {
            return Err(ConfigError::InvalidValue {
                field: "verbosity".to_string(),
                value: self.verbosity.to_string(),
                reason: "Verbosity ranges from 0 to 5".to_string(),
            });
        }

        Ok(())
    }
}

/// Configuration-related errors
#[derive(Debug)]
pub enum ConfigError {
    /// Invalid configuration value
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue {
                field,
                value,
                reason,
            } => {
                write!(f, "Invalid value '{}' for '{}': {}", value, field, reason)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for IpInfoError {
    fn from(e: ConfigError) -> Self {
        IpInfoError::configuration(e.to_string())
    }
}
