//! Application orchestration.
//!
//! `App` wires the pipeline together:
//!   1. Read the input file (open/read failures end the run)
//!   2. Extract IPv4-shaped candidates
//!   3. Deduplicate (dropping `0.0.0.0`) and sort
//!   4. For each address in order: classify, reverse-resolve public ones,
//!      print one line
//!
//! Lookups run one at a time; a failed lookup becomes that address's report
//! line and the loop moves on.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use tracing::{debug, error, info};

use crate::address::AddressSet;
use crate::config::Config;
use crate::errors::{ErrorCategory, FileOperation, IoResultExt, IpInfoError, Result};
use crate::extract::extract_candidates;
use crate::netutil::{AddressScope, classify};
use crate::output::{LookupOutcome, NOT_FOUND_MESSAGE, ReportLine};
use crate::resolver::{DnsResolver, ReverseResolver};

/// Counters for a completed report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub addresses: usize,
    pub local: usize,
    pub resolved: usize,
    pub failed: usize,
}

/// How a run ended, when it did not fail outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// The file held no reportable address; the not-found line was printed.
    NoAddresses,
    /// One line was printed per address.
    Reported(RunStats),
}

/// Application façade, generic over the reverse resolver.
pub struct App<R> {
    resolver: R,
}

impl App<DnsResolver> {
    /// Execute a full run for `config`, writing report lines to `out`.
    ///
    /// Returns: intended process exit code (0 = success, 1 = input/configuration error).
    pub async fn execute<W: Write>(config: &Config, out: &mut W) -> Result<i32> {
        if let Err(e) = config.validate() {
            error!("{e}");
            writeln!(out, "{}", IpInfoError::from(e))?;
            return Ok(1);
        }

        let app = App::new(DnsResolver::from_config(&config.dns));
        match app.run(&config.input, out).await {
            Ok(_) => Ok(0),
            Err(e) if e.category() == ErrorCategory::Input => {
                writeln!(out, "{e}")?;
                Ok(1)
            }
            Err(e) => Err(e),
        }
    }
}

impl<R: ReverseResolver> App<R> {
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    /// Read `path` and report every address it contains.
    pub async fn run<W: Write>(&self, path: &Path, out: &mut W) -> Result<RunOutcome> {
        let content = read_input(path)?;
        info!("read {} bytes from {}", content.len(), path.display());
        self.report(&content, out).await
    }

    /// Report every address found in `content`.
    pub async fn report<W: Write>(&self, content: &[u8], out: &mut W) -> Result<RunOutcome> {
        let candidates: Vec<&str> = extract_candidates(content).collect();
        let sorted = AddressSet::from_candidates(candidates.iter().copied()).into_sorted();
        info!(
            "{} candidate(s), {} unique address(es)",
            candidates.len(),
            sorted.len()
        );

        if sorted.is_empty() {
            writeln!(out, "{NOT_FOUND_MESSAGE}")?;
            return Ok(RunOutcome::NoAddresses);
        }

        let mut stats = RunStats {
            addresses: sorted.len(),
            ..Default::default()
        };

        for address in &sorted {
            let outcome = match classify(address.ip()) {
                AddressScope::Local => {
                    stats.local += 1;
                    LookupOutcome::Local
                }
                AddressScope::Public => match self.resolver.reverse(address).await {
                    Ok(names) => {
                        stats.resolved += 1;
                        LookupOutcome::Resolved(names)
                    }
                    Err(e) => {
                        stats.failed += 1;
                        LookupOutcome::Failed(e.to_string())
                    }
                },
            };
            writeln!(out, "{}", ReportLine::new(address.as_str(), outcome))?;
        }

        debug!("{stats:?}");
        Ok(RunOutcome::Reported(stats))
    }
}

/// Read the whole file. The handle is dropped before returning.
pub fn read_input(path: &Path) -> Result<Vec<u8>> {
    let display = path.display().to_string();
    let mut file = File::open(path).with_file(&display, FileOperation::Open)?;
    let mut content = Vec::new();
    file.read_to_end(&mut content)
        .with_file(display, FileOperation::Read)?;
    Ok(content)
}
