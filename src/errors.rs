//! Unified error handling for ipinfo.
//!
//! Errors fall into three coarse categories:
//!   - Input: the file could not be opened/read, or the configuration is invalid
//!   - Network: a reverse lookup failed (reported inline, never fatal)
//!   - Internal: writing the report failed or an unexpected state was hit
//!
//! Input errors abort the run after a single report line. Network errors are
//! rendered into the per-address `逆引き失敗 (...)` line by the caller and the
//! run continues with the next address.
//!
//! The `Display` text of the file-access variants is user-visible output, so
//! changing it changes the program's output format.

use std::io;

use thiserror::Error;

/// High-level classification of an [`IpInfoError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Network,
    Internal,
}

/// File operation that produced an I/O error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOperation {
    Open,
    Read,
}

/// Primary application error type.
#[derive(Error, Debug)]
pub enum IpInfoError {
    // ------------------------ Input / Validation ----------------------------
    #[error("os.Open: open {path}: {source}")]
    FileOpen {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("io.ReadAll: read {path}: {source}")]
    FileRead {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    // ----------------------------- Network ----------------------------------
    #[error("lookup {address}: unrecognized address")]
    UnrecognizedAddress { address: String },

    #[error("lookup {address}: {reason}")]
    DnsResolution { address: String, reason: String },

    // ---------------------------- Internal ----------------------------------
    #[error("failed to write report: {source}")]
    Output {
        #[source]
        source: io::Error,
    },
}

impl IpInfoError {
    /// Categorize the error.
    pub fn category(&self) -> ErrorCategory {
        use IpInfoError::*;
        match self {
            FileOpen { .. } | FileRead { .. } | Configuration { .. } => ErrorCategory::Input,
            UnrecognizedAddress { .. } | DnsResolution { .. } => ErrorCategory::Network,
            Output { .. } => ErrorCategory::Internal,
        }
    }

    // ---------------------------- Constructors -----------------------------

    pub fn file(path: impl Into<String>, operation: FileOperation, source: io::Error) -> Self {
        let path = path.into();
        match operation {
            FileOperation::Open => Self::FileOpen { path, source },
            FileOperation::Read => Self::FileRead { path, source },
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn unrecognized_address(address: impl Into<String>) -> Self {
        Self::UnrecognizedAddress {
            address: address.into(),
        }
    }

    pub fn dns_resolution(address: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::DnsResolution {
            address: address.into(),
            reason: reason.into(),
        }
    }
}

/// Public result alias.
pub type Result<T> = std::result::Result<T, IpInfoError>;

/// Bare IO errors come from writing the report.
impl From<io::Error> for IpInfoError {
    fn from(source: io::Error) -> Self {
        IpInfoError::Output { source }
    }
}

/// Extension trait for attaching path + operation context to IO results.
pub trait IoResultExt<T> {
    fn with_file(self, path: impl Into<String>, operation: FileOperation) -> Result<T>;
}

impl<T> IoResultExt<T> for std::result::Result<T, io::Error> {
    fn with_file(self, path: impl Into<String>, operation: FileOperation) -> Result<T> {
        self.map_err(|e| IpInfoError::file(path, operation, e))
    }
}
