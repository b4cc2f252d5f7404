//! Remote storage backends
//!
//! The listing daemon is the single source of truth for which remotes exist
//! and what lives under them. This module defines the client seam: a trait
//! for "list the known remotes" and "list the top-level entries of one
//! remote", plus the HTTP implementation that talks to the daemon.

mod http;

pub use http::HttpBackend;

use thiserror::Error;

/// Error type for backend operations
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Malformed response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("{0}")]
    Backend(String),
}

pub type BackendResult<T> = Result<T, BackendError>;

/// One item under a remote's top level.
///
/// Entries are ephemeral: `id` is unique within a single listing response
/// and is never cross-referenced between listings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemoteEntry {
    pub id: String,
    pub name: String,
    pub is_dir: bool,
}

/// Trait for remote-listing backends
///
/// Remote identifiers are opaque strings owned by the daemon; they are
/// passed back verbatim when listing entries.
pub trait RemoteBackend: Send + Sync {
    /// List the identifiers of all configured remotes, in daemon order.
    fn list_remotes(&self) -> BackendResult<Vec<String>>;

    /// List the top-level entries of one remote, in daemon order.
    fn list_entries(&self, remote: &str) -> BackendResult<Vec<RemoteEntry>>;
}
