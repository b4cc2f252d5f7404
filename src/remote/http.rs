//! HTTP client for the rclone-style listing daemon.
//!
//! Endpoints: `GET /rclone/remotes` and `GET /rclone/list?remote=X`. The
//! daemon reports rclone failures as an `{"error": ...}` JSON body with
//! HTTP 200; those map to the same failure outcome as transport errors.

use std::time::Duration;

use serde::Deserialize;

use super::{BackendError, BackendResult, RemoteBackend, RemoteEntry};
use crate::config::BackendConfig;

/// Backend implementation over the daemon's HTTP API
pub struct HttpBackend {
    client: reqwest::blocking::Client,
    base_url: String,
}

/// `/rclone/remotes` payload: `{"remotes": [..]}` or `{"error": ".."}`
#[derive(Deserialize)]
struct RemotesPayload {
    #[serde(default)]
    remotes: Vec<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Entry as emitted by `rclone lsjson` (subset of its fields)
#[derive(Deserialize)]
struct WireEntry {
    #[serde(rename = "ID", default)]
    id: String,
    #[serde(rename = "Path", default)]
    path: String,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "IsDir")]
    is_dir: bool,
}

impl WireEntry {
    /// `ID` is absent for several rclone backends; fall back to `Path`,
    /// then `Name` (unique within one top-level listing).
    fn into_entry(self) -> RemoteEntry {
        let id = if !self.id.is_empty() {
            self.id
        } else if !self.path.is_empty() {
            self.path
        } else {
            self.name.clone()
        };
        RemoteEntry {
            id,
            name: self.name,
            is_dir: self.is_dir,
        }
    }
}

impl HttpBackend {
    /// Build the client from the backend section of the config.
    pub fn new(config: &BackendConfig) -> BackendResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
        })
    }
}

impl RemoteBackend for HttpBackend {
    fn list_remotes(&self) -> BackendResult<Vec<String>> {
        let url = format!("{}/rclone/remotes", self.base_url);
        let body = self.client.get(&url).send()?.error_for_status()?.text()?;
        parse_remotes(&body)
    }

    fn list_entries(&self, remote: &str) -> BackendResult<Vec<RemoteEntry>> {
        let url = format!("{}/rclone/list", self.base_url);
        // The remote id goes into the query verbatim; the query builder
        // percent-encodes it for transport.
        let body = self
            .client
            .get(&url)
            .query(&[("remote", remote)])
            .send()?
            .error_for_status()?
            .text()?;
        parse_entries(&body)
    }
}

fn parse_remotes(body: &str) -> BackendResult<Vec<String>> {
    let payload: RemotesPayload = serde_json::from_str(body)?;
    if let Some(error) = payload.error {
        return Err(BackendError::Backend(error));
    }
    Ok(payload.remotes)
}

fn parse_entries(body: &str) -> BackendResult<Vec<RemoteEntry>> {
    let value: serde_json::Value = serde_json::from_str(body)?;
    // An object here is the daemon's error shape; listings are arrays.
    if let Some(error) = value.get("error").and_then(|e| e.as_str()) {
        return Err(BackendError::Backend(error.to_string()));
    }
    let wire: Vec<WireEntry> = serde_json::from_value(value)?;
    Ok(wire.into_iter().map(WireEntry::into_entry).collect())
}
