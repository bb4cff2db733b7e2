//! Databricks Unity Catalog volume backend.
//!
//! Downloads go through the workspace Files API:
//! `GET {host}/api/2.0/fs/files{path}` with a bearer token.

use async_trait::async_trait;
use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, info};

use super::storage::{StorageClient, StorageError};
use crate::config::DatabricksSettings;

const FILES_API_PREFIX: &str = "/api/2.0/fs/files";

/// Maximum number of response-body bytes copied into an error message.
const MAX_ERROR_BODY: usize = 512;

/// Files API client for one workspace.
#[derive(Clone)]
pub struct DatabricksVolumeClient {
    base_url: String,
    token: SecretString,
    http_client: reqwest::Client,
}

impl DatabricksVolumeClient {
    /// Create a client from settings.
    ///
    /// Missing host or token produce a client that fails every download; the
    /// gateway checks configuration before calling it.
    pub fn new(settings: &DatabricksSettings) -> Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()?;

        let base_url = normalize_host(settings.host.as_deref().unwrap_or_default());

        info!(
            "Databricks volume client initialized (host={}, request_timeout={:?})",
            base_url, settings.request_timeout
        );

        Ok(Self {
            base_url,
            token: settings
                .token
                .clone()
                .unwrap_or_else(|| SecretString::from(String::new())),
            http_client,
        })
    }

    /// Files API URL for a volume path.
    pub fn file_url(&self, key: &str) -> String {
        format!("{}{}{}", self.base_url, FILES_API_PREFIX, encode_path(key))
    }
}

#[async_trait]
impl StorageClient for DatabricksVolumeClient {
    async fn download(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        let url = self.file_url(key);
        debug!(key = %key, "Fetching file from Databricks volume");

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(self.token.expose_secret())
            .send()
            .await
            .map_err(|e| StorageError::Transfer(format!("Files API request failed: {}", e)))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(StorageError::NotFound(key.to_string()));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StorageError::Transfer(format!(
                "{}: {}",
                status,
                truncate(&body, MAX_ERROR_BODY)
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| StorageError::Transfer(format!("Failed to read Files API body: {}", e)))?;

        Ok(bytes.to_vec())
    }

    fn backend_name(&self) -> &'static str {
        "databricks"
    }
}

/// Ensure a scheme and drop trailing slashes.
fn normalize_host(host: &str) -> String {
    let host = host.trim().trim_end_matches('/');
    if host.is_empty() || host.starts_with("http://") || host.starts_with("https://") {
        host.to_string()
    } else {
        format!("https://{}", host)
    }
}

/// Percent-encode each segment, keeping `/` separators and a leading slash.
fn encode_path(key: &str) -> String {
    key.trim_start_matches('/')
        .split('/')
        .map(|segment| format!("/{}", urlencoding::encode(segment)))
        .collect()
}

fn truncate(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
