//! S3 backend for the case volume.
//!
//! Supports both AWS S3 and MinIO for development. Read-only: the upload
//! path that fills the bucket lives elsewhere.

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::{Credentials, Region};
use secrecy::ExposeSecret;
use tracing::{debug, info};

use super::storage::{StorageClient, StorageError};
use crate::config::S3Config;

/// S3 client bound to one bucket.
#[derive(Clone)]
pub struct S3VolumeClient {
    client: Client,
    bucket: String,
}

impl S3VolumeClient {
    /// Create a new S3 client from configuration.
    ///
    /// No request is made here; credentials are only exercised on download.
    pub fn new(config: &S3Config) -> Self {
        let credentials = Credentials::new(
            &config.access_key,
            config.secret_key.expose_secret(),
            None,
            None,
            "case-file-gateway",
        );

        let region = Region::new(config.region.clone());

        let mut s3_config_builder = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(region)
            .credentials_provider(credentials)
            .force_path_style(true); // Required for MinIO

        if let Some(ref endpoint) = config.endpoint {
            s3_config_builder = s3_config_builder.endpoint_url(endpoint);
        }

        let client = Client::from_conf(s3_config_builder.build());

        info!(
            "S3 volume client initialized: bucket={}, endpoint={:?}",
            config.bucket, config.endpoint
        );

        Self {
            client,
            bucket: config.bucket.clone(),
        }
    }

    /// Storage keys are path-like; S3 object keys have no leading slash.
    pub fn object_key(key: &str) -> &str {
        key.trim_start_matches('/')
    }
}

#[async_trait]
impl StorageClient for S3VolumeClient {
    async fn download(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        let object_key = Self::object_key(key);
        debug!(bucket = %self.bucket, key = %object_key, "Fetching object from S3");

        let response = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(object_key)
            .send()
            .await
            .map_err(|e| {
                let service_error = e.into_service_error();
                if service_error.is_no_such_key() {
                    StorageError::NotFound(object_key.to_string())
                } else {
                    StorageError::Transfer(format!(
                        "Failed to get object from S3: {}",
                        service_error
                    ))
                }
            })?;

        let data = response
            .body
            .collect()
            .await
            .map_err(|e| StorageError::Transfer(format!("Failed to read S3 response body: {}", e)))?
            .into_bytes()
            .to_vec();

        Ok(data)
    }

    fn backend_name(&self) -> &'static str {
        "s3"
    }
}
