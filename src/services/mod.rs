//! Business logic services.

pub mod databricks;
pub mod gateway;
pub mod s3;
pub mod storage;

pub use databricks::DatabricksVolumeClient;
pub use gateway::{CaseFile, FileGateway};
pub use s3::S3VolumeClient;
pub use storage::{StorageClient, StorageError};

use std::sync::Arc;

use crate::config::{VolumeBackend, VolumeSettings};

/// Build the storage client for the selected backend.
pub fn build_storage_client(
    settings: &VolumeSettings,
) -> Result<Arc<dyn StorageClient>, reqwest::Error> {
    let client: Arc<dyn StorageClient> = match settings.backend {
        VolumeBackend::Databricks => Arc::new(DatabricksVolumeClient::new(&settings.databricks)?),
        VolumeBackend::S3 => Arc::new(S3VolumeClient::new(&settings.s3)),
    };
    Ok(client)
}
