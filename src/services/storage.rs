//! Storage client abstraction over the remote case volume.
//!
//! The gateway only ever downloads whole files, so the seam is a single
//! `download` operation. Backends live in sibling modules.

use async_trait::async_trait;

/// Failure reported by a storage backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// The backend positively reported a missing object
    #[error("Object not found: {0}")]
    NotFound(String),

    /// Any other failure (network, auth, throttling, body read)
    #[error("Transfer failed: {0}")]
    Transfer(String),
}

impl StorageError {
    /// Whether this failure means the object does not exist.
    ///
    /// SDKs do not always classify missing objects, so transfer errors whose
    /// text mentions "not found" or a 404 status count as well.
    pub fn is_not_found(&self) -> bool {
        match self {
            StorageError::NotFound(_) => true,
            StorageError::Transfer(message) => {
                let lower = message.to_lowercase();
                lower.contains("not found") || lower.contains("404")
            }
        }
    }
}

/// Read access to the case volume.
#[async_trait]
pub trait StorageClient: Send + Sync {
    /// Fetch the whole object stored at `key`.
    async fn download(&self, key: &str) -> Result<Vec<u8>, StorageError>;

    /// Short backend name for logs.
    fn backend_name(&self) -> &'static str;
}
