//! In-memory stand-in for the remote case volume.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use case_file_gateway_lib::services::{StorageClient, StorageError};

/// Volume that serves canned results and records every requested key.
#[derive(Default)]
pub struct MockVolume {
    objects: HashMap<String, Result<Vec<u8>, StorageError>>,
    requested: Mutex<Vec<String>>,
}

impl MockVolume {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `content` at `key`.
    pub fn with_file(mut self, key: &str, content: &[u8]) -> Self {
        self.objects.insert(key.to_string(), Ok(content.to_vec()));
        self
    }

    /// Fail downloads of `key` with `error`.
    pub fn with_error(mut self, key: &str, error: StorageError) -> Self {
        self.objects.insert(key.to_string(), Err(error));
        self
    }

    /// Keys passed to `download`, in call order.
    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl StorageClient for MockVolume {
    async fn download(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        self.requested.lock().unwrap().push(key.to_string());
        self.objects
            .get(key)
            .cloned()
            .unwrap_or_else(|| Err(StorageError::NotFound(key.to_string())))
    }

    fn backend_name(&self) -> &'static str {
        "mock"
    }
}
