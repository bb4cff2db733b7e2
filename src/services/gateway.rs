//! Case file gateway.
//!
//! Turns two raw path parameters into exactly one HTTP response:
//! validate, check volume configuration, download, describe.

use std::sync::Arc;

use actix_web::{HttpResponse, ResponseError, http::header};
use tracing::{debug, error, warn};

use super::storage::StorageClient;
use crate::config::VolumeSettings;
use crate::error::{AppError, AppResult};
use crate::models::{CaseId, ContentDescriptor, FileName, StorageKey};

/// Message for a missing object.
pub const FILE_NOT_FOUND: &str = "File not found";

/// Message for an object that exists but has no bytes.
pub const FILE_NOT_FOUND_OR_EMPTY: &str = "File not found or empty";

/// A downloaded case file ready to be returned.
#[derive(Debug)]
pub struct CaseFile {
    pub file_name: FileName,
    pub content: Vec<u8>,
    pub descriptor: ContentDescriptor,
}

impl CaseFile {
    /// 200 response with inline disposition.
    pub fn into_response(self) -> HttpResponse {
        HttpResponse::Ok()
            .content_type(self.descriptor.media_type)
            .insert_header((header::CONTENT_DISPOSITION, self.descriptor.disposition))
            .body(self.content)
    }
}

/// Serves case files from the configured volume.
#[derive(Clone)]
pub struct FileGateway {
    settings: VolumeSettings,
    client: Arc<dyn StorageClient>,
}

impl FileGateway {
    pub fn new(settings: VolumeSettings, client: Arc<dyn StorageClient>) -> Self {
        Self { settings, client }
    }

    pub fn settings(&self) -> &VolumeSettings {
        &self.settings
    }

    /// Resolve and download a case file.
    ///
    /// Validation and configuration failures return before the storage
    /// client is touched. Storage failures are logged here and replaced with
    /// generic errors.
    pub async fn fetch(&self, case_id_raw: &str, file_name_raw: &str) -> AppResult<CaseFile> {
        let case_id = CaseId::parse(case_id_raw)?;
        let file_name = FileName::parse(file_name_raw)?;

        if !self.settings.is_configured() {
            return Err(AppError::NotConfigured(
                self.settings.backend.display_name(),
            ));
        }

        let key = StorageKey::new(&self.settings.root_path, &case_id, &file_name);
        debug!(key = %key, backend = self.client.backend_name(), "Downloading case file");

        let content = match self.client.download(key.as_str()).await {
            Ok(content) => content,
            Err(e) => {
                error!(
                    key = %key,
                    backend = self.client.backend_name(),
                    error = %e,
                    "Volume download failed"
                );
                return Err(if e.is_not_found() {
                    AppError::NotFound(FILE_NOT_FOUND.to_string())
                } else {
                    AppError::DownloadFailed
                });
            }
        };

        if content.is_empty() {
            warn!(key = %key, "Volume returned an empty file");
            return Err(AppError::NotFound(FILE_NOT_FOUND_OR_EMPTY.to_string()));
        }

        let descriptor = ContentDescriptor::for_file(&file_name);
        Ok(CaseFile {
            file_name,
            content,
            descriptor,
        })
    }

    /// Resolve, download and render a case file as an HTTP response.
    pub async fn handle(&self, case_id_raw: &str, file_name_raw: &str) -> HttpResponse {
        match self.fetch(case_id_raw, file_name_raw).await {
            Ok(file) => file.into_response(),
            Err(e) => e.error_response(),
        }
    }
}
