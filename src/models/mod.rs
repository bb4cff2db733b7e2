//! Request-scoped data models for the case file gateway.

pub mod content;
pub mod identifiers;

pub use content::ContentDescriptor;
pub use identifiers::{CaseId, FileName, IdentifierError};

/// Fully-qualified location of a case file within the volume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKey(String);

impl StorageKey {
    /// Build `{root}/{case_id}/{file_name}`.
    pub fn new(root: &str, case_id: &CaseId, file_name: &FileName) -> Self {
        Self(format!(
            "{}/{}/{}",
            root.trim_end_matches('/'),
            case_id,
            file_name
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StorageKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
