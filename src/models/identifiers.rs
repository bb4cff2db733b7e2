//! Path-safe identifiers taken from request path parameters.
//!
//! Both types can only be built through `parse`, so holding one means the
//! value is safe to embed as a single segment of a storage key.

use std::fmt;

/// Why a raw path parameter was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentifierError {
    #[error("case_id required")]
    CaseIdRequired,

    #[error("case_id contains invalid characters")]
    CaseIdInvalid,

    #[error("filename required")]
    FileNameRequired,

    #[error("filename contains invalid characters")]
    FileNameInvalid,

    #[error("filename must not be a relative directory reference")]
    FileNameTraversal,
}

/// Identifier of a case; namespaces its files in the volume.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CaseId(String);

impl CaseId {
    /// Validate a raw case id.
    ///
    /// Accepts `[A-Za-z0-9-]+` after trimming surrounding whitespace.
    pub fn parse(raw: &str) -> Result<Self, IdentifierError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(IdentifierError::CaseIdRequired);
        }
        if !trimmed.chars().all(is_case_id_char) {
            return Err(IdentifierError::CaseIdInvalid);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Basename of an uploaded file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileName(String);

impl FileName {
    /// Validate a raw filename.
    ///
    /// Any directory prefix (either `/` or `\` separated) is dropped, then the
    /// basename must match `[A-Za-z0-9._\- ]+` and must not be made only of dots.
    pub fn parse(raw: &str) -> Result<Self, IdentifierError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(IdentifierError::FileNameRequired);
        }

        let base = basename(trimmed);
        if base.is_empty() || !base.chars().all(is_file_name_char) {
            return Err(IdentifierError::FileNameInvalid);
        }
        if base.chars().all(|c| c == '.') {
            return Err(IdentifierError::FileNameTraversal);
        }

        Ok(Self(base.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Lowercased text after the last `.`, if any.
    pub fn extension(&self) -> Option<String> {
        self.0
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
    }
}

impl fmt::Display for FileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Last segment after splitting on `/` and then on `\`.
fn basename(path: &str) -> &str {
    let after_slash = path.rsplit('/').next().unwrap_or(path);
    after_slash.rsplit('\\').next().unwrap_or(after_slash)
}

fn is_case_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-'
}

fn is_file_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-' | ' ')
}
