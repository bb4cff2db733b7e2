//! Response metadata derived from a case file's name.

use super::FileName;

/// Media type used for PDFs.
pub const PDF_MEDIA_TYPE: &str = "application/pdf";

/// Media type for anything without a dedicated mapping.
pub const OCTET_STREAM_MEDIA_TYPE: &str = "application/octet-stream";

/// How a case file should be presented to the browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentDescriptor {
    pub media_type: &'static str,
    pub disposition: String,
}

impl ContentDescriptor {
    /// Describe a file for inline preview.
    pub fn for_file(name: &FileName) -> Self {
        Self {
            media_type: media_type_for_extension(name.extension().as_deref()),
            disposition: format!("inline; filename=\"{}\"", name),
        }
    }
}

/// Map a lowercase extension to a media type.
pub fn media_type_for_extension(ext: Option<&str>) -> &'static str {
    match ext {
        Some("pdf") => PDF_MEDIA_TYPE,
        _ => OCTET_STREAM_MEDIA_TYPE,
    }
}
