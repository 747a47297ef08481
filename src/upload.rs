//! Supporting-document upload policy
//!
//! Object storage itself lives outside this crate. This module is the
//! boundary a file-upload question talks to: it checks a payload against the
//! configured size limit and media-type allow-list and hands back an opaque
//! identifier to store as the answer.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Default maximum upload size (10 MiB)
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Document formats the platform knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Pdf,
    Doc,
    Docx,
    Png,
    Jpeg,
}

impl MediaType {
    pub fn mime(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Doc => "application/msword",
            Self::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Doc => "doc",
            Self::Docx => "docx",
            Self::Png => "png",
            Self::Jpeg => "jpg",
        }
    }

    /// Resolve a declared MIME type
    pub fn from_mime(mime: &str) -> Option<Self> {
        let mime = mime.trim().to_ascii_lowercase();
        [Self::Pdf, Self::Doc, Self::Docx, Self::Png, Self::Jpeg]
            .into_iter()
            .find(|t| t.mime() == mime)
    }

    /// Media types accepted for supporting documents out of the box
    pub fn document_defaults() -> Vec<Self> {
        vec![Self::Pdf, Self::Doc, Self::Docx]
    }
}

/// Why an upload was refused
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadRejection {
    #[error("File is empty")]
    Empty,

    #[error("File is {size} bytes, the limit is {limit} bytes")]
    TooLarge { size: u64, limit: u64 },

    #[error("File type '{0}' is not allowed")]
    DisallowedType(String),
}

/// A file offered for upload
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub filename: String,
    pub media_type: String,
    pub bytes: Vec<u8>,
}

/// A file accepted by the storage collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub id: Uuid,
    pub filename: String,
    pub size: u64,
    pub media_type: MediaType,
}

/// Size limit and allow-list applied to every upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPolicy {
    pub max_bytes: u64,
    pub allowed: Vec<MediaType>,
}

impl UploadPolicy {
    pub fn new(max_bytes: u64, allowed: Vec<MediaType>) -> Self {
        Self { max_bytes, allowed }
    }

    pub fn allows(&self, media_type: MediaType) -> bool {
        self.allowed.contains(&media_type)
    }

    /// Check `request` and assign it an identifier
    pub fn accept(&self, request: &UploadRequest) -> Result<UploadedFile, UploadRejection> {
        let size = request.bytes.len() as u64;
        if size == 0 {
            return Err(UploadRejection::Empty);
        }
        if size > self.max_bytes {
            return Err(UploadRejection::TooLarge {
                size,
                limit: self.max_bytes,
            });
        }
        let media_type = MediaType::from_mime(&request.media_type)
            .filter(|t| self.allows(*t))
            .ok_or_else(|| UploadRejection::DisallowedType(request.media_type.clone()))?;

        let file = UploadedFile {
            id: Uuid::new_v4(),
            filename: request.filename.clone(),
            size,
            media_type,
        };
        tracing::info!(id = %file.id, filename = %file.filename, size, "upload accepted");
        Ok(file)
    }
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_UPLOAD_BYTES, MediaType::document_defaults())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(media_type: &str, size: usize) -> UploadRequest {
        UploadRequest {
            filename: "citation.pdf".to_string(),
            media_type: media_type.to_string(),
            bytes: vec![0u8; size],
        }
    }

    #[test]
    fn test_default_policy() {
        let policy = UploadPolicy::default();
        assert_eq!(policy.max_bytes, DEFAULT_MAX_UPLOAD_BYTES);
        assert!(policy.allows(MediaType::Pdf));
        assert!(policy.allows(MediaType::Docx));
        assert!(!policy.allows(MediaType::Png));
    }

    #[test]
    fn test_accepts_pdf() {
        let file = UploadPolicy::default()
            .accept(&request("application/pdf", 1024))
            .unwrap();
        assert_eq!(file.media_type, MediaType::Pdf);
        assert_eq!(file.size, 1024);
        assert_eq!(file.filename, "citation.pdf");
    }

    #[test]
    fn test_each_upload_gets_a_fresh_id() {
        let policy = UploadPolicy::default();
        let a = policy.accept(&request("application/msword", 10)).unwrap();
        let b = policy.accept(&request("application/msword", 10)).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_rejects_oversize() {
        let policy = UploadPolicy::new(100, MediaType::document_defaults());
        assert_eq!(
            policy.accept(&request("application/pdf", 101)),
            Err(UploadRejection::TooLarge {
                size: 101,
                limit: 100
            })
        );
    }

    #[test]
    fn test_rejects_disallowed_type() {
        let result = UploadPolicy::default().accept(&request("image/png", 10));
        assert_eq!(
            result,
            Err(UploadRejection::DisallowedType("image/png".to_string()))
        );
    }

    #[test]
    fn test_rejects_unknown_type() {
        let result = UploadPolicy::default().accept(&request("text/html", 10));
        assert!(matches!(result, Err(UploadRejection::DisallowedType(_))));
    }

    #[test]
    fn test_rejects_empty() {
        let result = UploadPolicy::default().accept(&request("application/pdf", 0));
        assert_eq!(result, Err(UploadRejection::Empty));
    }

    #[test]
    fn test_mime_lookup_is_case_insensitive() {
        assert_eq!(MediaType::from_mime(" Application/PDF "), Some(MediaType::Pdf));
        assert_eq!(MediaType::from_mime("video/mp4"), None);
    }

    #[test]
    fn test_rejection_messages() {
        let err = UploadRejection::TooLarge { size: 5, limit: 1 };
        assert_eq!(err.to_string(), "File is 5 bytes, the limit is 1 bytes");
    }
}
