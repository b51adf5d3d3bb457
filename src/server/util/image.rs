//! Data-URL inlining of uploaded images.
//!
//! Uploaded files are never written to an external blob store. Each one is validated
//! against an allow-list of media types and a per-route size limit, then embedded in
//! the owning document as `data:<media type>;base64,<payload>`.

use base64::{engine::general_purpose, Engine as _};

use crate::server::{error::AppError, util::multipart::UploadedFile};

/// Media types accepted for any uploaded image.
pub const ALLOWED_IMAGE_TYPES: &[&str] = &[
    "image/jpeg",
    "image/png",
    "image/webp",
    "image/gif",
    "image/svg+xml",
];

const MB: usize = 1024 * 1024;

/// Per-file limit for review profile pictures.
pub const PROFILE_IMAGE_LIMIT: usize = 2 * MB;
/// Per-file limit for property, city and banner images.
pub const IMAGE_LIMIT: usize = 5 * MB;
/// Per-file limit for blog background and must-visit images.
pub const BLOG_IMAGE_LIMIT: usize = 10 * MB;

/// An uploaded image converted to its inline text form.
#[derive(Debug, Clone, PartialEq)]
pub struct InlineImage {
    /// `data:<content_type>;base64,<payload>`
    pub data: String,
    /// Normalized media type, e.g. `image/png`.
    pub content_type: String,
}

/// Encodes raw bytes as a data URL for the given media type.
pub fn to_data_url(content_type: &str, bytes: &[u8]) -> String {
    format!(
        "data:{};base64,{}",
        content_type,
        general_purpose::STANDARD.encode(bytes)
    )
}

/// Validates an uploaded file and converts it to an inline image.
///
/// # Arguments
/// - `file` - The uploaded multipart file
/// - `max_bytes` - Largest accepted payload for the route
///
/// # Returns
/// - `Ok(InlineImage)` - The image as a data URL
/// - `Err(AppError::BadRequest)` - Empty file, unsupported media type, or file too large
pub fn ingest(file: &UploadedFile, max_bytes: usize) -> Result<InlineImage, AppError> {
    let content_type = normalize_content_type(&file.content_type);

    if !ALLOWED_IMAGE_TYPES.contains(&content_type.as_str()) {
        return Err(AppError::BadRequest(format!(
            "Unsupported file type '{}' for {}; only JPEG, PNG, WEBP, GIF and SVG images are allowed",
            file.content_type,
            file.display_name()
        )));
    }

    if file.bytes.is_empty() {
        return Err(AppError::BadRequest(format!(
            "Uploaded file {} is empty",
            file.display_name()
        )));
    }

    if file.bytes.len() > max_bytes {
        return Err(AppError::BadRequest(format!(
            "Uploaded file {} exceeds the {} MB limit",
            file.display_name(),
            max_bytes / MB
        )));
    }

    Ok(InlineImage {
        data: to_data_url(&content_type, &file.bytes),
        content_type,
    })
}

/// Ingests every file in order, failing on the first invalid one.
pub fn ingest_all(files: &[UploadedFile], max_bytes: usize) -> Result<Vec<InlineImage>, AppError> {
    files.iter().map(|file| ingest(file, max_bytes)).collect()
}

/// Lowercases a media type and strips parameters such as `; charset=utf-8`.
fn normalize_content_type(raw: &str) -> String {
    raw.split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}
