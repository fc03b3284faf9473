//! Employee pictures: accepted as raw JPEG uploads, returned as data URIs.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::Serializer;

use crate::config::JPEG_MIME;
use crate::errors::{AppError, AppResult};

/// A file part pulled off a multipart form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedImage {
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl UploadedImage {
    /// Keep the bytes if the part declares `image/jpeg`.
    pub fn into_jpeg(self) -> AppResult<Vec<u8>> {
        match self.content_type.as_deref() {
            Some(JPEG_MIME) => Ok(self.bytes),
            _ => Err(AppError::validation("Only JPEG images are allowed.")),
        }
    }
}

/// Validate an optional upload.
pub fn accept_jpeg(image: Option<UploadedImage>) -> AppResult<Option<Vec<u8>>> {
    image.map(UploadedImage::into_jpeg).transpose()
}

pub fn to_data_uri(bytes: &[u8]) -> String {
    format!("data:{};base64,{}", JPEG_MIME, STANDARD.encode(bytes))
}

/// serde helper: stored bytes go out as a data URI.
pub fn serialize_data_uri<S>(image: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match image {
        Some(bytes) => serializer.serialize_some(&to_data_uri(bytes)),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn png_is_rejected() {
        let image = UploadedImage {
            content_type: Some("image/png".to_string()),
            bytes: vec![1, 2, 3],
        };
        let err = image.into_jpeg().unwrap_err();
        assert_eq!(err.to_string(), "Only JPEG images are allowed.");
    }

    #[test]
    fn missing_image_is_fine() {
        assert_eq!(accept_jpeg(None).unwrap(), None);
    }

    #[test]
    fn data_uri_round_trips() {
        let bytes = vec![0xFF, 0xD8, 0xFF, 0xE0];
        let uri = to_data_uri(&bytes);
        let encoded = uri.strip_prefix("data:image/jpeg;base64,").unwrap();
        assert_eq!(STANDARD.decode(encoded).unwrap(), bytes);
    }
}
