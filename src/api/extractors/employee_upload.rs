//! Multipart employee form extractor.

use axum::{
    async_trait,
    extract::{FromRequest, Multipart, Request},
};

use crate::domain::{EmployeeForm, UploadedImage};
use crate::errors::AppError;

/// Name of the file part carrying the picture
const IMAGE_FIELD: &str = "image";

/// Text fields of an employee form plus the optional picture.
///
/// Nothing is validated here; the service decides which fields are required
/// and whether the picture is acceptable.
#[derive(Debug, Default)]
pub struct EmployeeUpload {
    pub form: EmployeeForm,
    pub image: Option<UploadedImage>,
}

#[async_trait]
impl<S> FromRequest<S> for EmployeeUpload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        let mut upload = EmployeeUpload::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?
        {
            let name = field.name().unwrap_or_default().to_string();

            if name == IMAGE_FIELD {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let content_type = field.content_type().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::bad_request(e.body_text()))?;

                // Browsers send an empty part when no file was picked
                if bytes.is_empty() && file_name.is_empty() {
                    continue;
                }
                upload.image = Some(UploadedImage {
                    content_type,
                    bytes: bytes.to_vec(),
                });
            } else {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::bad_request(e.body_text()))?;
                upload.form.set(&name, value);
            }
        }

        Ok(upload)
    }
}
