use axum::extract::multipart::{Multipart, MultipartError};
use axum::http::{header, StatusCode};
use bytes::{Bytes, BytesMut};

use crate::error::{AppError, Result};

/// A single file part read fully into memory
#[derive(Debug, Clone)]
pub struct UploadedPart {
    pub field_name: String,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub data: Bytes,
}

impl UploadedPart {
    /// Declared media type of the part, exactly as sent by the client.
    /// The bytes are not sniffed, a misreported type is stored as-is.
    pub fn media_type(&self) -> Result<&str> {
        match self.content_type.as_deref() {
            Some(media_type) if !media_type.trim().is_empty() => Ok(media_type),
            _ => Err(AppError::MissingContentType(self.field_name.clone())),
        }
    }
}

/// Upload parsing service
pub struct UploadService;

impl UploadService {
    /// Read the first field called `field_name` from a multipart body.
    ///
    /// At most `max_bytes` of file data are buffered; one byte more aborts the
    /// read with `PayloadTooLarge`. Any read error, including the client going
    /// away mid-body, aborts with `MalformedRequest`.
    pub async fn read_file_field(
        multipart: &mut Multipart,
        field_name: &str,
        max_bytes: usize,
    ) -> Result<UploadedPart> {
        while let Some(mut field) = multipart
            .next_field()
            .await
            .map_err(|e| Self::multipart_error(e, max_bytes))?
        {
            if field.name() != Some(field_name) {
                continue;
            }

            let file_name = field.file_name().map(|s| s.to_string());
            // Raw header value; the parsed mime lowercases and re-renders parameters
            let content_type = field
                .headers()
                .get(header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(|s| s.to_string());

            let mut buf = BytesMut::new();
            while let Some(chunk) = field
                .chunk()
                .await
                .map_err(|e| Self::multipart_error(e, max_bytes))?
            {
                if buf.len() + chunk.len() > max_bytes {
                    return Err(AppError::PayloadTooLarge(max_bytes));
                }
                buf.extend_from_slice(&chunk);
            }

            return Ok(UploadedPart {
                field_name: field_name.to_string(),
                file_name,
                content_type,
                data: buf.freeze(),
            });
        }

        Err(AppError::FieldNotFound(field_name.to_string()))
    }

    fn multipart_error(err: MultipartError, max_bytes: usize) -> AppError {
        // The request body limit surfaces here as a 413
        if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge(max_bytes)
        } else {
            AppError::MalformedRequest(err.body_text())
        }
    }
}
