use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImageError {
    /// Requested filename fails the `.jpg` suffix check.
    #[error("image path does not end with .jpg: {0}")]
    NotJpeg(String),

    /// The default placeholder itself is missing. A deployment error,
    /// reported at resolution time rather than masked.
    #[error("placeholder image missing: {0}")]
    PlaceholderMissing(PathBuf),

    /// The resolved file exists but could not be read.
    #[error("image unreadable: {0}")]
    Unreadable(String),
}

pub type ImageResult<T> = Result<T, ImageError>;

impl From<ImageError> for AppError {
    fn from(err: ImageError) -> Self {
        match err {
            ImageError::NotJpeg(name) => {
                AppError::BadRequest(format!("Image path does not end with .jpg: {}", name))
            }
            ImageError::PlaceholderMissing(path) => {
                AppError::InternalServerError(format!("placeholder image missing: {}", path.display()))
            }
            ImageError::Unreadable(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for ImageError {
    fn into_response(self) -> Response {
        // The boundary contract fixes the suffix-check failure body.
        if matches!(self, ImageError::NotJpeg(_)) {
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "message": "Image path does not end with .jpg" })),
            )
                .into_response();
        }

        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_jpeg_is_bad_request() {
        let response = ImageError::NotJpeg("x.png".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn missing_placeholder_is_a_server_error() {
        let response = ImageError::PlaceholderMissing(PathBuf::from("images/default.jpg"))
            .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
