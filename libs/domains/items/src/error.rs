use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ItemError {
    /// Missing or malformed caller-supplied fields, including non-numeric ids.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Valid id with no matching record.
    #[error("item {0} not found")]
    NotFound(i64),

    /// Backing medium cannot be opened or written.
    #[error("item store unavailable: {0}")]
    StorageUnavailable(String),

    /// Persisted data exists but cannot be decoded. Corrupt-but-present
    /// data is a hard failure, distinct from a legitimately empty store.
    #[error("item store corrupted: {0}")]
    CorruptStore(String),
}

pub type ItemResult<T> = Result<T, ItemError>;

/// Convert ItemError to AppError for standardized error responses
impl From<ItemError> for AppError {
    fn from(err: ItemError) -> Self {
        match err {
            ItemError::InvalidInput(msg) => AppError::BadRequest(msg),
            ItemError::NotFound(id) => AppError::NotFound(format!("Item {} not found", id)),
            ItemError::StorageUnavailable(msg) => AppError::ServiceUnavailable(msg),
            ItemError::CorruptStore(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl IntoResponse for ItemError {
    fn into_response(self) -> Response {
        // The boundary contract fixes the 404 body to {"message": "Not found"}.
        if matches!(self, ItemError::NotFound(_)) {
            return (
                StatusCode::NOT_FOUND,
                Json(serde_json::json!({ "message": "Not found" })),
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
    fn not_found_uses_contract_body() {
        let response = ItemError::NotFound(7).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn corrupt_store_is_a_server_error() {
        let response = ItemError::CorruptStore("truncated".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn invalid_input_is_a_client_error() {
        let response = ItemError::InvalidInput("name must not be empty".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
