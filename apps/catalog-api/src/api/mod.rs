use axum::{routing::get, Json, Router};

/// `GET /` greeting, kept for parity with frontend smoke checks.
#[utoipa::path(
    get,
    path = "/",
    tag = "root",
    responses(
        (status = 200, description = "Service greeting")
    )
)]
pub async fn root() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Hello, world!" }))
}

pub fn router() -> Router {
    Router::new().route("/", get(root))
}
