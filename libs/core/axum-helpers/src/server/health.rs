use axum::{Json, Router, routing::get};
use serde::Serialize;
use utoipa::ToSchema;

/// Liveness response served at `/health`.
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
    pub name: &'static str,
    pub version: &'static str,
}

/// Creates a router exposing a `/health` liveness endpoint.
///
/// # Arguments
/// * `name` - Application name (typically `env!("CARGO_PKG_NAME")`)
/// * `version` - Application version (typically `env!("CARGO_PKG_VERSION")`)
pub fn health_router(name: &'static str, version: &'static str) -> Router {
    Router::new().route(
        "/health",
        get(move || async move {
            Json(HealthResponse {
                status: "ok",
                name,
                version,
            })
        }),
    )
}
