use axum::{
    Router,
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::errors::responses::{BadRequestResponse, InternalServerErrorResponse};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ImageResult;
use crate::service::ImageService;

/// OpenAPI documentation for the images API
#[derive(OpenApi)]
#[openapi(
    paths(get_image),
    components(responses(BadRequestResponse, InternalServerErrorResponse)),
    tags(
        (name = "images", description = "Stored image retrieval")
    )
)]
pub struct ApiDoc;

/// Create the images router
pub fn router(service: ImageService) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/{image_filename}", get(get_image))
        .with_state(shared_service)
}

/// Fetch a stored image, falling back to the placeholder when missing
#[utoipa::path(
    get,
    path = "/{image_filename}",
    tag = "images",
    params(
        ("image_filename" = String, Path, description = "Stored image filename, must end in .jpg")
    ),
    responses(
        (status = 200, description = "Image bytes", content_type = "image/jpeg"),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_image(
    State(service): State<Arc<ImageService>>,
    Path(image_filename): Path<String>,
) -> ImageResult<impl IntoResponse> {
    let bytes = service.fetch_image(&image_filename).await?;

    Ok(([(header::CONTENT_TYPE, "image/jpeg")], bytes))
}
