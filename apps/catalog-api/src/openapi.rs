use utoipa::OpenApi;

/// Combined API documentation for the catalog service
#[derive(OpenApi)]
#[openapi(
    paths(crate::api::root),
    nest(
        (path = "/items", api = domain_items::handlers::ApiDoc),
        (path = "/image", api = domain_images::handlers::ApiDoc)
    ),
    tags(
        (name = "root", description = "Service greeting")
    )
)]
pub struct ApiDoc;
