use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use axum_helpers::{
    ValidatedForm,
    errors::responses::{BadRequestResponse, InternalServerErrorResponse, NotFoundResponse},
};
use serde::Serialize;
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

use crate::error::ItemResult;
use crate::models::{CreateItem, Item, ItemPage};
use crate::repository::ItemRepository;
use crate::service::ItemService;

/// Simple message body used by the add-item response.
#[derive(Serialize, ToSchema)]
pub struct Message {
    pub message: String,
}

/// OpenAPI documentation for the items API
#[derive(OpenApi)]
#[openapi(
    paths(list_items, add_item, get_item),
    components(
        schemas(Item, CreateItem, ItemPage, Message),
        responses(NotFoundResponse, BadRequestResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = "items", description = "Item catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Create the items router with all HTTP endpoints
pub fn router<R: ItemRepository + 'static>(service: ItemService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_items).post(add_item))
        .route("/{item_id}", get(get_item))
        .with_state(shared_service)
}

/// List all items in insertion order
#[utoipa::path(
    get,
    path = "",
    tag = "items",
    responses(
        (status = 200, description = "The full item collection", body = ItemPage),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_items<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
) -> ItemResult<Json<ItemPage>> {
    let page = service.list_items().await?;
    Ok(Json(page))
}

/// Submit a new item
#[utoipa::path(
    post,
    path = "",
    tag = "items",
    request_body(content = CreateItem, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Item received", body = Message),
        (status = 400, response = BadRequestResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn add_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    ValidatedForm(input): ValidatedForm<CreateItem>,
) -> ItemResult<Json<Message>> {
    let item = service.add_item(input).await?;

    Ok(Json(Message {
        message: format!("item received: {}", item.name),
    }))
}

/// Get an item by id
#[utoipa::path(
    get,
    path = "/{item_id}",
    tag = "items",
    params(
        ("item_id" = i64, Path, description = "Item id")
    ),
    responses(
        (status = 200, description = "Item found", body = Item),
        (status = 400, response = BadRequestResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    Path(item_id): Path<String>,
) -> ItemResult<Json<Item>> {
    let item = service.get_item(&item_id).await?;
    Ok(Json(item))
}
