use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use service::catalog::{record::into_record, Record};

use crate::errors::JsonApiError;
use crate::state::AppState;

#[utoipa::path(get, path = "/items", tag = "items", responses((status = 200, description = "All items", body = [crate::openapi::ItemDoc])))]
pub async fn list_items(State(state): State<AppState>) -> Json<Vec<Record>> {
    Json(state.catalog.list_items().await)
}

#[utoipa::path(
    get, path = "/items/{item_id}", tag = "items",
    params(("item_id" = String, Path, description = "Item identifier")),
    responses(
        (status = 200, description = "Item", body = crate::openapi::ItemDoc),
        (status = 404, description = "Item not found", body = crate::openapi::ErrorDoc),
    )
)]
pub async fn get_item(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
) -> Result<Json<Record>, JsonApiError> {
    Ok(Json(state.catalog.get_item(&item_id).await?))
}

/// Create an item. `Store_ID` must name an existing store unless
/// `catalog.item_requires_store` is off.
#[utoipa::path(
    post, path = "/add_item", tag = "items",
    request_body = crate::openapi::ItemInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ItemDoc),
        (status = 400, description = "Missing Store_ID or body is not a JSON object", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Store not found", body = crate::openapi::ErrorDoc),
    )
)]
pub async fn add_item(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Record>), JsonApiError> {
    let Json(value) = body?;
    let created = state.catalog.add_item(into_record(value)?).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

#[utoipa::path(
    put, path = "/items/{item_id}", tag = "items",
    params(("item_id" = String, Path, description = "Item identifier")),
    request_body = crate::openapi::ItemInputDoc,
    responses(
        (status = 200, description = "Merged item", body = crate::openapi::ItemDoc),
        (status = 400, description = "Body is not a JSON object", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Item or referenced store not found", body = crate::openapi::ErrorDoc),
    )
)]
pub async fn update_item(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Record>, JsonApiError> {
    let Json(value) = body?;
    let merged = state.catalog.update_item(&item_id, into_record(value)?).await?;
    Ok(Json(merged))
}

#[utoipa::path(
    delete, path = "/items/{item_id}", tag = "items",
    params(("item_id" = String, Path, description = "Item identifier")),
    responses(
        (status = 200, description = "Deleted item", body = crate::openapi::DeletedItemDoc),
        (status = 404, description = "Item not found", body = crate::openapi::ErrorDoc),
    )
)]
pub async fn delete_item(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
) -> Result<Json<Value>, JsonApiError> {
    let removed = state.catalog.delete_item(&item_id).await?;
    Ok(Json(json!({ "message": "Item deleted", "item": removed })))
}
