use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use service::catalog::{record::into_record, Record};

use crate::errors::JsonApiError;
use crate::state::AppState;

/// 列出全部门店
#[utoipa::path(get, path = "/stores", tag = "stores", responses((status = 200, description = "All stores", body = [crate::openapi::StoreDoc])))]
pub async fn list_stores(State(state): State<AppState>) -> Json<Vec<Record>> {
    Json(state.catalog.list_stores().await)
}

/// 获取指定门店
#[utoipa::path(
    get, path = "/stores/{store_id}", tag = "stores",
    params(("store_id" = String, Path, description = "Store identifier")),
    responses(
        (status = 200, description = "Store", body = crate::openapi::StoreDoc),
        (status = 404, description = "Store not found", body = crate::openapi::ErrorDoc),
    )
)]
pub async fn get_store(
    State(state): State<AppState>,
    Path(store_id): Path<String>,
) -> Result<Json<Record>, JsonApiError> {
    Ok(Json(state.catalog.get_store(&store_id).await?))
}

/// 创建门店：服务端生成 Store_ID 并合并进请求体
#[utoipa::path(
    post, path = "/add_store", tag = "stores",
    request_body = crate::openapi::StoreInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::StoreDoc),
        (status = 400, description = "Body is not a JSON object", body = crate::openapi::ErrorDoc),
    )
)]
pub async fn add_store(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Record>), JsonApiError> {
    let Json(value) = body?;
    let created = state.catalog.add_store(into_record(value)?).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// 部分更新门店（浅合并）
#[utoipa::path(
    put, path = "/stores/{store_id}", tag = "stores",
    params(("store_id" = String, Path, description = "Store identifier")),
    request_body = crate::openapi::StoreInputDoc,
    responses(
        (status = 200, description = "Merged store", body = crate::openapi::StoreDoc),
        (status = 400, description = "Body is not a JSON object", body = crate::openapi::ErrorDoc),
        (status = 404, description = "Store not found", body = crate::openapi::ErrorDoc),
    )
)]
pub async fn update_store(
    State(state): State<AppState>,
    Path(store_id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Record>, JsonApiError> {
    let Json(value) = body?;
    let merged = state.catalog.update_store(&store_id, into_record(value)?).await?;
    Ok(Json(merged))
}

/// 删除门店，返回被删除的记录
#[utoipa::path(
    delete, path = "/stores/{store_id}", tag = "stores",
    params(("store_id" = String, Path, description = "Store identifier")),
    responses(
        (status = 200, description = "Deleted store", body = crate::openapi::DeletedStoreDoc),
        (status = 404, description = "Store not found", body = crate::openapi::ErrorDoc),
    )
)]
pub async fn delete_store(
    State(state): State<AppState>,
    Path(store_id): Path<String>,
) -> Result<Json<Value>, JsonApiError> {
    let removed = state.catalog.delete_store(&store_id).await?;
    Ok(Json(json!({ "message": "Store deleted", "store": removed })))
}
