//! OpenAPI document. Records are open-ended JSON objects; the doc structs only
//! describe the server-assigned fields and a typical `name`.
#![allow(non_snake_case)]

use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct WelcomeDoc { pub message: String }

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String }

#[derive(ToSchema)]
pub struct StoreInputDoc { pub name: Option<String> }

#[derive(ToSchema)]
pub struct StoreDoc { pub name: Option<String>, pub Store_ID: String }

#[derive(ToSchema)]
pub struct DeletedStoreDoc { pub message: String, pub store: StoreDoc }

#[derive(ToSchema)]
pub struct ItemInputDoc { pub name: Option<String>, pub Store_ID: Option<String> }

#[derive(ToSchema)]
pub struct ItemDoc { pub name: Option<String>, pub Store_ID: Option<String>, pub Item_ID: String }

#[derive(ToSchema)]
pub struct DeletedItemDoc { pub message: String, pub item: ItemDoc }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::welcome,
        crate::routes::health,
        crate::routes::stores::list_stores,
        crate::routes::stores::get_store,
        crate::routes::stores::add_store,
        crate::routes::stores::update_store,
        crate::routes::stores::delete_store,
        crate::routes::items::list_items,
        crate::routes::items::get_item,
        crate::routes::items::add_item,
        crate::routes::items::update_item,
        crate::routes::items::delete_item,
    ),
    components(
        schemas(
            HealthResponse,
            WelcomeDoc,
            ErrorDoc,
            StoreInputDoc,
            StoreDoc,
            DeletedStoreDoc,
            ItemInputDoc,
            ItemDoc,
            DeletedItemDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "stores"),
        (name = "items")
    )
)]
pub struct ApiDoc;
