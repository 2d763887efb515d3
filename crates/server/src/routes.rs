use axum::{
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::{Health, Welcome, WELCOME_MESSAGE};

use crate::errors::JsonApiError;
use crate::openapi::ApiDoc;
use crate::state::AppState;

pub mod items;
pub mod stores;

#[utoipa::path(get, path = "/", tag = "health", responses((status = 200, description = "Welcome message", body = crate::openapi::WelcomeDoc)))]
pub async fn welcome() -> Json<Welcome> {
    Json(Welcome { message: WELCOME_MESSAGE })
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn unknown_route() -> JsonApiError {
    JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", None)
}

/// Build the full application router: catalog routes, docs, CORS and tracing.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    let catalog = Router::new()
        .route("/", get(welcome))
        .route("/health", get(health))
        .route("/stores", get(stores::list_stores))
        .route(
            "/stores/:store_id",
            get(stores::get_store).put(stores::update_store).delete(stores::delete_store),
        )
        .route("/add_store", post(stores::add_store))
        .route("/items", get(items::list_items))
        .route(
            "/items/:item_id",
            get(items::get_item).put(items::update_item).delete(items::delete_item),
        )
        .route("/add_item", post(items::add_item))
        .fallback(unknown_route)
        .with_state(state);

    let docs = SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi());

    catalog
        .merge(docs)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // one span per request, carrying method and path
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // status code and latency
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
