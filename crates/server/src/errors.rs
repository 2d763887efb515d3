use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use tracing::{debug, error};

/// JSON error payload: `{"error": "<message>"}` with a matching status line.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub error: &'static str,
    pub message: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, error: &'static str, message: Option<String>) -> Self {
        Self { status, error, message }
    }

    pub fn body_text(&self) -> &str {
        self.message.as_deref().unwrap_or(self.error)
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, error = self.error, message = ?self.message, "request failed");
        } else {
            debug!(status = %self.status, error = self.error, message = ?self.message, "request rejected");
        }
        let body = serde_json::json!({ "error": self.body_text() });
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for JsonApiError {
    fn from(e: ServiceError) -> Self {
        let (status, title) = match e {
            ServiceError::NotFound(_) => (StatusCode::NOT_FOUND, "Not Found"),
            ServiceError::Validation(_) => (StatusCode::BAD_REQUEST, "Validation Error"),
        };
        JsonApiError::new(status, title, Some(e.message().to_string()))
    }
}

// 请求体无法解析时沿用 axum 给出的状态码（400/413/415/422），但统一输出 JSON 错误体
impl From<JsonRejection> for JsonApiError {
    fn from(rejection: JsonRejection) -> Self {
        let status = rejection.status();
        let title = status.canonical_reason().unwrap_or("Bad Request");
        JsonApiError::new(status, title, Some(rejection.body_text()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_errors_map_to_status() {
        let nf: JsonApiError = ServiceError::not_found("Store").into();
        assert_eq!(nf.status, StatusCode::NOT_FOUND);
        assert_eq!(nf.body_text(), "Store not found");

        let bad: JsonApiError = ServiceError::Validation("Store_ID is required".into()).into();
        assert_eq!(bad.status, StatusCode::BAD_REQUEST);
        assert_eq!(bad.body_text(), "Store_ID is required");
    }

    #[test]
    fn falls_back_to_title_without_message() {
        let e = JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", None);
        assert_eq!(e.body_text(), "Not Found");
        assert_eq!(e.into_response().status(), StatusCode::NOT_FOUND);
    }
}
