use crate::domain::error::AppError;
use crate::transport::http::types::{ApiResponse, MessageResponse};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Naming used in the messages of one REST resource.
#[derive(Debug, Clone, Copy)]
pub struct Resource {
    pub title: &'static str,
    pub singular: &'static str,
    pub plural: &'static str,
}

pub const CATEGORY: Resource = Resource {
    title: "Category",
    singular: "category",
    plural: "categories",
};

pub const PRODUCT: Resource = Resource {
    title: "Product",
    singular: "product",
    plural: "products",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl Operation {
    fn failure_status(self) -> StatusCode {
        match self {
            Operation::Create | Operation::Update => StatusCode::BAD_REQUEST,
            Operation::List | Operation::Get | Operation::Delete => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn failure_message(self, resource: Resource) -> String {
        match self {
            Operation::List => format!("Failed to fetch {}", resource.plural),
            Operation::Get => format!("Failed to fetch {}", resource.singular),
            Operation::Create => format!("Failed to create {}", resource.singular),
            Operation::Update => format!("Failed to update {}", resource.singular),
            Operation::Delete => format!("Failed to delete {}", resource.singular),
        }
    }
}

pub fn data_response<T: Serialize>(status: StatusCode, data: &T) -> Response {
    match serde_json::to_value(data) {
        Ok(value) => (status, Json(ApiResponse::ok(value))).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "failed to encode response body");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to encode response")
        }
    }
}

pub fn message_response(message: String) -> Response {
    data_response(StatusCode::OK, &MessageResponse { message })
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ApiResponse::err(message))).into_response()
}

/// Maps a business/persistence error to the status and message shown to the client.
pub fn error_status(resource: Resource, op: Operation, err: &AppError) -> (StatusCode, String) {
    match err {
        AppError::NotFound => (StatusCode::NOT_FOUND, format!("{} not found", resource.title)),
        AppError::CategoryNotFound => (StatusCode::BAD_REQUEST, "Category not found".to_string()),
        AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        AppError::Conflict(_) => (
            StatusCode::CONFLICT,
            format!("{} is still referenced by products", resource.title),
        ),
        AppError::Database(_) | AppError::Internal(_) => {
            (op.failure_status(), op.failure_message(resource))
        }
    }
}

/// Logs `err` and renders it in the envelope. This is the only place errors become HTTP.
pub fn app_error_response(resource: Resource, op: Operation, err: AppError) -> Response {
    let (status, message) = error_status(resource, op, &err);
    if status.is_server_error() || matches!(err, AppError::Database(_) | AppError::Internal(_)) {
        tracing::error!(error = %err, resource = resource.plural, ?op, %status, "request failed");
    } else {
        tracing::debug!(error = %err, resource = resource.plural, ?op, %status, "request rejected");
    }
    error_response(status, message)
}

pub fn parse_id(
    resource: Resource,
    id: Result<Path<i32>, PathRejection>,
) -> Result<i32, Response> {
    id.map(|Path(id)| id).map_err(|e| {
        tracing::debug!(error = %e, resource = resource.plural, "invalid path identifier");
        error_response(
            StatusCode::BAD_REQUEST,
            format!("Invalid {} ID", resource.singular),
        )
    })
}

pub fn parse_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, Response> {
    body.map(|Json(v)| v).map_err(|e| {
        tracing::debug!(error = %e, "invalid request body");
        error_response(StatusCode::BAD_REQUEST, "Invalid request body")
    })
}

pub async fn method_not_allowed() -> Response {
    error_response(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}

pub async fn route_not_found() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_failures_are_client_errors_and_reads_are_server_errors() {
        let err = AppError::Internal("boom".to_string());
        assert_eq!(
            error_status(PRODUCT, Operation::Create, &err),
            (StatusCode::BAD_REQUEST, "Failed to create product".to_string())
        );
        assert_eq!(
            error_status(CATEGORY, Operation::Update, &err).0,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            error_status(CATEGORY, Operation::List, &err),
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch categories".to_string()
            )
        );
        assert_eq!(
            error_status(PRODUCT, Operation::Get, &err).0,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn not_found_names_the_resource() {
        assert_eq!(
            error_status(PRODUCT, Operation::Get, &AppError::NotFound),
            (StatusCode::NOT_FOUND, "Product not found".to_string())
        );
    }

    #[test]
    fn category_not_found_is_a_bad_request() {
        assert_eq!(
            error_status(PRODUCT, Operation::Update, &AppError::CategoryNotFound),
            (StatusCode::BAD_REQUEST, "Category not found".to_string())
        );
    }

    #[test]
    fn conflict_maps_to_409() {
        let err = AppError::Conflict("category 1 is still referenced by products".to_string());
        assert_eq!(
            error_status(CATEGORY, Operation::Delete, &err),
            (
                StatusCode::CONFLICT,
                "Category is still referenced by products".to_string()
            )
        );
    }
}
