use crate::domain::model::CategoryInput;
use crate::transport::http::handlers::common::{
    app_error_response, data_response, message_response, parse_body, parse_id, Operation,
    CATEGORY,
};
use crate::transport::http::types::{ApiResponse, AppState};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;

#[utoipa::path(
    get,
    path = "/api/categories",
    tag = "categories",
    responses(
        (status = 200, description = "All categories", body = ApiResponse),
        (status = 500, description = "Failed to fetch categories", body = ApiResponse)
    )
)]
pub async fn list_categories_handler(State(state): State<AppState>) -> Response {
    match state.category_service.get_all().await {
        Ok(categories) => data_response(StatusCode::OK, &categories),
        Err(e) => app_error_response(CATEGORY, Operation::List, e),
    }
}

#[utoipa::path(
    post,
    path = "/api/categories",
    tag = "categories",
    request_body = CategoryInput,
    responses(
        (status = 201, description = "Category created", body = ApiResponse),
        (status = 400, description = "Invalid request body", body = ApiResponse)
    )
)]
pub async fn create_category_handler(
    State(state): State<AppState>,
    body: Result<Json<CategoryInput>, JsonRejection>,
) -> Response {
    let input = match parse_body(body) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match state.category_service.create(input).await {
        Ok(category) => {
            tracing::info!(id = category.id, "category created");
            data_response(StatusCode::CREATED, &category)
        }
        Err(e) => app_error_response(CATEGORY, Operation::Create, e),
    }
}

#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    tag = "categories",
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category", body = ApiResponse),
        (status = 400, description = "Invalid category ID", body = ApiResponse),
        (status = 404, description = "Category not found", body = ApiResponse)
    )
)]
pub async fn get_category_handler(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Response {
    let id = match parse_id(CATEGORY, id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match state.category_service.get_by_id(id).await {
        Ok(category) => data_response(StatusCode::OK, &category),
        Err(e) => app_error_response(CATEGORY, Operation::Get, e),
    }
}

#[utoipa::path(
    put,
    path = "/api/categories/{id}",
    tag = "categories",
    params(("id" = i32, Path, description = "Category ID")),
    request_body = CategoryInput,
    responses(
        (status = 200, description = "Category updated", body = ApiResponse),
        (status = 400, description = "Invalid category ID or request body", body = ApiResponse),
        (status = 404, description = "Category not found", body = ApiResponse)
    )
)]
pub async fn update_category_handler(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    body: Result<Json<CategoryInput>, JsonRejection>,
) -> Response {
    let id = match parse_id(CATEGORY, id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let input = match parse_body(body) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match state.category_service.update(id, input).await {
        Ok(category) => data_response(StatusCode::OK, &category),
        Err(e) => app_error_response(CATEGORY, Operation::Update, e),
    }
}

#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    tag = "categories",
    params(("id" = i32, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Category deleted successfully", body = ApiResponse),
        (status = 400, description = "Invalid category ID", body = ApiResponse),
        (status = 404, description = "Category not found", body = ApiResponse),
        (status = 409, description = "Category is still referenced by products", body = ApiResponse),
        (status = 500, description = "Failed to delete category", body = ApiResponse)
    )
)]
pub async fn delete_category_handler(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Response {
    let id = match parse_id(CATEGORY, id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match state.category_service.delete(id).await {
        Ok(()) => {
            tracing::info!(id, "category deleted");
            message_response("Category deleted successfully".to_string())
        }
        Err(e) => app_error_response(CATEGORY, Operation::Delete, e),
    }
}
