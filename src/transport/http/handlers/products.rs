use crate::domain::model::ProductInput;
use crate::transport::http::handlers::common::{
    app_error_response, data_response, message_response, parse_body, parse_id, Operation,
    PRODUCT,
};
use crate::transport::http::types::{ApiResponse, AppState};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use axum::Json;

#[utoipa::path(
    get,
    path = "/api/products",
    tag = "products",
    responses(
        (status = 200, description = "All products, each with its category", body = ApiResponse),
        (status = 500, description = "Failed to fetch products", body = ApiResponse)
    )
)]
pub async fn list_products_handler(State(state): State<AppState>) -> Response {
    match state.product_service.get_all().await {
        Ok(products) => data_response(StatusCode::OK, &products),
        Err(e) => app_error_response(PRODUCT, Operation::List, e),
    }
}

#[utoipa::path(
    post,
    path = "/api/products",
    tag = "products",
    request_body = ProductInput,
    responses(
        (status = 201, description = "Product created", body = ApiResponse),
        (status = 400, description = "Invalid request body or category not found", body = ApiResponse)
    )
)]
pub async fn create_product_handler(
    State(state): State<AppState>,
    body: Result<Json<ProductInput>, JsonRejection>,
) -> Response {
    let input = match parse_body(body) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match state.product_service.create(input).await {
        Ok(product) => {
            tracing::info!(id = product.id, category_id = product.category_id, "product created");
            data_response(StatusCode::CREATED, &product)
        }
        Err(e) => app_error_response(PRODUCT, Operation::Create, e),
    }
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = "products",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product", body = ApiResponse),
        (status = 400, description = "Invalid product ID", body = ApiResponse),
        (status = 404, description = "Product not found", body = ApiResponse)
    )
)]
pub async fn get_product_handler(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Response {
    let id = match parse_id(PRODUCT, id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match state.product_service.get_by_id(id).await {
        Ok(product) => data_response(StatusCode::OK, &product),
        Err(e) => app_error_response(PRODUCT, Operation::Get, e),
    }
}

#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = "products",
    params(("id" = i32, Path, description = "Product ID")),
    request_body = ProductInput,
    responses(
        (status = 200, description = "Product updated", body = ApiResponse),
        (status = 400, description = "Invalid product ID, request body or category not found", body = ApiResponse),
        (status = 404, description = "Product not found", body = ApiResponse)
    )
)]
pub async fn update_product_handler(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    body: Result<Json<ProductInput>, JsonRejection>,
) -> Response {
    let id = match parse_id(PRODUCT, id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };
    let input = match parse_body(body) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match state.product_service.update(id, input).await {
        Ok(product) => data_response(StatusCode::OK, &product),
        Err(e) => app_error_response(PRODUCT, Operation::Update, e),
    }
}

#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = "products",
    params(("id" = i32, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product deleted successfully", body = ApiResponse),
        (status = 400, description = "Invalid product ID", body = ApiResponse),
        (status = 404, description = "Product not found", body = ApiResponse),
        (status = 500, description = "Failed to delete product", body = ApiResponse)
    )
)]
pub async fn delete_product_handler(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Response {
    let id = match parse_id(PRODUCT, id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match state.product_service.delete(id).await {
        Ok(()) => {
            tracing::info!(id, "product deleted");
            message_response("Product deleted successfully".to_string())
        }
        Err(e) => app_error_response(PRODUCT, Operation::Delete, e),
    }
}
