use crate::domain::model::{Category, CategoryInput, Product, ProductInput};
use crate::transport::http::handlers::common::{method_not_allowed, route_not_found};
use crate::transport::http::handlers::{categories, health, products};
use crate::transport::http::types::{ApiResponse, AppState, HealthStatus, MessageResponse};
use axum::routing::{get, MethodRouter};
use axum::Router;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        categories::list_categories_handler,
        categories::create_category_handler,
        categories::get_category_handler,
        categories::update_category_handler,
        categories::delete_category_handler,
        products::list_products_handler,
        products::create_product_handler,
        products::get_product_handler,
        products::update_product_handler,
        products::delete_product_handler
    ),
    components(schemas(
        ApiResponse,
        HealthStatus,
        MessageResponse,
        Category,
        CategoryInput,
        Product,
        ProductInput
    )),
    tags(
        (name = "health", description = "Service and database reachability"),
        (name = "categories", description = "Category CRUD"),
        (name = "products", description = "Product CRUD")
    )
)]
#[allow(dead_code)]
pub struct ApiDoc;

fn category_item_routes() -> MethodRouter<AppState> {
    get(categories::get_category_handler)
        .put(categories::update_category_handler)
        .delete(categories::delete_category_handler)
        .fallback(method_not_allowed)
}

fn product_item_routes() -> MethodRouter<AppState> {
    get(products::get_product_handler)
        .put(products::update_product_handler)
        .delete(products::delete_product_handler)
        .fallback(method_not_allowed)
}

/// Static route table. Unsupported methods on a known path answer 405, unknown paths 404,
/// both in the response envelope. The bare `/api/<resource>/` path shares the item routes
/// so a missing identifier is reported as an invalid one.
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/health",
            get(health::healthcheck_handler).fallback(method_not_allowed),
        )
        .route(
            "/api/categories",
            get(categories::list_categories_handler)
                .post(categories::create_category_handler)
                .fallback(method_not_allowed),
        )
        .route("/api/categories/", category_item_routes())
        .route("/api/categories/:id", category_item_routes())
        .route(
            "/api/products",
            get(products::list_products_handler)
                .post(products::create_product_handler)
                .fallback(method_not_allowed),
        )
        .route("/api/products/", product_item_routes())
        .route("/api/products/:id", product_item_routes())
        .fallback(route_not_found)
        .with_state(app_state)
}
