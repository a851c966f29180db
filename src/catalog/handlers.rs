//! REST API handlers for catalog browsing
//!
//! Read-only endpoints over the static catalog: listing with filters,
//! trending picks and the gift-box-eligible subset.

use super::{data::all_products, helpers, models::*};
use crate::cart::state::SharedState;
use axum::{extract::Query, response::IntoResponse, routing::get, Json, Router};

/// How many products the trending strip shows
const TRENDING_LIMIT: usize = 6;

/// Creates routes for catalog browsing
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/products", get(list_products))
        .route("/products/trending", get(trending_products))
        .route("/products/giftable", get(giftable_products))
}

/// Endpoint: GET /products
/// Lists catalog products filtered and sorted per query parameters.
async fn list_products(Query(query): Query<ProductQuery>) -> impl IntoResponse {
    let products = helpers::filter_and_sort(all_products(), &query);
    Json(ProductListResponse {
        count: products.len(),
        products,
    })
}

/// Endpoint: GET /products/trending
/// Top products by weighted popularity, for the carousel.
async fn trending_products() -> impl IntoResponse {
    let products = helpers::trending(all_products(), TRENDING_LIMIT);
    Json(ProductListResponse {
        count: products.len(),
        products,
    })
}

/// Endpoint: GET /products/giftable
/// Products selectable in the gift-box builder.
async fn giftable_products() -> impl IntoResponse {
    let products = helpers::giftable(all_products());
    Json(ProductListResponse {
        count: products.len(),
        products,
    })
}
