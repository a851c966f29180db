//! REST API handlers for the gift-box builder
//!
//! The builder is the sole pricing authority: it validates the selection,
//! prices it, and hands a fully-formed box to the cart store. Validation
//! lives here on purpose; the store itself accepts any box it is given.

use super::{models::*, pricing};
use crate::cart::handlers::cart_response;
use crate::cart::helpers::resolve_session_id;
use crate::cart::state::SharedState;
use crate::catalog::{product_by_id, Product};
use crate::error::ApiError;
use axum::{
    extract::State,
    http::HeaderMap,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};

/// Creates routes for gift-box assembly
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/gift_boxes", post(create_gift_box))
        .route("/gift_boxes/quote", post(quote_gift_box))
}

/// Resolves a selection of catalog ids, rejecting unknown and repeated ids.
///
/// The builder UI is toggle-based, so a well-behaved collaborator never
/// sends the same product twice; a repeat here means a broken caller.
fn resolve_selection(product_ids: &[u32]) -> Result<Vec<Product>, ApiError> {
    let mut products = Vec::with_capacity(product_ids.len());
    for (idx, id) in product_ids.iter().enumerate() {
        if product_ids[..idx].contains(id) {
            return Err(ApiError::DuplicateSelection(*id));
        }
        let product = product_by_id(*id).ok_or(ApiError::UnknownProduct(*id))?;
        products.push(product.clone());
    }
    Ok(products)
}

/// Endpoint: POST /gift_boxes
/// Validates and prices a selection, assembles the box and adds it to the
/// session's cart. Returns the updated cart view.
async fn create_gift_box(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(payload): Json<BuildGiftBoxInput>,
) -> Result<Response, ApiError> {
    let (session_id, is_new_session) = resolve_session_id(&headers);

    let name = payload.name.trim();
    if name.is_empty() {
        return Err(ApiError::UnnamedGiftBox);
    }
    if payload.product_ids.is_empty() {
        return Err(ApiError::EmptySelection);
    }

    let products = resolve_selection(&payload.product_ids)?;
    let gift_box = pricing::build(name, products);

    tracing::info!(
        session = %session_id,
        name = %gift_box.name,
        total = gift_box.total,
        "gift box assembled"
    );

    state
        .carts
        .entry(session_id.clone())
        .or_default()
        .add_gift_box(gift_box);

    Ok(cart_response(&state, &session_id, is_new_session))
}

/// Endpoint: POST /gift_boxes/quote
/// Live pricing preview for an in-progress selection; no cart mutation.
/// An empty selection is fine here and prices to zero.
async fn quote_gift_box(Json(payload): Json<QuoteInput>) -> Result<Response, ApiError> {
    let products = resolve_selection(&payload.product_ids)?;
    Ok(Json(pricing::quote(&products)).into_response())
}
