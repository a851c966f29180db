//! REST API handlers for cart operations
//!
//! Session-scoped endpoints over the cart store: viewing the cart, adding
//! and updating line items, removing gift boxes and clearing everything.
//!
//! Apart from adding an unknown product id (a 404 at the HTTP boundary),
//! every operation here is a total function: removals and updates on ids
//! that are not in the cart are silent no-ops, mirroring the store.

use super::{helpers::*, models::*, state::SharedState};
use crate::catalog::product_by_id;
use crate::error::ApiError;
use axum::{
    extract::{Path, State},
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};

/// Creates routes for cart operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/cart", get(view_cart).delete(clear_cart))
        .route("/cart/items", post(add_item).patch(update_item))
        .route("/cart/items/:product_id", delete(remove_item))
        .route("/cart/gift_boxes/:gift_box_id", delete(remove_gift_box))
}

/// Builds the standard cart-view response, setting the session cookie on
/// first contact.
pub(crate) fn cart_response(state: &SharedState, session_id: &str, is_new_session: bool) -> Response {
    let view = state
        .carts
        .get(session_id)
        .map(|cart| cart.view())
        .unwrap_or_default();

    let mut response = Json(view).into_response();
    if is_new_session {
        if let Ok(cookie) = session_cookie(session_id).parse() {
            response.headers_mut().insert(header::SET_COOKIE, cookie);
        }
    }
    response
}

/// Endpoint: GET /cart
/// Current line items, gift boxes and derived aggregates.
async fn view_cart(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    let (session_id, is_new_session) = resolve_session_id(&headers);
    cart_response(&state, &session_id, is_new_session)
}

/// Endpoint: POST /cart/items
/// Adds one unit of a catalog product, merging by product id.
async fn add_item(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(payload): Json<AddItemInput>,
) -> Result<Response, ApiError> {
    let (session_id, is_new_session) = resolve_session_id(&headers);

    let product = product_by_id(payload.product_id)
        .ok_or(ApiError::UnknownProduct(payload.product_id))?;

    state
        .carts
        .entry(session_id.clone())
        .or_default()
        .add_to_cart(product.clone());

    tracing::debug!(session = %session_id, product = %product.name, "added to cart");
    Ok(cart_response(&state, &session_id, is_new_session))
}

/// Endpoint: PATCH /cart/items
/// Sets a line item's quantity; zero or negative removes it. Unknown ids
/// are left alone.
async fn update_item(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(payload): Json<UpdateQuantityInput>,
) -> Response {
    let (session_id, is_new_session) = resolve_session_id(&headers);

    state
        .carts
        .entry(session_id.clone())
        .or_default()
        .update_quantity(payload.product_id, payload.quantity);

    cart_response(&state, &session_id, is_new_session)
}

/// Endpoint: DELETE /cart/items/:product_id
/// Removes a line item; idempotent.
async fn remove_item(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(product_id): Path<u32>,
) -> Response {
    let (session_id, is_new_session) = resolve_session_id(&headers);

    if let Some(mut cart) = state.carts.get_mut(&session_id) {
        cart.remove_from_cart(product_id);
    }

    cart_response(&state, &session_id, is_new_session)
}

/// Endpoint: DELETE /cart/gift_boxes/:gift_box_id
/// Removes an assembled gift box; idempotent.
async fn remove_gift_box(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Path(gift_box_id): Path<String>,
) -> Response {
    let (session_id, is_new_session) = resolve_session_id(&headers);

    if let Some(mut cart) = state.carts.get_mut(&session_id) {
        cart.remove_gift_box(&gift_box_id);
    }

    cart_response(&state, &session_id, is_new_session)
}

/// Endpoint: DELETE /cart
/// Empties the session's cart unconditionally.
async fn clear_cart(State(state): State<SharedState>, headers: HeaderMap) -> Response {
    let (session_id, is_new_session) = resolve_session_id(&headers);

    if let Some(mut cart) = state.carts.get_mut(&session_id) {
        tracing::info!(session = %session_id, cart = %format_cart_summary(&cart), "clearing cart");
        cart.clear();
    }

    cart_response(&state, &session_id, is_new_session)
}
