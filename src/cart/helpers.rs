//! Shopping Cart Business Logic Helpers
//!
//! Session-cookie resolution and cart summary formatting used by the REST
//! handlers.

use super::state::CartStore;
use axum::http::{header, HeaderMap};
use uuid::Uuid;

/// Name of the cookie carrying the session id
pub const SESSION_COOKIE: &str = "cart_session";

/// Resolves the session id from the `Cookie` header, minting a fresh UUID
/// when absent.
///
/// Returns `(session_id, is_new_session)`; callers set the cookie on the
/// response when the session is new.
pub fn resolve_session_id(headers: &HeaderMap) -> (String, bool) {
    let existing = headers
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|cookies| {
            cookies.split(';').map(str::trim).find_map(|pair| {
                pair.strip_prefix(SESSION_COOKIE)
                    .and_then(|rest| rest.strip_prefix('='))
            })
        })
        .filter(|id| !id.is_empty());

    match existing {
        Some(id) => (id.to_string(), false),
        None => (Uuid::new_v4().simple().to_string(), true),
    }
}

/// Builds the `Set-Cookie` value for a freshly minted session id
pub fn session_cookie(session_id: &str) -> String {
    format!("{}={}; Path=/; HttpOnly", SESSION_COOKIE, session_id)
}

/// Produces a human-readable one-line summary of a cart.
///
/// Example output: `"2x Peri Peri Blast Makhana, 1x Salted Perfection + 1 gift box"`.
pub fn format_cart_summary(cart: &CartStore) -> String {
    let items = cart
        .items()
        .iter()
        .map(|i| format!("{}x {}", i.quantity, i.product.name))
        .collect::<Vec<_>>()
        .join(", ");

    match cart.gift_boxes().len() {
        0 if items.is_empty() => "empty".to_string(),
        0 => items,
        n if items.is_empty() => format!("{} gift box(es)", n),
        n => format!("{} + {} gift box(es)", items, n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::product_by_id;
    use axum::http::HeaderValue;

    #[test]
    fn test_resolve_session_id_reads_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; cart_session=abc123"),
        );

        let (id, is_new) = resolve_session_id(&headers);
        assert_eq!(id, "abc123");
        assert!(!is_new);
    }

    #[test]
    fn test_resolve_session_id_mints_when_missing() {
        let headers = HeaderMap::new();
        let (id, is_new) = resolve_session_id(&headers);
        assert!(!id.is_empty());
        assert!(is_new);
    }

    #[test]
    fn test_format_cart_summary() {
        let mut cart = CartStore::new();
        assert_eq!(format_cart_summary(&cart), "empty");

        cart.add_to_cart(product_by_id(1).unwrap().clone());
        cart.add_to_cart(product_by_id(1).unwrap().clone());
        assert_eq!(format_cart_summary(&cart), "2x Peri Peri Blast Makhana");
    }
}
