//! Snack Storefront Library
//!
//! In-memory storefront service for a snack-food brand: a static product
//! catalog with browsing, a session-scoped shopping cart, and a
//! build-your-own gift box flow with flat-discount pricing. State lives for
//! one session; nothing persists.

// Domain modules
pub mod cart;
pub mod catalog;
pub mod giftbox;

// Infrastructure
pub mod error;
pub mod router;
