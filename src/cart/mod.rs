//! Shopping Cart Domain Module
//!
//! This module contains all cart business logic, including:
//! - Domain models (CartLineItem, GiftBox, inputs, the derived view)
//! - The session-scoped cart store and its mutation operations
//! - Session-cookie and formatting helpers
//! - REST API handlers

pub mod handlers;
pub mod helpers;
pub mod models;
pub mod state;

// Re-export commonly used types for convenience
pub use handlers::routes;
pub use models::{CartLineItem, CartView, GiftBox};
pub use state::{AppState, CartStore, SharedState};
