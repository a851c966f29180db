//! Gift-Box Builder Module
//!
//! Assembling a custom gift box: selection validation, the flat-discount
//! pricing rule, and the REST handlers the builder UI talks to.

pub mod handlers;
pub mod models;
pub mod pricing;

// Re-export commonly used items for convenience
pub use handlers::routes;
pub use models::GiftBoxQuote;
pub use pricing::DISCOUNT_PERCENT;
