//! Product Catalog Module
//!
//! The static, read-only product catalog and everything the storefront does
//! with it: category/price filtering, sorting, trending selection and the
//! gift-box-eligible subset.

pub mod data;
pub mod handlers;
pub mod helpers;
pub mod models;

// Re-export commonly used items for convenience
pub use data::{all_products, product_by_id};
pub use handlers::routes;
pub use models::{Category, Product};
