//! Shopping Cart Domain Models
//!
//! Data structures for cart line items, assembled gift boxes, the mutation
//! inputs and the derived cart view returned to UI collaborators.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// One product plus a quantity count held in the cart.
///
/// Line items are keyed by `product.id`; the store guarantees at most one
/// line item per product id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    /// Snapshot of the product as it was first added
    pub product: Product,

    /// Quantity, always at least 1 while the item exists
    pub quantity: u32,
}

/// A named, fixed-price bundle of products assembled once.
///
/// The three monetary fields are computed by the gift-box builder at
/// creation time and stored immutably; the cart never reprices a box.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GiftBox {
    /// Generated unique identifier
    pub id: String,

    /// User-supplied display name
    pub name: String,

    /// Constituent products, in selection order
    pub products: Vec<Product>,

    /// Sum of constituent prices
    pub subtotal: u32,

    /// Flat discount applied at creation
    pub discount: u32,

    /// Final price (`subtotal - discount`)
    pub total: u32,
}

/// Input for `POST /cart/items`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItemInput {
    /// Catalog id of the product to add
    pub product_id: u32,
}

/// Input for `PATCH /cart/items`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuantityInput {
    /// Catalog id of the line item to change
    pub product_id: u32,

    /// Absolute new quantity; zero or negative removes the line item
    pub quantity: i32,
}

/// Derived snapshot of the cart returned to UI collaborators
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    /// Line items in first-add order
    pub items: Vec<CartLineItem>,

    /// Gift boxes in creation order
    pub gift_boxes: Vec<GiftBox>,

    /// Total unit count; each gift box counts as one unit
    pub cart_count: u64,

    /// Total price in whole rupees
    pub cart_total: u64,
}
