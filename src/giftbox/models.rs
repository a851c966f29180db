//! Gift-Box Builder Models
//!
//! Inputs for assembling a custom gift box and the pricing quote shown
//! while the customer is still selecting.

use serde::{Deserialize, Serialize};

/// Input for `POST /gift_boxes`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildGiftBoxInput {
    /// Display name for the box
    pub name: String,

    /// Catalog ids of the selected products, in selection order
    pub product_ids: Vec<u32>,
}

/// Input for `POST /gift_boxes/quote`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteInput {
    /// Catalog ids of the selected products
    pub product_ids: Vec<u32>,
}

/// Live pricing for a selection, before the box is assembled
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct GiftBoxQuote {
    /// Sum of selected product prices
    pub subtotal: u32,

    /// Flat discount on the subtotal
    pub discount: u32,

    /// `subtotal - discount`
    pub total: u32,
}
