//! Gift-Box Pricing
//!
//! A custom gift box is priced once, at assembly: the constituent prices
//! are summed and a flat 10% discount comes off the top. The result is
//! frozen on the box; the cart never reprices it.

use super::models::GiftBoxQuote;
use crate::cart::GiftBox;
use crate::catalog::Product;
use uuid::Uuid;

/// Flat discount rate applied to every custom gift box, in percent
pub const DISCOUNT_PERCENT: u32 = 10;

/// Discount on a subtotal, rounded half-up to the nearest whole rupee.
///
/// Prices are whole rupees, so this is the only place fractional
/// arithmetic occurs; it is done in integer math to keep the half-up
/// rounding exact (e.g. subtotal 787 -> 78.7 -> 79, and the 785 -> 78.5
/// tie also rounds up to 79).
pub fn discount_for(subtotal: u32) -> u32 {
    (subtotal * DISCOUNT_PERCENT + 50) / 100
}

/// Prices a selection of products
pub fn quote(products: &[Product]) -> GiftBoxQuote {
    let subtotal: u32 = products.iter().map(|p| p.price).sum();
    let discount = discount_for(subtotal);
    GiftBoxQuote {
        subtotal,
        discount,
        total: subtotal - discount,
    }
}

/// Assembles a fully-formed gift box from a validated selection.
///
/// The box gets a fresh unique id and carries its pricing immutably from
/// here on.
pub fn build(name: &str, products: Vec<Product>) -> GiftBox {
    let priced = quote(&products);
    GiftBox {
        id: format!("giftbox-{}", Uuid::new_v4().simple()),
        name: name.to_string(),
        products,
        subtotal: priced.subtotal,
        discount: priced.discount,
        total: priced.total,
    }
}
