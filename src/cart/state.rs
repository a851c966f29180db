//! Shopping Cart State Management
//!
//! The cart store owns the two session-scoped collections (line items and
//! gift boxes), applies the mutation operations, and derives the aggregate
//! count and total on every read.

use super::models::{CartLineItem, CartView, GiftBox};
use crate::catalog::Product;
use dashmap::DashMap;
use std::sync::Arc;

/// Shared application state that can be safely passed between threads
pub type SharedState = Arc<AppState>;

/// Core application state: one cart store per session
pub struct AppState {
    /// In-memory cart stores, keyed by session id.
    /// DashMap allows concurrent access without external Mutexes.
    pub carts: DashMap<String, CartStore>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a new AppState with no active sessions
    pub fn new() -> Self {
        Self {
            carts: DashMap::new(),
        }
    }
}

/// A single session's cart: line items plus assembled gift boxes.
///
/// All mutation operations are total: missing ids are silent no-ops and
/// non-positive quantities normalize to removal. UI collaborators rely on
/// these calls being safe to make speculatively, so none of them can fail.
#[derive(Debug, Default, Clone)]
pub struct CartStore {
    items: Vec<CartLineItem>,
    gift_boxes: Vec<GiftBox>,
}

impl CartStore {
    /// Creates an empty cart
    pub fn new() -> Self {
        Self::default()
    }

    /// Line items in first-add order
    pub fn items(&self) -> &[CartLineItem] {
        &self.items
    }

    /// Gift boxes in creation order
    pub fn gift_boxes(&self) -> &[GiftBox] {
        &self.gift_boxes
    }

    /// Adds one unit of `product`.
    ///
    /// If a line item for `product.id` already exists its quantity is
    /// incremented and the stored product snapshot is left untouched;
    /// otherwise a new line item with quantity 1 is appended.
    pub fn add_to_cart(&mut self, product: Product) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            existing.quantity += 1;
        } else {
            self.items.push(CartLineItem {
                product,
                quantity: 1,
            });
        }
    }

    /// Removes the line item for `product_id`, if present
    pub fn remove_from_cart(&mut self, product_id: u32) {
        self.items.retain(|i| i.product.id != product_id);
    }

    /// Sets the line item for `product_id` to exactly `quantity`.
    ///
    /// A quantity of zero or less removes the line item instead. Unknown
    /// ids are left alone.
    pub fn update_quantity(&mut self, product_id: u32, quantity: i32) {
        if quantity <= 0 {
            self.remove_from_cart(product_id);
            return;
        }
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product_id) {
            item.quantity = quantity as u32;
        }
    }

    /// Appends a fully-formed gift box.
    ///
    /// The builder is the sole pricing authority; the store trusts the
    /// `subtotal`/`discount`/`total` it was handed.
    pub fn add_gift_box(&mut self, gift_box: GiftBox) {
        self.gift_boxes.push(gift_box);
    }

    /// Removes the gift box with `gift_box_id`, if present
    pub fn remove_gift_box(&mut self, gift_box_id: &str) {
        self.gift_boxes.retain(|b| b.id != gift_box_id);
    }

    /// Empties both collections
    pub fn clear(&mut self) {
        self.items.clear();
        self.gift_boxes.clear();
    }

    /// Total unit count: sum of line-item quantities plus one per gift box,
    /// recomputed from current state on every call.
    ///
    /// Widened to `u64`: quantities are caller-supplied and may be large,
    /// and the aggregates must never overflow where the operations that
    /// produced them could not fail.
    pub fn cart_count(&self) -> u64 {
        self.items.iter().map(|i| i.quantity as u64).sum::<u64>() + self.gift_boxes.len() as u64
    }

    /// Total price: line items at price x quantity plus gift-box totals,
    /// recomputed from current state on every call. The multiplication is
    /// done in `u64` so an extreme quantity cannot overflow.
    pub fn cart_total(&self) -> u64 {
        let item_total: u64 = self
            .items
            .iter()
            .map(|i| i.product.price as u64 * i.quantity as u64)
            .sum();
        let box_total: u64 = self.gift_boxes.iter().map(|b| b.total as u64).sum();
        item_total + box_total
    }

    /// Snapshot of the cart with its derived aggregates
    pub fn view(&self) -> CartView {
        CartView {
            items: self.items.clone(),
            gift_boxes: self.gift_boxes.clone(),
            cart_count: self.cart_count(),
            cart_total: self.cart_total(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::product_by_id;

    fn sample_box(id: &str, total: u32) -> GiftBox {
        GiftBox {
            id: id.to_string(),
            name: "Festive Mix".to_string(),
            products: vec![product_by_id(2).unwrap().clone()],
            subtotal: total + 50,
            discount: 50,
            total,
        }
    }

    #[test]
    fn test_repeated_add_merges_into_one_line_item() {
        let mut cart = CartStore::new();
        let peri_peri = product_by_id(1).unwrap().clone();

        for _ in 0..4 {
            cart.add_to_cart(peri_peri.clone());
        }

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 4);
        assert_eq!(cart.items()[0].product.id, 1);
    }

    #[test]
    fn test_add_preserves_first_add_order() {
        let mut cart = CartStore::new();
        cart.add_to_cart(product_by_id(3).unwrap().clone());
        cart.add_to_cart(product_by_id(1).unwrap().clone());
        cart.add_to_cart(product_by_id(3).unwrap().clone());

        let ids: Vec<u32> = cart.items().iter().map(|i| i.product.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_update_quantity_sets_absolute_value() {
        let mut cart = CartStore::new();
        cart.add_to_cart(product_by_id(1).unwrap().clone());
        cart.add_to_cart(product_by_id(1).unwrap().clone());

        cart.update_quantity(1, 7);
        assert_eq!(cart.items()[0].quantity, 7);
    }

    #[test]
    fn test_non_positive_quantity_removes_line_item() {
        let mut cart = CartStore::new();
        cart.add_to_cart(product_by_id(1).unwrap().clone());
        cart.update_quantity(1, 0);
        assert!(cart.items().is_empty());

        cart.add_to_cart(product_by_id(1).unwrap().clone());
        cart.update_quantity(1, -5);
        assert!(cart.items().is_empty());

        // No-op on an id that is not in the cart.
        cart.update_quantity(999, 0);
        cart.update_quantity(999, -5);
        assert!(cart.items().is_empty());
    }

    #[test]
    fn test_update_quantity_ignores_unknown_id() {
        let mut cart = CartStore::new();
        cart.add_to_cart(product_by_id(2).unwrap().clone());
        cart.update_quantity(999, 3);

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 1);
    }

    #[test]
    fn test_remove_from_cart_is_idempotent() {
        let mut cart = CartStore::new();
        cart.add_to_cart(product_by_id(1).unwrap().clone());
        cart.add_to_cart(product_by_id(2).unwrap().clone());

        cart.remove_from_cart(1);
        let after_first: Vec<u32> = cart.items().iter().map(|i| i.product.id).collect();
        cart.remove_from_cart(1);
        let after_second: Vec<u32> = cart.items().iter().map(|i| i.product.id).collect();

        assert_eq!(after_first, vec![2]);
        assert_eq!(after_first, after_second);
    }

    #[test]
    fn test_cart_count_counts_boxes_as_one_unit() {
        let mut cart = CartStore::new();
        // Product A twice, product B once, one gift box: 2 + 1 + 1 = 4.
        cart.add_to_cart(product_by_id(1).unwrap().clone());
        cart.add_to_cart(product_by_id(1).unwrap().clone());
        cart.add_to_cart(product_by_id(2).unwrap().clone());
        cart.add_gift_box(sample_box("giftbox-a", 450));

        assert_eq!(cart.cart_count(), 4);
    }

    #[test]
    fn test_cart_total_sums_items_and_boxes() {
        let mut cart = CartStore::new();
        // Peri Peri is priced 279; quantity 2 plus a 450 box = 1008.
        cart.add_to_cart(product_by_id(1).unwrap().clone());
        cart.add_to_cart(product_by_id(1).unwrap().clone());
        cart.add_gift_box(sample_box("giftbox-a", 450));

        assert_eq!(cart.cart_total(), 279 * 2 + 450);
    }

    #[test]
    fn test_aggregates_handle_extreme_quantities() {
        let mut cart = CartStore::new();
        cart.add_to_cart(product_by_id(1).unwrap().clone());
        cart.update_quantity(1, i32::MAX);

        // price 279 at the largest quantity the API admits; the widened
        // aggregates must stay exact instead of wrapping.
        assert_eq!(cart.cart_count(), i32::MAX as u64);
        assert_eq!(cart.cart_total(), 279u64 * i32::MAX as u64);
    }

    #[test]
    fn test_clear_resets_aggregates_to_zero() {
        let mut cart = CartStore::new();
        cart.add_to_cart(product_by_id(1).unwrap().clone());
        cart.add_gift_box(sample_box("giftbox-a", 450));

        cart.clear();

        assert_eq!(cart.cart_count(), 0);
        assert_eq!(cart.cart_total(), 0);
        assert!(cart.items().is_empty());
        assert!(cart.gift_boxes().is_empty());
    }

    #[test]
    fn test_gift_box_round_trip_preserves_order() {
        let mut cart = CartStore::new();
        cart.add_gift_box(sample_box("giftbox-a", 450));
        cart.add_gift_box(sample_box("giftbox-b", 300));

        let before: Vec<String> = cart.gift_boxes().iter().map(|b| b.id.clone()).collect();

        cart.add_gift_box(sample_box("giftbox-c", 200));
        assert_eq!(cart.gift_boxes().len(), 3);
        assert_eq!(cart.gift_boxes()[2].id, "giftbox-c");

        cart.remove_gift_box("giftbox-c");
        let after: Vec<String> = cart.gift_boxes().iter().map(|b| b.id.clone()).collect();
        assert_eq!(before, after);

        // Removing an id twice has the same effect as removing it once.
        cart.remove_gift_box("giftbox-c");
        assert_eq!(cart.gift_boxes().len(), 2);
    }

    #[test]
    fn test_view_reflects_current_state() {
        let mut cart = CartStore::new();
        cart.add_to_cart(product_by_id(5).unwrap().clone());

        let view = cart.view();
        assert_eq!(view.cart_count, 1);
        assert_eq!(view.cart_total, 239);

        cart.update_quantity(5, 3);
        let view = cart.view();
        assert_eq!(view.cart_count, 3);
        assert_eq!(view.cart_total, 239 * 3);
    }
}
