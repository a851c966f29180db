//! Static Product Catalog
//!
//! The sample catalog is supplied whole at startup and never mutated or
//! fetched; the storefront only ever reads it.

use super::models::{Category, Product};
use std::sync::OnceLock;

static CATALOG: OnceLock<Vec<Product>> = OnceLock::new();

/// Returns the full static catalog, built on first access
pub fn all_products() -> &'static [Product] {
    CATALOG.get_or_init(build_catalog)
}

/// Looks up a single product by id
pub fn product_by_id(id: u32) -> Option<&'static Product> {
    all_products().iter().find(|p| p.id == id)
}

fn product(
    id: u32,
    name: &str,
    flavour: &str,
    category: Category,
    price: u32,
    original_price: Option<u32>,
    rating: f32,
    reviews: u32,
    image: &str,
    badge: Option<&str>,
) -> Product {
    Product {
        id,
        name: name.to_string(),
        flavour: flavour.to_string(),
        category,
        price,
        original_price,
        rating,
        reviews,
        image: image.to_string(),
        badge: badge.map(str::to_string),
    }
}

fn build_catalog() -> Vec<Product> {
    use Category::*;
    vec![
        product(
            1,
            "Peri Peri Blast Makhana",
            "Peri Peri",
            Spicy,
            279,
            Some(349),
            4.9,
            312,
            "/PeriPeri.png",
            Some("⭐ New"),
        ),
        product(
            2,
            "Cream & Onion Makhana",
            "Cream & Onion",
            Savory,
            249,
            Some(299),
            4.7,
            189,
            "/Cream&Onion.png",
            None,
        ),
        product(
            3,
            "Tangy Tomato Twist",
            "Tangy Tomato",
            Savory,
            259,
            Some(329),
            4.5,
            143,
            "/TangyTomato.png",
            None,
        ),
        product(
            4,
            "Pudina (Mint) Magic",
            "Pudina (Mint)",
            Savory,
            269,
            None,
            4.6,
            167,
            "/Pudina(Mint).png",
            None,
        ),
        product(
            5,
            "Salted Perfection",
            "Salted",
            Savory,
            239,
            Some(299),
            4.5,
            156,
            "/Salted.png",
            None,
        ),
        product(
            6,
            "Magic Masala Makhana",
            "Magic Masala",
            Savory,
            279,
            None,
            4.7,
            198,
            "/MagicMasala.png",
            None,
        ),
        product(
            7,
            "Black Salt Zest",
            "Black Salt",
            Savory,
            259,
            None,
            4.6,
            176,
            "/BlackSalt.png",
            None,
        ),
        product(
            8,
            "Cheese & Herbs Classic",
            "Cheese",
            Savory,
            269,
            None,
            4.6,
            178,
            "/plain.png",
            None,
        ),
        product(
            9,
            "Sriracha BBQ Crunch",
            "Barbeque",
            Spicy,
            279,
            None,
            4.6,
            167,
            "/plain.png",
            None,
        ),
        product(
            10,
            "Chat Masala Crunch",
            "Chat Masala",
            Savory,
            279,
            None,
            4.7,
            189,
            "/plain.png",
            None,
        ),
        product(
            11,
            "Premium Gift Box - Classic",
            "Gift Box",
            Gift,
            899,
            Some(1199),
            4.9,
            87,
            "/hero.png",
            Some("🎁 Perfect Gift"),
        ),
        product(
            12,
            "Luxury Gift Hamper - Deluxe",
            "Gift Box",
            Gift,
            1499,
            Some(1999),
            5.0,
            56,
            "/hero.png",
            Some("🎁 Luxury"),
        ),
        product(
            13,
            "Caramel Bliss Makhana",
            "Caramel",
            Sweet,
            299,
            Some(399),
            4.8,
            234,
            "/plain.png",
            Some("🔥 Bestseller"),
        ),
        product(
            14,
            "Himalayan Salt & Pepper",
            "Himalayan Salt",
            Savory,
            289,
            Some(349),
            4.8,
            212,
            "/plain.png",
            Some("⭐ Premium"),
        ),
        product(
            15,
            "Chilli Lime Fusion",
            "Lime & Chili",
            Spicy,
            289,
            None,
            4.7,
            201,
            "/plain.png",
            None,
        ),
    ]
}
