//! Product Catalog Domain Models
//!
//! Data structures for the static product catalog and the browsing
//! (filter/sort) query surface.

use serde::{Deserialize, Serialize};

/// Product category used for filtering and gift-box eligibility
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Sweet,
    Savory,
    Spicy,
    Gift,
}

/// A purchasable product from the static catalog
///
/// Prices are whole rupees; fractional arithmetic only ever happens in the
/// gift-box discount rounding.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier
    pub id: u32,

    /// Display name
    pub name: String,

    /// Flavour label shown on the product card
    pub flavour: String,

    /// Category bucket
    pub category: Category,

    /// Current price in whole rupees
    pub price: u32,

    /// Pre-discount price, when the product is on offer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<u32>,

    /// Average star rating (0.0 - 5.0)
    pub rating: f32,

    /// Number of customer reviews
    pub reviews: u32,

    /// Image asset path
    pub image: String,

    /// Optional promotional badge text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}

/// Category filter for product listing; `All` disables the filter
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    #[default]
    All,
    Sweet,
    Savory,
    Spicy,
    Gift,
}

impl CategoryFilter {
    /// Whether a product passes this filter
    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Sweet => category == Category::Sweet,
            CategoryFilter::Savory => category == Category::Savory,
            CategoryFilter::Spicy => category == Category::Spicy,
            CategoryFilter::Gift => category == Category::Gift,
        }
    }
}

/// Sort order for product listing
#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SortBy {
    /// Most reviewed first
    #[default]
    Popularity,
    /// Newest (highest id) first
    New,
    /// Cheapest first
    PriceLow,
    /// Most expensive first
    PriceHigh,
}

/// Query parameters for `GET /products`
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProductQuery {
    /// Category filter; defaults to `all`
    #[serde(default)]
    pub category: CategoryFilter,

    /// Inclusive lower price bound
    pub min_price: Option<u32>,

    /// Inclusive upper price bound
    pub max_price: Option<u32>,

    /// Sort order; defaults to popularity
    #[serde(default)]
    pub sort: SortBy,
}

/// Response for product listing endpoints
#[derive(Serialize)]
pub struct ProductListResponse {
    /// Number of products found
    pub count: usize,

    /// Matching products in sorted order
    pub products: Vec<Product>,
}
