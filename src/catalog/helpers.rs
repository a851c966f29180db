//! Catalog Browsing Helpers
//!
//! Filtering, sorting and trending selection over the static catalog. Per
//! the storefront's design these are plain linear scans; there is no index.

use super::models::{Category, Product, ProductQuery, SortBy};

/// Applies the category and price-range filters, then sorts.
///
/// Both price bounds are inclusive and optional; an absent bound does not
/// constrain that side. Sorting is stable, so products that compare equal
/// keep their catalog order.
pub fn filter_and_sort(products: &[Product], query: &ProductQuery) -> Vec<Product> {
    let mut filtered: Vec<Product> = products
        .iter()
        .filter(|p| query.category.matches(p.category))
        .filter(|p| query.min_price.map_or(true, |min| p.price >= min))
        .filter(|p| query.max_price.map_or(true, |max| p.price <= max))
        .cloned()
        .collect();

    match query.sort {
        SortBy::Popularity => filtered.sort_by(|a, b| b.reviews.cmp(&a.reviews)),
        SortBy::New => filtered.sort_by(|a, b| b.id.cmp(&a.id)),
        SortBy::PriceLow => filtered.sort_by(|a, b| a.price.cmp(&b.price)),
        SortBy::PriceHigh => filtered.sort_by(|a, b| b.price.cmp(&a.price)),
    }

    filtered
}

/// Returns the top `limit` products by weighted popularity (rating x reviews)
pub fn trending(products: &[Product], limit: usize) -> Vec<Product> {
    let mut ranked: Vec<Product> = products.to_vec();
    ranked.sort_by(|a, b| {
        let score_a = a.rating * a.reviews as f32;
        let score_b = b.rating * b.reviews as f32;
        score_b
            .partial_cmp(&score_a)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked.truncate(limit);
    ranked
}

/// Products eligible for the gift-box builder (pre-made gift boxes excluded)
pub fn giftable(products: &[Product]) -> Vec<Product> {
    products
        .iter()
        .filter(|p| p.category != Category::Gift)
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::data::all_products;
    use crate::catalog::models::CategoryFilter;

    #[test]
    fn test_category_filter() {
        let query = ProductQuery {
            category: CategoryFilter::Spicy,
            ..Default::default()
        };
        let spicy = filter_and_sort(all_products(), &query);
        assert_eq!(spicy.len(), 3);
        assert!(spicy.iter().all(|p| p.category == Category::Spicy));
    }

    #[test]
    fn test_price_range_filter() {
        let query = ProductQuery {
            min_price: Some(0),
            max_price: Some(500),
            ..Default::default()
        };
        let affordable = filter_and_sort(all_products(), &query);
        // The two pre-made gift boxes (899 and 1499) fall outside the range.
        assert_eq!(affordable.len(), 13);
        assert!(affordable.iter().all(|p| p.price <= 500));
    }

    #[test]
    fn test_sort_orders() {
        let products = all_products();

        let cheap_first = filter_and_sort(
            products,
            &ProductQuery {
                sort: SortBy::PriceLow,
                ..Default::default()
            },
        );
        assert!(cheap_first.windows(2).all(|w| w[0].price <= w[1].price));

        let newest_first = filter_and_sort(
            products,
            &ProductQuery {
                sort: SortBy::New,
                ..Default::default()
            },
        );
        assert_eq!(newest_first[0].id, 15);

        let popular_first = filter_and_sort(products, &ProductQuery::default());
        assert!(popular_first.windows(2).all(|w| w[0].reviews >= w[1].reviews));
    }

    #[test]
    fn test_trending_ranks_by_weighted_score() {
        let top = trending(all_products(), 6);
        assert_eq!(top.len(), 6);
        // Peri Peri: 4.9 * 312 is the highest weighted score in the catalog.
        assert_eq!(top[0].id, 1);
    }

    #[test]
    fn test_giftable_excludes_premade_boxes() {
        let eligible = giftable(all_products());
        assert_eq!(eligible.len(), 13);
        assert!(eligible.iter().all(|p| p.category != Category::Gift));
    }
}
