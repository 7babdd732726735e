//! Filter pipeline deriving the catalog view.
//!
//! [`apply_filters`] is a pure function of (catalog, criteria); the
//! [`ProductBrowser`] wraps it with one setter per criterion, re-running
//! the whole pipeline after each change. There is no incremental update
//! and an empty result is a valid "no products match" state.

use contracts::{FilterCriteria, Product, SortMode};

/// Filter the catalog by the conjunctive criteria, then sort per the
/// selected mode. The sort is stable, so ties keep catalog order.
pub fn apply_filters(products: &[Product], criteria: &FilterCriteria) -> Vec<Product> {
    let mut filtered: Vec<Product> = products
        .iter()
        .filter(|p| criteria.matches(p))
        .cloned()
        .collect();

    match criteria.sort {
        // No timestamp field exists; "newest" preserves catalog order.
        SortMode::Newest => {}
        SortMode::PriceAsc => filtered.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortMode::PriceDesc => filtered.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortMode::RatingDesc => filtered.sort_by(|a, b| b.rating.cmp(&a.rating)),
    }

    filtered
}

/// Holds the current [`FilterCriteria`] over a catalog slice.
///
/// Each setter mutates exactly one criterion and returns the freshly
/// derived view, matching how the filter UI drives the pipeline.
pub struct ProductBrowser<'a> {
    products: &'a [Product],
    criteria: FilterCriteria,
}

impl<'a> ProductBrowser<'a> {
    pub fn new(products: &'a [Product]) -> Self {
        Self {
            products,
            criteria: FilterCriteria::default(),
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Derive the current view from scratch.
    pub fn results(&self) -> Vec<Product> {
        apply_filters(self.products, &self.criteria)
    }

    /// Check or uncheck one category filter.
    pub fn toggle_category(&mut self, category: &str) -> Vec<Product> {
        if !self.criteria.categories.remove(category) {
            self.criteria.categories.insert(category.to_string());
        }
        self.results()
    }

    /// Replace the whole category selection.
    pub fn set_categories(&mut self, categories: impl IntoIterator<Item = String>) -> Vec<Product> {
        self.criteria.categories = categories.into_iter().collect();
        self.results()
    }

    pub fn set_max_price(&mut self, max_price: f64) -> Vec<Product> {
        self.criteria.max_price = max_price;
        self.results()
    }

    pub fn set_min_rating(&mut self, min_rating: u8) -> Vec<Product> {
        self.criteria.min_rating = min_rating;
        self.results()
    }

    pub fn set_sort(&mut self, sort: SortMode) -> Vec<Product> {
        self.criteria.sort = sort;
        self.results()
    }

    /// Store the search term trimmed and lowercased.
    pub fn set_search_term(&mut self, term: &str) -> Vec<Product> {
        self.criteria.search_term = term.trim().to_lowercase();
        self.results()
    }

    /// Count for the "active filters" badge.
    pub fn active_filter_count(&self) -> usize {
        self.criteria.active_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::catalog;

    #[test]
    fn test_default_criteria_is_the_identity_filter() {
        let criteria = FilterCriteria::default();
        assert_eq!(apply_filters(catalog(), &criteria), catalog().to_vec());
    }

    #[test]
    fn test_max_price_filter() {
        // Seed prices: [499, 749, 599, 1899, 450]
        let mut browser = ProductBrowser::new(catalog());
        let results = browser.set_max_price(600.0);
        let ids: Vec<u32> = results.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3, 5]);
    }

    #[test]
    fn test_price_ascending_sort() {
        let mut browser = ProductBrowser::new(catalog());
        browser.set_max_price(600.0);
        let results = browser.set_sort(SortMode::PriceAsc);

        let prices: Vec<f64> = results.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![450.0, 499.0, 599.0]);
        for pair in results.windows(2) {
            assert!(pair[0].price <= pair[1].price);
        }
    }

    #[test]
    fn test_price_descending_sort() {
        let mut browser = ProductBrowser::new(catalog());
        let results = browser.set_sort(SortMode::PriceDesc);
        let prices: Vec<f64> = results.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![1899.0, 749.0, 599.0, 499.0, 450.0]);
    }

    #[test]
    fn test_rating_descending_sort_is_stable() {
        let mut browser = ProductBrowser::new(catalog());
        let results = browser.set_sort(SortMode::RatingDesc);
        // Three rating-5 products keep catalog order, then the two rating-4.
        let ids: Vec<u32> = results.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3, 4, 2, 5]);
    }

    #[test]
    fn test_category_toggle() {
        let mut browser = ProductBrowser::new(catalog());
        let results = browser.toggle_category("Home Goods");
        assert_eq!(results.len(), 2);

        let results = browser.toggle_category("Accessories");
        assert_eq!(results.len(), 4);

        // Unchecking restores the unrestricted view.
        browser.toggle_category("Home Goods");
        let results = browser.toggle_category("Accessories");
        assert_eq!(results.len(), 5);
    }

    #[test]
    fn test_search_term_is_normalized() {
        let mut browser = ProductBrowser::new(catalog());
        let results = browser.set_search_term("  BAMBOO ");
        assert_eq!(browser.criteria().search_term, "bamboo");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, 1);
    }

    #[test]
    fn test_empty_result_is_a_valid_state() {
        let mut browser = ProductBrowser::new(catalog());
        let results = browser.set_search_term("no such product");
        assert!(results.is_empty());
    }

    #[test]
    fn test_conjunction_of_predicates() {
        let mut browser = ProductBrowser::new(catalog());
        browser.toggle_category("Home Goods");
        browser.set_min_rating(5);
        let results = browser.set_max_price(600.0);
        // Only the beeswax candle is Home Goods, rating 5 and <= 600.
        let ids: Vec<u32> = results.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn test_active_filter_count_tracks_setters() {
        let mut browser = ProductBrowser::new(catalog());
        assert_eq!(browser.active_filter_count(), 0);
        browser.toggle_category("Accessories");
        browser.set_min_rating(4);
        browser.set_search_term("tote");
        assert_eq!(browser.active_filter_count(), 3);
    }
}
