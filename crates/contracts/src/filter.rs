use crate::product::Product;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Price-range slider maximum; also the "no price restriction" default.
pub const DEFAULT_MAX_PRICE: f64 = 5000.0;

/// Sort order applied to the filtered catalog view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// No timestamp field exists, so this preserves catalog order.
    #[default]
    Newest,
    PriceAsc,
    PriceDesc,
    RatingDesc,
}

impl SortMode {
    /// Stable identifier (used for the sort dropdown values).
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Newest => "newest",
            SortMode::PriceAsc => "price_asc",
            SortMode::PriceDesc => "price_desc",
            SortMode::RatingDesc => "rating_desc",
        }
    }

    /// Parse a sort mode from its identifier; unknown values fall back
    /// to the default.
    pub fn from_str(s: &str) -> Self {
        match s {
            "price_asc" => SortMode::PriceAsc,
            "price_desc" => SortMode::PriceDesc,
            "rating_desc" => SortMode::RatingDesc,
            _ => SortMode::Newest,
        }
    }

    /// Caption for the sort dropdown.
    pub fn label(&self) -> &'static str {
        match self {
            SortMode::Newest => "Newest Arrivals",
            SortMode::PriceAsc => "Price: Low to High",
            SortMode::PriceDesc => "Price: High to Low",
            SortMode::RatingDesc => "Top Rated",
        }
    }

    /// All modes, in dropdown order.
    pub fn all() -> [SortMode; 4] {
        [
            SortMode::Newest,
            SortMode::PriceAsc,
            SortMode::PriceDesc,
            SortMode::RatingDesc,
        ]
    }
}

/// User-selected constraints narrowing the product catalog view.
///
/// Mutated one criterion at a time by the filter UI; the view is fully
/// re-derived after every change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Selected category names; empty means no restriction
    pub categories: BTreeSet<String>,
    #[serde(rename = "maxPrice")]
    pub max_price: f64,
    #[serde(rename = "minRating")]
    pub min_rating: u8,
    pub sort: SortMode,
    /// Lowercase substring matched against product names; empty skips the test
    #[serde(rename = "searchTerm")]
    pub search_term: String,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            categories: BTreeSet::new(),
            max_price: DEFAULT_MAX_PRICE,
            min_rating: 0,
            sort: SortMode::Newest,
            search_term: String::new(),
        }
    }
}

impl FilterCriteria {
    /// Conjunction of the four filter predicates.
    pub fn matches(&self, product: &Product) -> bool {
        let matches_category =
            self.categories.is_empty() || self.categories.contains(&product.category);
        let matches_price = product.price <= self.max_price;
        let matches_rating = product.rating >= self.min_rating;
        let matches_search = self.search_term.is_empty()
            || product
                .name
                .to_lowercase()
                .contains(&self.search_term.to_lowercase());

        matches_category && matches_price && matches_rating && matches_search
    }

    /// Number of criteria deviating from their defaults, for the
    /// "active filters" badge. The sort mode is presentation, not a filter.
    pub fn active_count(&self) -> usize {
        let mut count = self.categories.len();
        if self.max_price < DEFAULT_MAX_PRICE {
            count += 1;
        }
        if self.min_rating > 0 {
            count += 1;
        }
        if !self.search_term.is_empty() {
            count += 1;
        }
        count
    }
}
