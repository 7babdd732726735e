use crate::product::Product;
use serde::{Deserialize, Serialize};

/// Lowest quantity a line item can hold
pub const MIN_QUANTITY: u32 = 1;

/// Cap enforced on every quantity mutation
pub const MAX_QUANTITY: u32 = 10;

/// A cart entry aggregating one product id with a quantity.
///
/// Created on first add of a product, mutated in place by quantity
/// updates, unique by id within the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub id: u32,
    pub name: String,
    pub price: f64,
    /// Resolved primary image URL; empty when the product has none
    #[serde(default)]
    pub image: String,
    pub quantity: u32,
    #[serde(default)]
    pub rating: u8,
    /// 5 when the product carries an eco scorecard, 4 otherwise
    #[serde(rename = "ecoRating")]
    pub eco_rating: u8,
}

impl CartLineItem {
    /// Build the initial line item for a product, quantity 1.
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            image: product.primary_image().to_string(),
            quantity: 1,
            rating: product.rating,
            eco_rating: if product.eco_score.is_some() { 5 } else { 4 },
        }
    }

    /// Line total shown on the cart page.
    pub fn line_total(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::EcoScore;

    #[test]
    fn test_from_product_with_eco_score() {
        let product = Product {
            id: 1,
            name: "Eco Bamboo Toothbrush".into(),
            price: 499.0,
            rating: 5,
            eco_score: Some(EcoScore::default()),
            images: vec!["first.jpg".into(), "second.jpg".into()],
            ..Default::default()
        };
        let item = CartLineItem::from_product(&product);
        assert_eq!(item.quantity, 1);
        assert_eq!(item.image, "first.jpg");
        assert_eq!(item.eco_rating, 5);
    }

    #[test]
    fn test_from_product_without_eco_score() {
        let product = Product {
            id: 2,
            name: "Plain Mug".into(),
            price: 250.0,
            ..Default::default()
        };
        let item = CartLineItem::from_product(&product);
        assert_eq!(item.eco_rating, 4);
        assert_eq!(item.image, "");
    }

    #[test]
    fn test_line_total() {
        let product = Product {
            price: 450.0,
            ..Default::default()
        };
        let mut item = CartLineItem::from_product(&product);
        item.quantity = 3;
        assert_eq!(item.line_total(), 1350.0);
    }

    #[test]
    fn test_wire_format_uses_camel_case_eco_rating() {
        let item = CartLineItem::from_product(&Product::default());
        let raw = serde_json::to_string(&item).unwrap();
        assert!(raw.contains("\"ecoRating\""));
    }
}
