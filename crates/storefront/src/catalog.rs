//! Static product catalog.
//!
//! The catalog is an in-memory list seeded at startup; there is no load
//! or fetch step and records are immutable for the session.

use contracts::{EcoScore, Product};
use once_cell::sync::Lazy;

static CATALOG: Lazy<Vec<Product>> = Lazy::new(|| {
    vec![
        Product {
            id: 1,
            name: "Eco Bamboo Toothbrush".into(),
            price: 499.0,
            category: "Personal Care".into(),
            rating: 5,
            material: "Sustainable Bamboo".into(),
            impact: "Reduces plastic waste".into(),
            eco_score: Some(EcoScore {
                carbon: "A-".into(),
                water: "A".into(),
                waste: "A+".into(),
            }),
            images: vec![
                "https://placehold.co/800x800/10B981/ffffff?text=Image+1".into(),
                "https://placehold.co/800x800/059669/ffffff?text=Image+2".into(),
            ],
            image: None,
        },
        Product {
            id: 2,
            name: "Recycled Cotton Tote".into(),
            price: 749.0,
            category: "Accessories".into(),
            rating: 4,
            material: "Recycled Cotton".into(),
            impact: "Saves water resources".into(),
            eco_score: Some(EcoScore {
                carbon: "B+".into(),
                water: "A".into(),
                waste: "B".into(),
            }),
            images: vec!["https://placehold.co/800x800/3b82f6/ffffff?text=Image+1".into()],
            image: None,
        },
        Product {
            id: 3,
            name: "Natural Beeswax Candle".into(),
            price: 599.0,
            category: "Home Goods".into(),
            rating: 5,
            material: "Pure Beeswax".into(),
            impact: "Carbon neutral burning".into(),
            eco_score: Some(EcoScore {
                carbon: "A".into(),
                water: "B-".into(),
                waste: "A".into(),
            }),
            images: vec!["https://placehold.co/800x800/f59e0b/ffffff?text=Image+1".into()],
            image: None,
        },
        Product {
            id: 4,
            name: "Upcycled Leather Wallet".into(),
            price: 1899.0,
            category: "Accessories".into(),
            rating: 5,
            material: "Reclaimed Leather".into(),
            impact: "Prevents landfill waste".into(),
            eco_score: Some(EcoScore {
                carbon: "A+".into(),
                water: "A+".into(),
                waste: "A".into(),
            }),
            images: vec!["https://placehold.co/800x800/4c4c4c/ffffff?text=Image+1".into()],
            image: None,
        },
        Product {
            id: 5,
            name: "Glass Jar Storage Set".into(),
            price: 450.0,
            category: "Home Goods".into(),
            rating: 4,
            material: "Recycled Glass".into(),
            impact: "Reusable storage".into(),
            eco_score: Some(EcoScore {
                carbon: "B".into(),
                water: "B".into(),
                waste: "A+".into(),
            }),
            images: vec!["https://placehold.co/800x800/6b7280/ffffff?text=Image+1".into()],
            image: None,
        },
    ]
});

/// The full catalog, in seed order.
pub fn catalog() -> &'static [Product] {
    &CATALOG
}

/// Unique category names in first-appearance order, for the category
/// filter checkboxes.
pub fn categories() -> Vec<String> {
    let mut seen = Vec::new();
    for product in CATALOG.iter() {
        if !seen.contains(&product.category) {
            seen.push(product.category.clone());
        }
    }
    seen
}

/// Look up a catalog product by id (detail view navigation).
pub fn find_product(id: u32) -> Option<&'static Product> {
    CATALOG.iter().find(|p| p.id == id)
}
