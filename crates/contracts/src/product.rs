use serde::{Deserialize, Serialize};

/// Letter-grade sustainability scorecard attached to a product.
///
/// The grades are opaque to the core logic; only their presence matters
/// (it drives the cart line item's eco rating).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EcoScore {
    /// Carbon footprint grade, e.g. "A-"
    pub carbon: String,
    /// Water usage grade
    pub water: String,
    /// Waste reduction grade
    pub waste: String,
}

/// Catalog product record. Immutable for the session; wishlist entries
/// are full snapshots of this type.
///
/// Field names on the wire match the original storefront's JSON layout,
/// so persisted state written by either implementation decodes in both.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub price: f64,
    pub category: String,
    /// Star rating, integer 0..=5
    #[serde(default)]
    pub rating: u8,
    #[serde(default)]
    pub material: String,
    #[serde(default)]
    pub impact: String,
    #[serde(rename = "ecoScore", default)]
    pub eco_score: Option<EcoScore>,
    /// Ordered gallery image URLs, primary first
    #[serde(default)]
    pub images: Vec<String>,
    /// Legacy single-image field, consulted when `images` is empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Product {
    /// Resolve the image shown on cards and in the cart: first gallery
    /// image, else the legacy `image` field, else empty.
    pub fn primary_image(&self) -> &str {
        self.images
            .first()
            .or(self.image.as_ref())
            .map(String::as_str)
            .unwrap_or("")
    }
}
