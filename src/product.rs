//! Product record types and the fallback factory.
//!
//! `ProductRecord` is the sole output of the normalization pipeline. The
//! serialized shape (camelCase keys, absent optionals omitted) is what the
//! storefront and cart consumers read, so field names here are load-bearing.

use serde::{Deserialize, Serialize};

/// Document-scoped record id. Static by design: the cart-facing stable
/// identifier comes from [`crate::identity::derive_product_id`] instead.
pub const DEFAULT_PRODUCT_ID: &str = "1005006574626248";

/// Substituted when no image can be discovered in the document.
pub const PLACEHOLDER_IMAGE_URL: &str = "/placeholder-product.jpg";

/// Per-field defaults used when every strategy in a chain misses.
pub const DEFAULT_TITLE: &str = "Premium Product";
pub const DEFAULT_PRICE: f64 = 29.99;
pub const DEFAULT_CURRENCY: &str = "USD";
pub const DEFAULT_DESCRIPTION: &str =
    "High-quality product with excellent features and reliable performance.";

/// A single product image in discovery order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductImage {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

/// Review metadata attached by the orchestrator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductReview {
    pub rating: f64,
    pub count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_rating: Option<f64>,
}

/// Shipping metadata attached by the orchestrator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductShipping {
    pub info: String,
    pub estimated_days: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<String>,
}

/// The normalized output of one product page.
///
/// Every record upholds the same guarantees regardless of input quality:
/// at least one image, a positive price, non-empty title/description/currency,
/// and a discount present exactly when `original_price > price`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: String,
    pub title: String,
    pub price: f64,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<String>,
    pub images: Vec<ProductImage>,
    pub description: String,
    pub reviews: ProductReview,
    pub shipping: ProductShipping,
    pub returns: String,
}

/// Build the fixed, always-valid record substituted when the pipeline hits
/// an unexpected failure. This is the outermost safety net; individual field
/// misses are handled by per-field defaults and never reach here.
pub fn fallback_record() -> ProductRecord {
    ProductRecord {
        id: DEFAULT_PRODUCT_ID.to_string(),
        title: "Premium Quality Product".to_string(),
        price: 29.99,
        currency: "USD".to_string(),
        original_price: Some(49.99),
        discount: Some("-40%".to_string()),
        images: vec![ProductImage {
            url: PLACEHOLDER_IMAGE_URL.to_string(),
            alt: Some("Product image 1".to_string()),
        }],
        description: "High-quality product with excellent features. This item offers \
                      great value and reliable performance for everyday use."
            .to_string(),
        reviews: ProductReview {
            rating: 4.5,
            count: 1250,
            average_rating: Some(4.5),
        },
        shipping: ProductShipping {
            info: "Free shipping".to_string(),
            estimated_days: "15-30 days".to_string(),
            cost: Some("Free".to_string()),
        },
        returns: "15 days return policy".to_string(),
    }
}
