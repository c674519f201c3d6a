//! Normalization pipeline: one raw document in, one complete record out.
//!
//! The entry point is total. Individual extractor chains already degrade to
//! per-field defaults, and the whole pipeline additionally sits behind a
//! panic boundary that substitutes the fixed fallback record, so no input —
//! empty, binary, or arbitrarily malformed — can fail the call.

use std::panic::{self, AssertUnwindSafe};

use scraper::Html;

use crate::extract::{
    extract_currency, extract_description, extract_images, extract_original_price, extract_price,
    extract_title,
};
use crate::product::{
    fallback_record, ProductImage, ProductRecord, ProductReview, ProductShipping,
    DEFAULT_PRODUCT_ID, PLACEHOLDER_IMAGE_URL,
};

/// Normalize a fetched product page into a [`ProductRecord`].
///
/// Every invocation returns a record upholding the output invariants:
/// at least one image, positive price, non-empty title/description/currency,
/// and a discount present exactly when an original price above the current
/// price was extracted.
pub fn normalize_product(raw_html: &str) -> ProductRecord {
    panic::catch_unwind(AssertUnwindSafe(|| assemble_record(raw_html)))
        .unwrap_or_else(|_| fallback_record())
}

/// Run the extractors and assemble the record. The extractors have no
/// ordering dependency between them; only the discount computation and the
/// placeholder substitution need the assembled values.
fn assemble_record(raw_html: &str) -> ProductRecord {
    let document = Html::parse_document(raw_html);

    let title = extract_title(&document, raw_html);
    let price = extract_price(raw_html);
    let currency = extract_currency(raw_html);
    let original_price = extract_original_price(raw_html);
    let mut images = extract_images(&document, raw_html);
    let description = extract_description(&document, raw_html);

    let discount = calculate_discount(price, original_price);

    if images.is_empty() {
        images.push(ProductImage {
            url: PLACEHOLDER_IMAGE_URL.to_string(),
            alt: Some("Product".to_string()),
        });
    }

    ProductRecord {
        id: DEFAULT_PRODUCT_ID.to_string(),
        title,
        price,
        currency,
        original_price,
        discount,
        images,
        description,
        // Static metadata; not derived from the document, but kept in the
        // record so consumers see a stable shape.
        reviews: ProductReview {
            rating: 4.5,
            count: 0,
            average_rating: Some(4.5),
        },
        shipping: ProductShipping {
            info: "Free shipping".to_string(),
            estimated_days: "15-30 days".to_string(),
            cost: None,
        },
        returns: "15 days return policy".to_string(),
    }
}

/// Format the discount as `"-{percent}%"`, rounded half-up to the nearest
/// integer. Returns `None` unless the original price strictly exceeds the
/// current price, which also guards the division.
pub fn calculate_discount(price: f64, original_price: Option<f64>) -> Option<String> {
    let original = original_price?;
    if original <= price {
        return None;
    }

    let percent = ((original - price) / original * 100.0).round();
    Some(format!("-{percent:.0}%"))
}
