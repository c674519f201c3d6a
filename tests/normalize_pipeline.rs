//! End-to-end tests for the normalization pipeline and identity derivation.
//!
//! These exercise only the public API, the way downstream consumers (the
//! storefront and cart layers) use it: arbitrary page text in, complete
//! record out, plus stable identifiers for cart keying.

use pagemart::product::{DEFAULT_PRICE, PLACEHOLDER_IMAGE_URL};
use pagemart::{canonical_product_url, derive_product_id, normalize_product, ProductRecord};

/// Every record must satisfy the output guarantees, whatever the input was.
fn assert_record_valid(record: &ProductRecord) {
    assert!(!record.title.is_empty(), "title must be non-empty");
    assert!(record.price > 0.0, "price must be positive");
    assert!(!record.currency.is_empty(), "currency must be non-empty");
    assert!(!record.description.is_empty(), "description must be non-empty");
    assert!(!record.images.is_empty(), "at least one image required");
    match (&record.original_price, &record.discount) {
        (Some(original), Some(_)) => assert!(*original > record.price),
        (_, None) => {}
        (None, Some(d)) => panic!("discount {d} present without original price"),
    }
}

// ---------------------------------------------------------------------------
// Totality
// ---------------------------------------------------------------------------

#[test]
fn empty_input_yields_valid_record() {
    assert_record_valid(&normalize_product(""));
}

#[test]
fn binary_ish_input_yields_valid_record() {
    let noise: String = (0u8..=255).map(|b| b as char).filter(|c| *c != '$').collect();
    assert_record_valid(&normalize_product(&noise));
}

#[test]
fn deeply_malformed_markup_yields_valid_record() {
    let html = "<div><<<><span class=>>></div></p></p><img src='x'<b>";
    assert_record_valid(&normalize_product(html));
}

#[test]
fn random_text_gets_full_default_record() {
    // No extractable signal at all: every per-field default applies, which
    // is indistinguishable from a healthy page with no data.
    let record = normalize_product("lorem ipsum dolor sit amet");
    assert_record_valid(&record);
    assert_eq!(record.price, DEFAULT_PRICE);
    assert_eq!(record.images.len(), 1);
    assert_eq!(record.images[0].url, PLACEHOLDER_IMAGE_URL);
    assert!(!record.title.is_empty());
}

// ---------------------------------------------------------------------------
// Strategy precedence and validation
// ---------------------------------------------------------------------------

#[test]
fn structural_title_beats_conflicting_pattern() {
    let html = r#"<html><body>
        <h1>Structural Heading</h1>
        <script>var data = {"title":"Pattern Title"};</script>
    </body></html>"#;
    assert_eq!(normalize_product(html).title, "Structural Heading");
}

#[test]
fn zero_price_is_rejected() {
    let record = normalize_product(r#"{"price":"0"}"#);
    assert_eq!(record.price, DEFAULT_PRICE);
}

#[test]
fn negative_price_never_surfaces() {
    let record = normalize_product(r#"{"price":"-5"}"#);
    assert!(record.price > 0.0);
    assert_eq!(record.price, DEFAULT_PRICE);
}

#[test]
fn rejected_price_falls_through_to_later_strategy() {
    let record = normalize_product(r#"{"price":"0","actMinPrice":"8.40"}"#);
    assert_eq!(record.price, 8.40);
}

// ---------------------------------------------------------------------------
// Discount
// ---------------------------------------------------------------------------

#[test]
fn discount_computed_from_extracted_prices() {
    let record = normalize_product(r#"{"price":"15.00","originalPrice":"20.00"}"#);
    assert_eq!(record.discount.as_deref(), Some("-25%"));
}

#[test]
fn discount_absent_when_original_price_lower() {
    let record = normalize_product(r#"{"price":"20.00","originalPrice":"15.00"}"#);
    assert_eq!(record.discount, None);
}

#[test]
fn discount_absent_without_original_price() {
    let record = normalize_product(r#"{"price":"20.00"}"#);
    assert_eq!(record.original_price, None);
    assert_eq!(record.discount, None);
}

// ---------------------------------------------------------------------------
// Images
// ---------------------------------------------------------------------------

#[test]
fn twenty_listed_images_cap_at_eight_in_order() {
    let urls: Vec<String> = (0..20)
        .map(|i| format!("\"https://cdn.example/img{i}.jpg\""))
        .collect();
    let html = format!(r#"{{"imagePathList":[{}]}}"#, urls.join(","));

    let record = normalize_product(&html);
    assert_eq!(record.images.len(), 8);
    for (i, image) in record.images.iter().enumerate() {
        assert_eq!(image.url, format!("https://cdn.example/img{i}.jpg"));
    }
}

#[test]
fn zero_images_become_single_placeholder() {
    let record = normalize_product("<h1>Imageless Product</h1>");
    assert_eq!(record.images.len(), 1);
    assert_eq!(record.images[0].url, PLACEHOLDER_IMAGE_URL);
}

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

#[test]
fn identity_is_deterministic() {
    let url = "https://site/item/1005006574626248.html";
    assert_eq!(derive_product_id(url), derive_product_id(url));
}

#[test]
fn identity_preserves_item_numeral() {
    let id = derive_product_id("https://www.aliexpress.com/item/1005006574626248.html");
    assert!(id.contains("1005006574626248"));
}

#[test]
fn distinct_patternless_urls_get_distinct_ids() {
    let a = derive_product_id("https://shop.example/widgets/red");
    let b = derive_product_id("https://shop.example/widgets/blue");
    assert_ne!(a, b);
}

#[test]
fn hash_identity_stable_across_calls() {
    let url = "https://shop.example/no/item/pattern";
    let first = derive_product_id(url);
    for _ in 0..10 {
        assert_eq!(derive_product_id(url), first);
    }
}

// ---------------------------------------------------------------------------
// URL canonicalization
// ---------------------------------------------------------------------------

#[test]
fn canonical_url_strips_tracking_params() {
    assert_eq!(
        canonical_product_url("https://www.aliexpress.com/item/9.html?spm=a2g0o#nav"),
        "https://www.aliexpress.com/item/9.html"
    );
}

#[test]
fn canonical_url_passes_through_garbage() {
    assert_eq!(canonical_product_url("::not a url::"), "::not a url::");
}

// ---------------------------------------------------------------------------
// Serialized shape
// ---------------------------------------------------------------------------

#[test]
fn record_json_shape_matches_consumer_contract() {
    let record = normalize_product(
        r#"<h1>Desk Lamp</h1>{"price":"12.00","originalPrice":"24.00",
           "currency":"GBP","imagePathList":["https://cdn.example/lamp.jpg"]}"#,
    );
    let json = serde_json::to_value(&record).unwrap();

    assert_eq!(json["title"], "Desk Lamp");
    assert_eq!(json["currency"], "GBP");
    assert_eq!(json["originalPrice"], 24.00);
    assert_eq!(json["discount"], "-50%");
    assert_eq!(json["images"][0]["url"], "https://cdn.example/lamp.jpg");
    assert_eq!(json["returns"], "15 days return policy");
    assert!(json["reviews"]["rating"].is_number());
    assert!(json["shipping"]["estimatedDays"].is_string());
}

#[test]
fn full_page_fixture_normalizes_end_to_end() {
    let html = r#"<!DOCTYPE html>
<html>
<head><title>Ergo Mouse - Best Store</title></head>
<body>
  <h1 class="product-title-text">Ergonomic Wireless Mouse</h1>
  <div class="product-description">Vertical grip, 2.4GHz receiver, silent clicks.</div>
  <script>
    window.runParams = {"data":{"price":"18.49","originalPrice":"36.98",
      "currency":"USD",
      "imagePathList":["https://ae01.alicdn.com/kf/front.jpg",
                       "https://ae01.alicdn.com/kf/side.jpg"]}};
  </script>
</body>
</html>"#;

    let record = normalize_product(html);
    assert_record_valid(&record);
    assert_eq!(record.title, "Ergonomic Wireless Mouse");
    assert_eq!(record.price, 18.49);
    assert_eq!(record.original_price, Some(36.98));
    assert_eq!(record.discount.as_deref(), Some("-50%"));
    assert_eq!(record.images.len(), 2);
    assert_eq!(
        record.description,
        "Vertical grip, 2.4GHz receiver, silent clicks."
    );
}
