//! Field extractors for product pages.
//!
//! Each extractor is a pure function over one document and implements an
//! ordered strategy chain: structural (CSS selector) strategies are tried
//! before regex strategies over the raw text, because structural matches are
//! less prone to false positives. The first strategy producing a non-empty,
//! type-valid value wins; later strategies are not attempted.
//!
//! A strategy miss is expected and frequent — it is never an error. Fields
//! that must always be present (title, price, currency, description) resolve
//! a full-chain miss with a fixed default; `original_price` stays absent.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};

use crate::product::{
    ProductImage, DEFAULT_CURRENCY, DEFAULT_DESCRIPTION, DEFAULT_PRICE, DEFAULT_TITLE,
};

/// Images past this count are dropped, keeping discovery order.
pub const MAX_IMAGES: usize = 8;

/// CDN host marker for structural image discovery.
const IMAGE_CDN_MARKER: &str = "alicdn";

// Pre-compiled patterns (compile once, use many times). Each list is one
// strategy chain, in priority order.

static TITLE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r#""title":"([^"]+)""#,
        r#""productTitle":"([^"]+)""#,
        r"<title>([^<]+)</title>",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("Invalid title pattern"))
    .collect()
});

static PRICE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r#""price":"([0-9.]+)""#,
        r#""actMinPrice":"([0-9.]+)""#,
        r#""minPrice":"([0-9.]+)""#,
        r"\$([0-9.]+)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("Invalid price pattern"))
    .collect()
});

static ORIGINAL_PRICE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [r#""originalPrice":"([0-9.]+)""#, r#""maxPrice":"([0-9.]+)""#]
        .iter()
        .map(|p| Regex::new(p).expect("Invalid original-price pattern"))
        .collect()
});

static IMAGE_ARRAY_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [r#""imagePathList":\[([^\]]+)\]"#, r#""images":\[([^\]]+)\]"#]
        .iter()
        .map(|p| Regex::new(p).expect("Invalid image array pattern"))
        .collect()
});

static CURRENCY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""currency":"([^"]+)""#).expect("Invalid currency pattern"));

static DESCRIPTION_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""description":"([^"]+)""#).expect("Invalid description pattern"));

static QUOTED_STRING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""([^"]+)""#).expect("Invalid quoted-string pattern"));

static UNICODE_ESCAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\u([0-9a-fA-F]{4})").expect("Invalid unicode-escape pattern"));

/// Extract the product title. Never returns "no signal": a full-chain miss
/// resolves to [`DEFAULT_TITLE`].
pub fn extract_title(document: &Html, raw_html: &str) -> String {
    let title_selectors = [
        "h1",
        r#"[class*="title"]"#,
        r#"[class*="Title"]"#,
        r#"[data-pl="product-title"]"#,
    ];

    if let Some(text) = first_selector_text(document, &title_selectors) {
        return text;
    }

    for pattern in TITLE_PATTERNS.iter() {
        if let Some(captures) = pattern.captures(raw_html) {
            let matched = captures[1].trim();
            if !matched.is_empty() {
                return decode_unicode_escapes(matched);
            }
        }
    }

    DEFAULT_TITLE.to_string()
}

/// Extract the price. A pattern match is accepted only when it parses as a
/// finite number greater than zero; anything else is treated as a miss and
/// the chain continues. Full-chain miss resolves to [`DEFAULT_PRICE`].
pub fn extract_price(raw_html: &str) -> f64 {
    for pattern in PRICE_PATTERNS.iter() {
        if let Some(captures) = pattern.captures(raw_html) {
            if let Some(price) = parse_positive_number(&captures[1]) {
                return price;
            }
        }
    }

    DEFAULT_PRICE
}

/// Extract the currency code; miss resolves to [`DEFAULT_CURRENCY`].
pub fn extract_currency(raw_html: &str) -> String {
    CURRENCY_PATTERN
        .captures(raw_html)
        .map(|captures| captures[1].to_string())
        .unwrap_or_else(|| DEFAULT_CURRENCY.to_string())
}

/// Extract the pre-discount price. Unlike [`extract_price`] this field is
/// allowed to stay absent; the orchestrator only derives a discount from it
/// when it exceeds the extracted price.
pub fn extract_original_price(raw_html: &str) -> Option<f64> {
    for pattern in ORIGINAL_PRICE_PATTERNS.iter() {
        if let Some(captures) = pattern.captures(raw_html) {
            if let Some(price) = parse_positive_number(&captures[1]) {
                return Some(price);
            }
        }
    }

    None
}

/// Extract product images, capped at [`MAX_IMAGES`] in discovery order.
///
/// Tier 1 scans embedded JSON image arrays for absolute URLs. Tier 2 (only
/// when tier 1 finds nothing) scans `<img>` elements pointing at the product
/// CDN, keeping their alt text when present. An empty result is legal here;
/// the orchestrator substitutes the placeholder entry.
pub fn extract_images(document: &Html, raw_html: &str) -> Vec<ProductImage> {
    let mut images = Vec::new();

    for pattern in IMAGE_ARRAY_PATTERNS.iter() {
        if let Some(captures) = pattern.captures(raw_html) {
            for quoted in QUOTED_STRING.captures_iter(&captures[1]) {
                let url = &quoted[1];
                if url.starts_with("http") {
                    images.push(ProductImage {
                        url: url.to_string(),
                        alt: Some("Product image".to_string()),
                    });
                }
            }
        }
    }

    if images.is_empty() {
        let cdn_selector = format!(r#"img[src*="{}"]"#, IMAGE_CDN_MARKER);
        if let Ok(selector) = Selector::parse(&cdn_selector) {
            for element in document.select(&selector) {
                if let Some(src) = element.value().attr("src") {
                    if src.starts_with("http") {
                        images.push(ProductImage {
                            url: src.to_string(),
                            alt: element
                                .value()
                                .attr("alt")
                                .filter(|alt| !alt.is_empty())
                                .map(String::from)
                                .or_else(|| Some("Product image".to_string())),
                        });
                    }
                }
            }
        };
    }

    images.truncate(MAX_IMAGES);
    images
}

/// Extract the description; miss resolves to [`DEFAULT_DESCRIPTION`].
pub fn extract_description(document: &Html, raw_html: &str) -> String {
    let description_selectors = [
        r#"[class*="description"]"#,
        r#"[class*="Description"]"#,
        r#"[data-pl="product-description"]"#,
    ];

    if let Some(text) = first_selector_text(document, &description_selectors) {
        return text;
    }

    if let Some(captures) = DESCRIPTION_PATTERN.captures(raw_html) {
        let matched = captures[1].trim();
        if !matched.is_empty() {
            return matched.to_string();
        }
    }

    DEFAULT_DESCRIPTION.to_string()
}

/// Return the trimmed text of the first element matched by the first
/// selector that yields non-empty text. Selectors that fail to parse or
/// match nothing fall through to the next one.
fn first_selector_text(document: &Html, selectors: &[&str]) -> Option<String> {
    for selector_str in selectors {
        if let Ok(selector) = Selector::parse(selector_str) {
            if let Some(element) = document.select(&selector).next() {
                let text: String = element.text().collect();
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    return Some(trimmed.to_string());
                }
            }
        }
    }
    None
}

/// Parse a price-like string, accepting only finite values greater than zero
fn parse_positive_number(s: &str) -> Option<f64> {
    s.parse::<f64>()
        .ok()
        .filter(|n| n.is_finite() && *n > 0.0)
}

/// Decode literal `\uXXXX` escape sequences left behind by embedded JSON.
/// Sequences that do not form a valid scalar value (lone surrogates) are
/// kept as-is.
fn decode_unicode_escapes(s: &str) -> String {
    UNICODE_ESCAPE
        .replace_all(s, |captures: &regex::Captures| {
            u32::from_str_radix(&captures[1], 16)
                .ok()
                .and_then(char::from_u32)
                .map(String::from)
                .unwrap_or_else(|| captures[0].to_string())
        })
        .to_string()
}
