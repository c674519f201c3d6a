//! Stable product identifiers and URL canonicalization.
//!
//! These helpers operate on the source URL string, orthogonally to document
//! parsing. Cart consumers key line items by the derived identifier, so both
//! functions are deterministic and never fail: the same URL string always
//! maps to the same output, across calls and across processes.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

/// The demo product page, used as the CLI default when no URL is given.
pub const DEFAULT_PRODUCT_URL: &str = "https://www.aliexpress.com/item/1005006574626248.html";

static ITEM_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/item/(\d+)\.html").expect("Invalid item-id pattern"));

/// Derive a stable identifier for a product URL, usable as a cart key.
///
/// URLs carrying a numeric item id keep that id (`aliexpress-{id}`), so the
/// identifier survives template changes in the rest of the URL. Anything
/// else hashes to `product-{base36}` via [`simple_hash`].
pub fn derive_product_id(url: &str) -> String {
    if let Some(captures) = ITEM_ID_PATTERN.captures(url) {
        return format!("aliexpress-{}", &captures[1]);
    }

    format!("product-{}", simple_hash(url))
}

/// 32-bit rolling hash, base-36 encoded.
///
/// The arithmetic must stay bit-exact (multiply by 31 as `(h << 5) - h`,
/// wrap to 32 bits each step, absolute value before encoding): callers may
/// have persisted identifiers produced by earlier versions, and changing a
/// single bit would orphan their cart entries. Iterates UTF-16 code units
/// to keep parity with identifiers derived from the same strings elsewhere
/// in the product.
pub fn simple_hash(s: &str) -> String {
    let mut hash: i32 = 0;
    for unit in s.encode_utf16() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit));
    }
    to_base36(hash.unsigned_abs())
}

/// Canonicalize a product URL to origin + path for cache-key stability,
/// discarding query string and fragment. Unparseable input is returned
/// unchanged rather than erroring.
pub fn canonical_product_url(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => format!("{}{}", parsed.origin().ascii_serialization(), parsed.path()),
        Err(_) => url.to_string(),
    }
}

const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

fn to_base36(mut value: u32) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE36_DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).expect("base36 digits are ASCII")
}
