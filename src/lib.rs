pub mod cli;
pub mod error;
pub mod extract;
pub mod identity;
pub mod normalize;
pub mod product;

pub use error::{PagemartError, Result};
pub use identity::{canonical_product_url, derive_product_id};
pub use normalize::normalize_product;
pub use product::{ProductImage, ProductRecord};
