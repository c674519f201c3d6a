//! Command implementations for the pagemart CLI

use std::fs;
use std::io::Read;

use colored::Colorize;

use pagemart::identity::{canonical_product_url, derive_product_id, DEFAULT_PRODUCT_URL};
use pagemart::normalize::normalize_product;
use pagemart::Result;

pub fn cmd_normalize(file: &str, compact: bool) -> Result<()> {
    let raw_html = if file == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(file)?
    };

    let record = normalize_product(&raw_html);

    let json = if compact {
        serde_json::to_string(&record)?
    } else {
        serde_json::to_string_pretty(&record)?
    };
    println!("{json}");
    Ok(())
}

pub fn cmd_id(url: Option<&str>) -> Result<()> {
    if url.is_none() {
        eprintln!(
            "{}",
            format!("No URL given, using demo product: {DEFAULT_PRODUCT_URL}").dimmed()
        );
    }
    let url = url.unwrap_or(DEFAULT_PRODUCT_URL);
    println!("{}", derive_product_id(url));
    Ok(())
}

pub fn cmd_canon(url: &str) -> Result<()> {
    println!("{}", canonical_product_url(url));
    Ok(())
}
