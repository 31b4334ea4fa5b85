use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};
use crate::models::{ProductKind, ProductRequest};

static PRODUCT_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/product/([0-9a-f]+)/ja").expect("valid product URL pattern"));

/// Pull the product ID and category out of a store URL.
pub fn extract_product_info(url: &str) -> Result<ProductRequest> {
    let caps = PRODUCT_URL
        .captures(url)
        .ok_or_else(|| Error::InvalidInput(format!("not a store product URL: {}", url)))?;

    let kind = if url.contains("/emojishop/") {
        ProductKind::Emoji
    } else {
        ProductKind::Sticker
    };
    Ok(ProductRequest::new(&caps[1], kind))
}

/// Accept either a store URL or a bare product ID. Bare IDs take `default_kind`.
pub fn resolve_input(input: &str, default_kind: ProductKind) -> Result<ProductRequest> {
    let input = input.trim();
    if input.contains('/') {
        return extract_product_info(input);
    }

    // The ID becomes a directory name, so keep it to plain alphanumerics.
    if input.is_empty() || !input.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(Error::InvalidInput(format!("not a product ID: '{}'", input)));
    }
    Ok(ProductRequest::new(input, default_kind))
}
