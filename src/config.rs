use std::path::PathBuf;

use crate::models::{ProductKind, ProductRequest};

pub const STICKER_URL_TEMPLATE: &str = "https://store.line.me/stickershop/product/{}/ja";
pub const EMOJI_URL_TEMPLATE: &str = "https://store.line.me/emojishop/product/{}/ja";
pub const DEFAULT_BASE_DIR: &str = "stickers";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3";

/// Store endpoints and output location. `{}` in a template is replaced by the product ID.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub sticker_url_template: String,
    pub emoji_url_template: String,
    pub base_dir: PathBuf,
    pub user_agent: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            sticker_url_template: STICKER_URL_TEMPLATE.to_string(),
            emoji_url_template: EMOJI_URL_TEMPLATE.to_string(),
            base_dir: PathBuf::from(DEFAULT_BASE_DIR),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl StoreConfig {
    pub fn with_base_dir(mut self, base_dir: impl Into<PathBuf>) -> Self {
        self.base_dir = base_dir.into();
        self
    }

    pub fn catalog_url(&self, request: &ProductRequest) -> String {
        let template = match request.kind {
            ProductKind::Sticker => &self.sticker_url_template,
            ProductKind::Emoji => &self.emoji_url_template,
        };
        template.replace("{}", &request.product_id)
    }

    pub fn product_dir(&self, request: &ProductRequest) -> PathBuf {
        self.base_dir.join(&request.product_id)
    }
}
