//! Error types for the sticker downloader.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Catalog page not found ({status}): {url}")]
    PageNotFound { url: String, status: u16 },

    #[error("Malformed catalog entry: {0}")]
    MalformedRecord(#[from] serde_json::Error),

    #[error("No asset URL for sticker {id}")]
    MissingAssetUrl { id: String },

    #[error("No URL to download for {path}")]
    EmptyAssetUrl { path: String },

    #[error("Failed to download {url} ({status})")]
    AssetDownload { url: String, status: u16 },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
