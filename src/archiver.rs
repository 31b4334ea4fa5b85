use std::fs;

use crate::assets::select_asset;
use crate::config::StoreConfig;
use crate::downloader::Downloader;
use crate::error::{Error, Result};
use crate::fetcher::{Fetcher, build_client};
use crate::models::ProductRequest;
use crate::parser::extract_records;

/// What happened to one product's catalog entries.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PackReport {
    pub product_id: String,
    pub downloaded: usize,
    pub missing_asset: usize,
    pub failed: usize,
    pub malformed: usize,
}

impl PackReport {
    pub fn total(&self) -> usize {
        self.downloaded + self.missing_asset + self.failed + self.malformed
    }
}

pub struct Archiver {
    config: StoreConfig,
    fetcher: Fetcher,
    downloader: Downloader,
}

impl Archiver {
    pub fn new(config: StoreConfig) -> Result<Self> {
        let client = build_client(&config)?;
        Ok(Self::with_client(client, config))
    }

    pub fn with_client(client: reqwest::blocking::Client, config: StoreConfig) -> Self {
        Self {
            fetcher: Fetcher::new(client.clone(), config.clone()),
            downloader: Downloader::new(client),
            config,
        }
    }

    /// Fetch a product's catalog and save one asset per entry under `<base_dir>/<product_id>/`.
    ///
    /// Only directory creation and the catalog fetch are fatal; individual entries that fail
    /// are logged and counted in the report.
    pub fn download_pack(&self, request: &ProductRequest) -> Result<PackReport> {
        let save_dir = self.config.product_dir(request);
        fs::create_dir_all(&save_dir)?;

        let html = self.fetcher.fetch_catalog_page(request)?;
        let extraction = extract_records(&html);

        let mut report = PackReport {
            product_id: request.product_id.clone(),
            malformed: extraction.malformed.len(),
            ..Default::default()
        };
        for e in &extraction.malformed {
            tracing::warn!("Skipping entry: {}", e);
        }

        if extraction.records.is_empty() {
            tracing::warn!("No {}s found for product {}", request.kind, request.product_id);
            return Ok(report);
        }

        for record in &extraction.records {
            let Some(asset) = select_asset(record) else {
                let e = Error::MissingAssetUrl {
                    id: record.id.to_string(),
                };
                tracing::warn!("{}", e);
                report.missing_asset += 1;
                continue;
            };

            if asset.file_name.contains(['/', '\\']) {
                tracing::warn!("Skipping sticker with unsafe id: {}", record.id);
                report.failed += 1;
                continue;
            }

            let save_path = save_dir.join(&asset.file_name);
            tracing::debug!("Sticker {}: using {:?} asset {}", record.id, asset.kind, asset.url);
            match self.downloader.download_asset(&asset.url, &save_path) {
                Ok(_) => {
                    tracing::info!("Downloaded: {}", save_path.display());
                    report.downloaded += 1;
                }
                Err(e) => {
                    tracing::warn!("{}", e);
                    report.failed += 1;
                }
            }
        }

        tracing::info!(
            "Product {}: {}/{} downloaded, {} without asset, {} failed, {} malformed",
            report.product_id,
            report.downloaded,
            report.total(),
            report.missing_asset,
            report.failed,
            report.malformed
        );
        Ok(report)
    }
}
