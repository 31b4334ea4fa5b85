use std::io::{self, BufWriter};
use std::path::Path;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use tempfile::NamedTempFile;

use crate::error::{Error, Result};

pub struct Downloader {
    client: Client,
}

impl Downloader {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Stream `url` into `dest`.
    ///
    /// The body is written to a temporary file beside `dest` and renamed over it once
    /// complete. A failed transfer leaves `dest` as it was.
    pub fn download_asset(&self, url: &str, dest: &Path) -> Result<u64> {
        if url.is_empty() {
            return Err(Error::EmptyAssetUrl {
                path: dest.display().to_string(),
            });
        }

        let mut resp = self.client.get(url).send()?;
        if resp.status() != StatusCode::OK {
            return Err(Error::AssetDownload {
                url: url.to_string(),
                status: resp.status().as_u16(),
            });
        }

        let dir = dest
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        let tmp = NamedTempFile::new_in(dir)?;

        let mut writer = BufWriter::new(tmp);
        let n = resp.copy_to(&mut writer).map_err(io::Error::other)?;
        let tmp = writer.into_inner().map_err(|e| e.into_error())?;
        tmp.persist(dest).map_err(|e| e.error)?;

        tracing::debug!("Wrote {} bytes to {}", n, dest.display());
        Ok(n)
    }
}
