use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::redirect;

use crate::config::StoreConfig;
use crate::error::{Error, Result};
use crate::models::ProductRequest;

const MAX_REDIRECTS: usize = 10;

/// Builds the shared blocking client. No timeout is set on purpose: a stalled transfer blocks.
pub fn build_client(config: &StoreConfig) -> Result<Client> {
    let redirect_policy = redirect::Policy::custom(|attempt| {
        if attempt.previous().len() > MAX_REDIRECTS {
            attempt.error(format!("Too many redirects (>{})", MAX_REDIRECTS))
        } else {
            attempt.follow()
        }
    });

    Ok(Client::builder()
        .redirect(redirect_policy)
        .user_agent(config.user_agent.clone())
        .build()?)
}

pub struct Fetcher {
    client: Client,
    config: StoreConfig,
}

impl Fetcher {
    pub fn new(client: Client, config: StoreConfig) -> Self {
        Self { client, config }
    }

    /// GET the catalog page for a product. Anything but 200 is `PageNotFound`.
    pub fn fetch_catalog_page(&self, request: &ProductRequest) -> Result<String> {
        let url = self.config.catalog_url(request);
        tracing::debug!("Fetching catalog page {}", url);

        let resp = self.client.get(&url).send()?;
        if resp.status() != StatusCode::OK {
            return Err(Error::PageNotFound {
                url,
                status: resp.status().as_u16(),
            });
        }
        Ok(resp.text()?)
    }
}
