//! reqwestによるカタログクライアント
//!
//! `CatalogSource` のネイティブ実装。リトライはしない。

use crate::error::{ArtgridError, Result};
use artgrid_common::{catalog_url, parse_catalog_page, CatalogPage, CatalogSource, FetchError};
use reqwest::header::ACCEPT;
use std::time::Duration;
use tracing::debug;

pub struct HttpCatalog {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalog {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("artgrid/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ArtgridError::HttpClient(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl CatalogSource for HttpCatalog {
    async fn fetch_page(&self, page: usize, limit: usize) -> std::result::Result<CatalogPage, FetchError> {
        let url = catalog_url(&self.base_url, page, limit);
        debug!(%url, "GET catalog page");

        let resp = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = resp
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        parse_catalog_page(&body)
    }
}
