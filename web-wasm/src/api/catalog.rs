//! ブラウザ用カタログクライアント
//!
//! `CatalogSource` のfetch実装。失敗時のリトライはしない。

use artgrid_common::{catalog_url, CatalogPage, CatalogSource, FetchError};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

fn js_error(value: JsValue) -> FetchError {
    FetchError::Network(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

#[derive(Debug, Clone)]
pub struct WebCatalog {
    base_url: String,
}

impl WebCatalog {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }
}

impl CatalogSource for WebCatalog {
    async fn fetch_page(&self, page: usize, limit: usize) -> Result<CatalogPage, FetchError> {
        let url = catalog_url(&self.base_url, page, limit);

        let opts = RequestInit::new();
        opts.set_method("GET");
        opts.set_mode(RequestMode::Cors);

        let request = Request::new_with_str_and_init(&url, &opts).map_err(js_error)?;
        request
            .headers()
            .set("Accept", "application/json")
            .map_err(js_error)?;

        let window = web_sys::window()
            .ok_or_else(|| FetchError::Network("window が取得できません".into()))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_error)?;
        let resp: Response = resp_value.dyn_into().map_err(js_error)?;

        if !resp.ok() {
            return Err(FetchError::Status(resp.status()));
        }

        let json = JsFuture::from(resp.json().map_err(js_error)?)
            .await
            .map_err(|e| FetchError::Parse(format!("{:?}", e)))?;
        serde_wasm_bindgen::from_value(json).map_err(|e| FetchError::Parse(e.to_string()))
    }
}
