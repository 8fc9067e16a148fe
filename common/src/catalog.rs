//! カタログ取得の抽象化
//!
//! 実装はネイティブ(reqwest)とブラウザ(web-sys fetch)の2つ。
//! URL組み立てとレスポンス解析はここに集約し、両者で同じものを使う。

use crate::error::FetchError;
use crate::types::CatalogPage;

/// 既定のカタログエンドポイント
pub const DEFAULT_CATALOG_URL: &str = "https://api.artic.edu/api/v1/artworks";

/// 取得するフィールド（上流へのプロジェクション指定）
pub const RECORD_FIELDS: &[&str] = &[
    "id",
    "title",
    "place_of_origin",
    "artist_display",
    "inscriptions",
    "date_start",
    "date_end",
];

/// ページ単位でレコードを返すカタログ
///
/// `page` は1始まり。失敗時は `FetchError` を返し、リトライはしない。
#[allow(async_fn_in_trait)]
pub trait CatalogSource {
    async fn fetch_page(&self, page: usize, limit: usize) -> Result<CatalogPage, FetchError>;
}

/// ページ取得URLを組み立てる
///
/// ```
/// use artgrid_common::catalog_url;
/// let url = catalog_url("https://api.artic.edu/api/v1/artworks", 2, 10);
/// assert!(url.starts_with("https://api.artic.edu/api/v1/artworks?page=2&limit=10&fields=id,"));
/// ```
pub fn catalog_url(base_url: &str, page: usize, limit: usize) -> String {
    let base = base_url.trim_end_matches('/');
    let separator = if base.contains('?') { '&' } else { '?' };
    format!(
        "{}{}page={}&limit={}&fields={}",
        base,
        separator,
        page,
        limit,
        RECORD_FIELDS.join(",")
    )
}

/// レスポンス本文をパース
pub fn parse_catalog_page(body: &str) -> Result<CatalogPage, FetchError> {
    serde_json::from_str(body).map_err(FetchError::from)
}
