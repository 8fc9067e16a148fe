//! カタログレコードの型定義
//!
//! ブラウザ(WASM)とCLIで共有される型:
//! - ArtworkRecord: 1件の作品レコード（読み取り専用）
//! - CatalogPage: 1ページ分のレスポンス（レコード + 総件数）

use serde::{Deserialize, Serialize};

/// レコード識別子（カタログ内で一意）
pub type RecordId = u64;

/// 作品レコード
///
/// 上流APIは表示用フィールドに `null` を返すことが多いため、
/// `id` 以外はすべて省略可能として扱う。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArtworkRecord {
    pub id: RecordId,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub place_of_origin: Option<String>,  // 制作地

    #[serde(default)]
    pub artist_display: Option<String>,   // 作者表記

    #[serde(default)]
    pub inscriptions: Option<String>,     // 銘文

    #[serde(default)]
    pub date_start: Option<i32>,          // 制作開始年

    #[serde(default)]
    pub date_end: Option<i32>,            // 制作終了年
}

impl ArtworkRecord {
    /// 表示用タイトル（未設定なら空文字）
    pub fn title_or_empty(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// 表示用の制作年範囲
    ///
    /// 開始年と終了年が同じなら1つだけ表示する。
    pub fn year_span(&self) -> String {
        match (self.date_start, self.date_end) {
            (Some(start), Some(end)) if start == end => start.to_string(),
            (Some(start), Some(end)) => format!("{}–{}", start, end),
            (Some(year), None) | (None, Some(year)) => year.to_string(),
            (None, None) => String::new(),
        }
    }
}

/// ページング情報
///
/// 使用するのは `total` のみ。その他は上流が返せば保持する。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pagination {
    pub total: usize,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
    pub total_pages: Option<usize>,
    pub current_page: Option<usize>,
}

/// カタログ1ページ分のレスポンス
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogPage {
    #[serde(default)]
    pub data: Vec<ArtworkRecord>,
    pub pagination: Pagination,
}

impl CatalogPage {
    /// 上流が報告した総件数
    pub fn total(&self) -> usize {
        self.pagination.total
    }

    /// このページのレコードID（カタログ順）
    pub fn ids(&self) -> Vec<RecordId> {
        self.data.iter().map(|r| r.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_deserialize_with_nulls() {
        let json = r#"{
            "id": 27992,
            "title": "A Sunday on La Grande Jatte — 1884",
            "place_of_origin": "France",
            "artist_display": "Georges Seurat\nFrench, 1859-1891",
            "inscriptions": null,
            "date_start": 1884,
            "date_end": 1886
        }"#;

        let record: ArtworkRecord = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(record.id, 27992);
        assert_eq!(record.place_of_origin.as_deref(), Some("France"));
        assert_eq!(record.inscriptions, None);
        assert_eq!(record.date_end, Some(1886));
    }

    #[test]
    fn test_record_deserialize_id_only() {
        let record: ArtworkRecord = serde_json::from_str(r#"{"id": 1}"#).expect("デシリアライズ失敗");
        assert_eq!(record.id, 1);
        assert_eq!(record.title_or_empty(), "");
        assert_eq!(record.year_span(), "");
    }

    #[test]
    fn test_record_missing_id_is_error() {
        let result = serde_json::from_str::<ArtworkRecord>(r#"{"title": "no id"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_year_span() {
        let same = ArtworkRecord { id: 1, date_start: Some(1900), date_end: Some(1900), ..Default::default() };
        let range = ArtworkRecord { id: 2, date_start: Some(1884), date_end: Some(1886), ..Default::default() };
        let start_only = ArtworkRecord { id: 3, date_start: Some(1750), ..Default::default() };

        assert_eq!(same.year_span(), "1900");
        assert_eq!(range.year_span(), "1884–1886");
        assert_eq!(start_only.year_span(), "1750");
    }

    #[test]
    fn test_catalog_page_ignores_unknown_fields() {
        let json = r#"{
            "pagination": {"total": 125000, "limit": 2, "offset": 0, "total_pages": 62500, "current_page": 1, "next_url": "x"},
            "data": [
                {"id": 10, "title": "A", "image_id": "abc"},
                {"id": 11, "title": "B"}
            ],
            "info": {"license_text": "CC0"},
            "config": {"iiif_url": "https://example.invalid"}
        }"#;

        let page: CatalogPage = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(page.total(), 125000);
        assert_eq!(page.ids(), vec![10, 11]);
        assert_eq!(page.pagination.current_page, Some(1));
    }

    #[test]
    fn test_catalog_page_missing_data_is_empty() {
        let page: CatalogPage = serde_json::from_str(r#"{"pagination": {"total": 0}}"#).expect("デシリアライズ失敗");
        assert!(page.data.is_empty());
        assert_eq!(page.total(), 0);
    }
}
