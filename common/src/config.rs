//! カタログ設定
//!
//! ブラウザは既定値のみ、CLIは設定ファイルから読み込んだ値を使う。

use crate::catalog::DEFAULT_CATALOG_URL;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// 既定のページサイズ
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// ページサイズ選択肢
pub const PAGE_SIZE_OPTIONS: &[usize] = &[5, 10, 20, 50];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub base_url: String,
    pub page_size: usize,
    pub page_size_options: Vec<usize>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_CATALOG_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            page_size_options: PAGE_SIZE_OPTIONS.to_vec(),
        }
    }
}

impl CatalogConfig {
    /// 設定値の妥当性チェック
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(Error::Config("base_url が空です".into()));
        }
        if self.page_size == 0 {
            return Err(Error::Config("page_size は1以上が必要です".into()));
        }
        if self.page_size_options.iter().any(|&s| s == 0) {
            return Err(Error::Config("page_size_options に0が含まれています".into()));
        }
        Ok(())
    }

    /// 選択肢に現在のページサイズを含めたリスト（昇順・重複なし）
    pub fn size_choices(&self) -> Vec<usize> {
        let mut choices = self.page_size_options.clone();
        choices.push(self.page_size);
        choices.sort_unstable();
        choices.dedup();
        choices
    }
}
