use crate::error::{ArtgridError, Result};
use artgrid_common::CatalogConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// ベースURLを上書きする環境変数
pub const BASE_URL_ENV: &str = "ARTGRID_BASE_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig::default(),
            timeout_seconds: 30,
        }
    }
}

impl Config {
    /// 既定の場所から読み込み（なければ既定値）
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.catalog.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.catalog.validate()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ArtgridError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("artgrid").join("config.json"))
    }

    /// 実際に使うベースURL（環境変数を優先）
    pub fn base_url(&self) -> String {
        Self::resolve_base_url(std::env::var(BASE_URL_ENV).ok(), &self.catalog.base_url)
    }

    fn resolve_base_url(env_value: Option<String>, configured: &str) -> String {
        match env_value {
            Some(url) if !url.trim().is_empty() => url.trim().to_string(),
            _ => configured.to_string(),
        }
    }

    pub fn set_base_url(&mut self, url: String) -> Result<()> {
        self.catalog.base_url = url;
        self.save()
    }

    pub fn set_page_size(&mut self, page_size: usize) -> Result<()> {
        self.catalog.page_size = page_size;
        self.save()
    }
}
