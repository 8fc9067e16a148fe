//! Artgrid Common Library
//!
//! ブラウザ(WASM)とCLIで共有される型と選択ロジック

pub mod types;
pub mod error;
pub mod config;
pub mod catalog;
pub mod window;
pub mod selection;
pub mod reconcile;
pub mod accumulator;
pub mod view;
pub mod controller;

#[cfg(test)]
mod testing;

pub use types::{ArtworkRecord, CatalogPage, Pagination, RecordId};
pub use error::{Error, FetchError, Result};
pub use config::{CatalogConfig, DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
pub use catalog::{catalog_url, parse_catalog_page, CatalogSource, DEFAULT_CATALOG_URL};
pub use window::PageWindow;
pub use selection::SelectionSet;
pub use reconcile::{checked_ids, header_state, HeaderState};
pub use accumulator::{accumulate_first_n, is_valid_target, Accumulation, BulkSelectRequest};
pub use view::{GalleryView, PageRequest, ViewStatus};
pub use controller::{GalleryController, LoadOutcome};
