//! テスト用のメモリ上カタログ

use crate::catalog::CatalogSource;
use crate::error::FetchError;
use crate::types::{ArtworkRecord, CatalogPage, Pagination};
use std::cell::{Cell, RefCell};

/// ID 1..=n のレコードを持つカタログ
pub(crate) struct MemoryCatalog {
    records: Vec<ArtworkRecord>,
    reported_total: Option<usize>,
    fail_on: Cell<Option<usize>>,
    calls: RefCell<Vec<(usize, usize)>>,
}

impl MemoryCatalog {
    pub(crate) fn sequential(n: u64) -> Self {
        let records = (1..=n)
            .map(|id| ArtworkRecord {
                id,
                title: Some(format!("Artwork {}", id)),
                date_start: Some(1800 + id as i32),
                ..Default::default()
            })
            .collect();
        Self {
            records,
            reported_total: None,
            fail_on: Cell::new(None),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// 指定ページ（1始まり）の取得を HTTP 500 で失敗させる
    pub(crate) fn failing_on(self, page: usize) -> Self {
        self.fail_on.set(Some(page));
        self
    }

    /// 実件数と異なる総件数を報告させる
    pub(crate) fn reporting_total(mut self, total: usize) -> Self {
        self.reported_total = Some(total);
        self
    }

    pub(crate) fn set_failing_on(&self, page: Option<usize>) {
        self.fail_on.set(page);
    }

    /// これまでに受けた (page, limit) の一覧
    pub(crate) fn requested_pages(&self) -> Vec<(usize, usize)> {
        self.calls.borrow().clone()
    }
}

impl CatalogSource for MemoryCatalog {
    async fn fetch_page(&self, page: usize, limit: usize) -> Result<CatalogPage, FetchError> {
        self.calls.borrow_mut().push((page, limit));
        if self.fail_on.get() == Some(page) {
            return Err(FetchError::Status(500));
        }

        let start = page.saturating_sub(1) * limit;
        let data = self.records.iter().skip(start).take(limit).cloned().collect();
        Ok(CatalogPage {
            data,
            pagination: Pagination {
                total: self.reported_total.unwrap_or(self.records.len()),
                limit: Some(limit),
                offset: Some(start),
                current_page: Some(page),
                ..Default::default()
            },
        })
    }
}
