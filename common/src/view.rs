//! 一覧ビューの状態
//!
//! 状態遷移: `Idle → Loading → (Loaded | Failed)`。
//! `Failed` は直ちに `Idle` に戻り、直前の表示はそのまま残る。
//!
//! 取得処理そのものは持たない。`request_*` で要求を受け付けて `Loading` に入り、
//! 呼び出し側が取得した結果を `complete_*` で反映する。
//! `Loading` 中の要求（ページ移動・サイズ変更・一括選択・行トグル）はすべて無視する。

use crate::accumulator::{Accumulation, BulkSelectRequest};
use crate::error::FetchError;
use crate::reconcile::{self, HeaderState};
use crate::selection::SelectionSet;
use crate::types::{ArtworkRecord, CatalogPage, RecordId};
use crate::window::PageWindow;

/// ビューの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewStatus {
    Idle,
    Loading,
    Loaded,
}

/// 受け付けたページ取得要求
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 取得成功後に表示するウィンドウ
    pub window: PageWindow,
}

impl PageRequest {
    pub fn api_page(&self) -> usize {
        self.window.api_page()
    }

    pub fn limit(&self) -> usize {
        self.window.page_size
    }
}

/// セッション単位の一覧ビュー状態
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryView {
    window: PageWindow,
    records: Vec<ArtworkRecord>,
    selection: SelectionSet,
    status: ViewStatus,
}

impl GalleryView {
    pub fn new(page_size: usize) -> Self {
        Self {
            window: PageWindow::new(page_size),
            records: Vec::new(),
            selection: SelectionSet::new(),
            status: ViewStatus::Idle,
        }
    }

    pub fn window(&self) -> PageWindow {
        self.window
    }

    pub fn records(&self) -> &[ArtworkRecord] {
        &self.records
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn status(&self) -> ViewStatus {
        self.status
    }

    pub fn is_busy(&self) -> bool {
        self.status == ViewStatus::Loading
    }

    /// 表示中ページでチェックされている行
    pub fn checked_ids(&self) -> Vec<RecordId> {
        reconcile::checked_ids(&self.records, &self.selection)
    }

    pub fn is_checked(&self, id: RecordId) -> bool {
        self.selection.contains(id)
    }

    pub fn header_state(&self) -> HeaderState {
        reconcile::header_state(&self.records, &self.selection)
    }

    // =============================================
    // ページ取得
    // =============================================

    /// 現在のウィンドウを再取得（マウント時）
    pub fn request_reload(&mut self) -> Option<PageRequest> {
        self.begin(self.window)
    }

    /// ページ移動（0始まり）
    ///
    /// 総件数が分かっていて範囲外なら無視する。
    pub fn request_page(&mut self, page_index: usize) -> Option<PageRequest> {
        let count = self.window.page_count();
        if count > 0 && page_index >= count {
            return None;
        }
        self.begin(self.window.with_page(page_index))
    }

    /// ページサイズ変更
    pub fn request_page_size(&mut self, page_size: usize) -> Option<PageRequest> {
        if page_size == 0 {
            return None;
        }
        self.begin(self.window.with_page_size(page_size))
    }

    fn begin(&mut self, window: PageWindow) -> Option<PageRequest> {
        if self.is_busy() {
            return None;
        }
        self.status = ViewStatus::Loading;
        Some(PageRequest { window })
    }

    /// ページ取得結果を反映
    ///
    /// 失敗時は表示を変えずに `Idle` へ戻り、エラーをそのまま返す（ログは呼び出し側）。
    pub fn complete_page(
        &mut self,
        request: PageRequest,
        result: Result<CatalogPage, FetchError>,
    ) -> Result<(), FetchError> {
        match result {
            Ok(page) => {
                self.window = request.window.with_total(page.total());
                self.records = page.data;
                self.status = ViewStatus::Loaded;
                Ok(())
            }
            Err(e) => {
                self.status = ViewStatus::Idle;
                Err(e)
            }
        }
    }

    // =============================================
    // 一括選択
    // =============================================

    /// 一括選択の受付
    ///
    /// 範囲外（0件・総件数超過）やビジー中は `None` で、状態は変わらない。
    /// ページサイズは表示中のものを使う。
    pub fn request_bulk_select(&mut self, target: usize) -> Option<BulkSelectRequest> {
        if self.is_busy() {
            return None;
        }
        let request =
            BulkSelectRequest::new(target, self.window.page_size, self.window.total_records)?;
        self.status = ViewStatus::Loading;
        Some(request)
    }

    /// 一括選択の確定: 選択集合を先頭N件で置き換える（部分結果でも確定）
    pub fn complete_bulk_select(&mut self, accumulation: &Accumulation) {
        self.selection.replace_with(accumulation.ids.iter().copied());
        self.status = if self.records.is_empty() {
            ViewStatus::Idle
        } else {
            ViewStatus::Loaded
        };
    }

    // =============================================
    // 行選択
    // =============================================

    /// グリッドから報告された「表示中ページでチェックされている行」を反映
    pub fn apply_page_selection(&mut self, checked: &[RecordId]) -> bool {
        if self.is_busy() {
            return false;
        }
        let page_ids: Vec<RecordId> = self.records.iter().map(|r| r.id).collect();
        self.selection.set_page_members(&page_ids, checked);
        true
    }

    /// 1行トグル
    pub fn toggle_row(&mut self, id: RecordId) -> bool {
        let checked = reconcile::row_toggle_ids(&self.records, &self.selection, id);
        self.apply_page_selection(&checked)
    }

    /// ヘッダーチェックボックスのクリック
    pub fn toggle_header(&mut self) -> bool {
        let checked = reconcile::header_click_ids(&self.records, &self.selection);
        self.apply_page_selection(&checked)
    }
}
