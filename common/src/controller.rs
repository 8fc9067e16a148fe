//! 非同期コントローラ
//!
//! `GalleryView` と `CatalogSource` を束ね、UI層へ公開するコールバック
//! （ページ移動・行トグル・一括選択・ページサイズ変更）を逐次の `await` で実装する。
//! ブラウザ側はシグナル経由で `GalleryView` を直接操作するため、主にCLIから使う。

use crate::accumulator::{accumulate_first_n, Accumulation};
use crate::catalog::CatalogSource;
use crate::error::FetchError;
use crate::types::RecordId;
use crate::view::{GalleryView, PageRequest};
use tracing::{debug, info, warn};

/// ページ取得操作の結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// ビジー中または範囲外のため受け付けなかった
    Ignored,
    Loaded,
    /// 取得失敗（ログ済み、表示は直前のまま）
    Failed(FetchError),
}

pub struct GalleryController<S> {
    source: S,
    view: GalleryView,
}

impl<S: CatalogSource> GalleryController<S> {
    pub fn new(source: S, page_size: usize) -> Self {
        Self {
            source,
            view: GalleryView::new(page_size),
        }
    }

    pub fn view(&self) -> &GalleryView {
        &self.view
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// 初回表示（先頭ページ取得）
    pub async fn mount(&mut self) -> LoadOutcome {
        let request = self.view.request_reload();
        self.load(request).await
    }

    /// onPageChange（0始まり）
    pub async fn on_page_change(&mut self, page_index: usize) -> LoadOutcome {
        let request = self.view.request_page(page_index);
        self.load(request).await
    }

    /// onPageSizeChange
    pub async fn on_page_size_change(&mut self, page_size: usize) -> LoadOutcome {
        let request = self.view.request_page_size(page_size);
        self.load(request).await
    }

    /// onSelectionToggle: 表示中ページでチェックされている行を受け取る
    pub fn on_selection_toggle(&mut self, checked: &[RecordId]) -> bool {
        self.view.apply_page_selection(checked)
    }

    pub fn toggle_row(&mut self, id: RecordId) -> bool {
        self.view.toggle_row(id)
    }

    pub fn toggle_header(&mut self) -> bool {
        self.view.toggle_header()
    }

    /// onBulkSelectSubmit
    ///
    /// 範囲外・ビジー中は `None`。取得失敗で止まった場合も部分結果で確定する。
    pub async fn on_bulk_select_submit(
        &mut self,
        target: usize,
        on_progress: impl Fn(usize, usize),
    ) -> Option<Accumulation> {
        let Some(request) = self.view.request_bulk_select(target) else {
            debug!(target, total = self.view.window().total_records, "bulk select rejected");
            return None;
        };

        let accumulation = accumulate_first_n(&self.source, &request, on_progress).await;
        if let Some(e) = &accumulation.failure {
            warn!(error = %e, selected = accumulation.ids.len(), target, "bulk select stopped early");
        }
        self.view.complete_bulk_select(&accumulation);
        info!(
            selected = accumulation.ids.len(),
            pages = accumulation.pages_fetched,
            "bulk selection committed"
        );
        Some(accumulation)
    }

    async fn load(&mut self, request: Option<PageRequest>) -> LoadOutcome {
        let Some(request) = request else {
            return LoadOutcome::Ignored;
        };

        let result = self
            .source
            .fetch_page(request.api_page(), request.limit())
            .await;
        match self.view.complete_page(request, result) {
            Ok(()) => {
                debug!(page = request.api_page(), limit = request.limit(), "page loaded");
                LoadOutcome::Loaded
            }
            Err(e) => {
                warn!(page = request.api_page(), error = %e, "error fetching page");
                LoadOutcome::Failed(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryCatalog;
    use crate::view::ViewStatus;
    use futures::executor::block_on;

    fn mounted(total: u64, page_size: usize) -> GalleryController<MemoryCatalog> {
        let mut controller = GalleryController::new(MemoryCatalog::sequential(total), page_size);
        assert_eq!(block_on(controller.mount()), LoadOutcome::Loaded);
        controller
    }

    #[test]
    fn test_page_change() {
        let mut controller = mounted(25, 10);
        assert_eq!(block_on(controller.on_page_change(2)), LoadOutcome::Loaded);
        assert_eq!(controller.view().records().len(), 5);
        assert_eq!(controller.view().window().page_index, 2);
    }

    #[test]
    fn test_page_change_out_of_range_ignored() {
        let mut controller = mounted(25, 10);
        assert_eq!(block_on(controller.on_page_change(9)), LoadOutcome::Ignored);
        assert_eq!(controller.source().requested_pages().len(), 1);
    }

    #[test]
    fn test_page_change_failure_is_swallowed() {
        let mut controller = mounted(25, 10);
        controller.source().set_failing_on(Some(2));

        let outcome = block_on(controller.on_page_change(1));
        assert_eq!(outcome, LoadOutcome::Failed(FetchError::Status(500)));
        assert_eq!(controller.view().status(), ViewStatus::Idle);
        assert_eq!(controller.view().records()[0].id, 1);

        // 失敗後も次の操作を受け付ける
        controller.source().set_failing_on(None);
        assert_eq!(block_on(controller.on_page_change(1)), LoadOutcome::Loaded);
    }

    #[test]
    fn test_bulk_select_then_display_second_page() {
        let mut controller = mounted(25, 10);
        let accumulation = block_on(controller.on_bulk_select_submit(15, |_, _| {}))
            .expect("範囲内のはず");
        assert_eq!(accumulation.ids.len(), 15);

        block_on(controller.on_page_change(1));
        assert_eq!(controller.view().checked_ids(), vec![11, 12, 13, 14, 15]);
    }

    #[test]
    fn test_bulk_select_before_mount_is_rejected() {
        // 総件数が未取得（0）なのでどの目標件数も範囲外
        let mut controller = GalleryController::new(MemoryCatalog::sequential(25), 10);
        assert!(block_on(controller.on_bulk_select_submit(5, |_, _| {})).is_none());
        assert!(controller.source().requested_pages().is_empty());
    }

    #[test]
    fn test_bulk_select_twice_same_result() {
        let mut controller = mounted(33, 10);
        block_on(controller.on_bulk_select_submit(21, |_, _| {}));
        let first = controller.view().selection().clone();
        block_on(controller.on_bulk_select_submit(21, |_, _| {}));
        assert_eq!(controller.view().selection(), &first);
        assert_eq!(first.len(), 21);
    }

    #[test]
    fn test_selection_toggle_only_touches_current_page() {
        let mut controller = mounted(25, 10);
        block_on(controller.on_bulk_select_submit(12, |_, _| {}));

        // 1ページ目で 3 と 4 を外す
        let checked: Vec<RecordId> = (1..=10).filter(|id| *id != 3 && *id != 4).collect();
        assert!(controller.on_selection_toggle(&checked));

        let selected: Vec<RecordId> = controller.view().selection().iter().collect();
        assert_eq!(selected, vec![1, 2, 5, 6, 7, 8, 9, 10, 11, 12]);
    }
}
