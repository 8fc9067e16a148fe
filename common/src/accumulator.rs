//! 一括選択: 先頭N件のIDをページ横断で集める
//!
//! 上流には「先頭N件のID」を返すAPIがないため、表示と同じページサイズで
//! 1ページ目から順に取得し、N件またはカタログ終端に達するまで繰り返す。
//! 取得は常に逐次（前のリクエスト完了後に次を発行）。

use crate::catalog::CatalogSource;
use crate::error::FetchError;
use crate::types::RecordId;
use tracing::{debug, warn};

/// 目標件数の妥当性チェック（1 ≤ N ≤ 総件数）
pub fn is_valid_target(target: usize, total_records: usize) -> bool {
    target >= 1 && target <= total_records
}

/// 検証済みの一括選択リクエスト
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulkSelectRequest {
    pub target: usize,
    pub page_size: usize,
    pub total_records: usize,
}

impl BulkSelectRequest {
    /// 範囲外の目標件数なら `None`（何もしない）
    pub fn new(target: usize, page_size: usize, total_records: usize) -> Option<Self> {
        if !is_valid_target(target, total_records) || page_size == 0 {
            return None;
        }
        Some(Self { target, page_size, total_records })
    }
}

/// 収集結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accumulation {
    /// 選択するID（カタログ順、最大 target 件）
    pub ids: Vec<RecordId>,
    pub target: usize,
    pub pages_fetched: usize,
    /// カタログ終端（総件数到達または空ページ）で止まった
    pub exhausted: bool,
    /// 途中で止めた取得エラー
    pub failure: Option<FetchError>,
}

impl Accumulation {
    /// 目標件数に届かなかった
    pub fn is_partial(&self) -> bool {
        self.ids.len() < self.target
    }
}

/// 先頭から順にページを取得し、先頭 `target` 件のIDを返す
///
/// 取得エラーはここで止めて、それまでに集めた分を返す（呼び出し側にはエラーにしない）。
/// `on_progress(集めた件数, 目標件数)` はページ取得ごとに呼ばれる。
pub async fn accumulate_first_n<S>(
    source: &S,
    request: &BulkSelectRequest,
    on_progress: impl Fn(usize, usize),
) -> Accumulation
where
    S: CatalogSource + ?Sized,
{
    let target = request.target;
    let mut buffer: Vec<RecordId> = Vec::with_capacity(target);
    let mut total = request.total_records;
    let mut cursor = 1;
    let mut pages_fetched = 0;
    let mut hit_empty_page = false;
    let mut failure = None;

    while buffer.len() < target && buffer.len() < total {
        match source.fetch_page(cursor, request.page_size).await {
            Ok(page) => {
                pages_fetched += 1;
                total = page.total();
                if page.data.is_empty() {
                    debug!(page = cursor, "empty page, stopping accumulation");
                    hit_empty_page = true;
                    break;
                }
                buffer.extend(page.data.iter().map(|r| r.id));
                debug!(page = cursor, accumulated = buffer.len(), target, total, "page accumulated");
                on_progress(buffer.len().min(target), target);
                cursor += 1;
            }
            Err(e) => {
                warn!(page = cursor, accumulated = buffer.len(), error = %e, "fetch failed during bulk select");
                failure = Some(e);
                break;
            }
        }
    }

    let exhausted = failure.is_none() && (hit_empty_page || buffer.len() >= total);
    buffer.truncate(target);

    Accumulation {
        ids: buffer,
        target,
        pages_fetched,
        exhausted,
        failure,
    }
}
