//! 一括選択コマンド
//!
//! `artgrid select` の3ステップ（総件数取得 → 先頭N件の選択 → 指定ページ表示）。
//! 対話式の閲覧と違い、初回取得や表示ページの取得失敗はそのままエラーとして返す。

use crate::browse::selection_progress_bar;
use crate::error::{ArtgridError, Result};
use crate::render;
use artgrid_common::{Accumulation, CatalogSource, GalleryController, LoadOutcome};

/// 一括選択を実行し、`show_page`（1始まり）を表示できる状態にする
pub async fn run_select<S: CatalogSource>(
    controller: &mut GalleryController<S>,
    count: usize,
    show_page: usize,
) -> Result<Accumulation> {
    if show_page == 0 {
        return Err(ArtgridError::InvalidArgument("表示ページは1以上で指定してください".into()));
    }

    println!("[1/3] 総件数を取得中...");
    if let LoadOutcome::Failed(e) = controller.mount().await {
        return Err(ArtgridError::Fetch(e));
    }
    let window = controller.view().window();
    println!("✔ 総件数: {}\n", window.total_records);

    let page_count = window.page_count().max(1);
    if show_page > page_count {
        return Err(ArtgridError::InvalidArgument(format!(
            "表示ページは1〜{}で指定してください",
            page_count
        )));
    }

    println!("[2/3] 先頭{}件を選択中...", count);
    let bar = selection_progress_bar(count);
    let result = controller
        .on_bulk_select_submit(count, |done, _| bar.set_position(done as u64))
        .await;
    bar.finish_and_clear();

    let Some(accumulation) = result else {
        return Err(ArtgridError::InvalidArgument(format!(
            "件数は1〜{}で指定してください",
            window.total_records
        )));
    };
    println!("✔ {}", render::render_summary(&accumulation));
    let ids: Vec<String> = accumulation.ids.iter().map(|id| id.to_string()).collect();
    println!("  ID: {}\n", ids.join(", "));

    println!("[3/3] {}ページ目を表示", show_page);
    if show_page > 1 {
        match controller.on_page_change(show_page - 1).await {
            LoadOutcome::Loaded => {}
            LoadOutcome::Failed(e) => return Err(ArtgridError::Fetch(e)),
            LoadOutcome::Ignored => {
                return Err(ArtgridError::InvalidArgument(format!(
                    "表示ページは1〜{}で指定してください",
                    controller.view().window().page_count().max(1)
                )));
            }
        }
    }

    Ok(accumulation)
}
