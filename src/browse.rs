//! 対話式閲覧モジュール
//!
//! 1コマンドずつ最後まで実行してから次の入力を読むため、
//! 取得中に別の操作が割り込むことはない。

use crate::cli::BrowseCommand;
use crate::error::Result;
use crate::render;
use artgrid_common::{CatalogSource, GalleryController, LoadOutcome};
use dialoguer::Input;
use indicatif::{ProgressBar, ProgressStyle};

/// コマンド実行後の継続判定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Quit,
}

/// 一括選択用のプログレスバー
pub fn selection_progress_bar(target: usize) -> ProgressBar {
    let bar = ProgressBar::new(target as u64);
    if let Ok(style) = ProgressStyle::with_template("  {bar:30.cyan/blue} {pos}/{len}件 {msg}") {
        bar.set_style(style.progress_chars("=> "));
    }
    bar.set_message("先頭から取得中");
    bar
}

fn print_help() {
    println!("操作:");
    println!("  n / p        次 / 前のページ");
    println!("  g <番号>     指定ページへ移動（1始まり）");
    println!("  t <ID>       行の選択をトグル");
    println!("  a            表示中ページを全選択 / 全解除");
    println!("  s <件数>     先頭から指定件数を一括選択");
    println!("  z <件数>     ページサイズを変更");
    println!("  q            終了");
}

fn report(outcome: LoadOutcome) {
    // 取得失敗はコントローラ側でログ済み
    if outcome == LoadOutcome::Ignored {
        println!("範囲外のページです");
    }
}

/// 1コマンドを実行
pub async fn execute<S: CatalogSource>(
    controller: &mut GalleryController<S>,
    command: BrowseCommand,
) -> Step {
    let window = controller.view().window();

    match command {
        BrowseCommand::Next => {
            if window.has_next() {
                report(controller.on_page_change(window.page_index + 1).await);
            } else {
                println!("最後のページです");
            }
        }
        BrowseCommand::Prev => {
            if window.has_prev() {
                report(controller.on_page_change(window.page_index - 1).await);
            } else {
                println!("先頭のページです");
            }
        }
        BrowseCommand::Goto(page) => match page.checked_sub(1) {
            Some(index) => report(controller.on_page_change(index).await),
            None => println!("ページ番号は1以上で指定してください"),
        },
        BrowseCommand::Toggle(id) => {
            if controller.view().records().iter().any(|r| r.id == id) {
                controller.toggle_row(id);
            } else {
                println!("ID {} は表示中のページにありません", id);
            }
        }
        BrowseCommand::TogglePage => {
            controller.toggle_header();
        }
        BrowseCommand::Select(target) => {
            let bar = selection_progress_bar(target);
            let result = controller
                .on_bulk_select_submit(target, |done, _| bar.set_position(done as u64))
                .await;
            bar.finish_and_clear();
            match result {
                Some(accumulation) => println!("✔ {}", render::render_summary(&accumulation)),
                None => println!("件数は1〜{}で指定してください", window.total_records),
            }
        }
        BrowseCommand::PageSize(size) => {
            if size == 0 {
                println!("ページサイズは1以上で指定してください");
            } else {
                report(controller.on_page_size_change(size).await);
            }
        }
        BrowseCommand::Help => print_help(),
        BrowseCommand::Quit => return Step::Quit,
    }

    Step::Continue
}

/// 対話ループ
pub async fn run_browse<S: CatalogSource>(mut controller: GalleryController<S>) -> Result<()> {
    controller.mount().await;
    print_help();

    loop {
        println!("\n{}", render::render_view(controller.view()));

        let line: String = Input::new()
            .with_prompt("コマンド (h: ヘルプ)")
            .interact_text()?;

        match line.parse::<BrowseCommand>() {
            Ok(command) => {
                if execute(&mut controller, command).await == Step::Quit {
                    break;
                }
            }
            Err(message) => println!("{}", message),
        }
    }

    println!("選択中: {}件", controller.view().selection().len());
    Ok(())
}
