//! ヘッダー（タイトルと選択件数）

use leptos::prelude::*;

/// 「選択中 N / 総件数」の表示文字列
pub fn selection_badge(selected: usize, total: usize) -> String {
    if total == 0 {
        format!("選択中: {}件", selected)
    } else {
        format!("選択中: {} / {}件", selected, total)
    }
}

#[component]
pub fn Header(selected: Signal<usize>, total: Signal<usize>) -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Art Gallery - 作品カタログ"</h1>
            <span class="selection-badge" class:active=move || selected.get() > 0>
                {move || selection_badge(selected.get(), total.get())}
            </span>
        </header>
    }
}
