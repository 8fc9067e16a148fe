//! 一括選択の進捗バー

use leptos::prelude::*;

/// (集めた件数, 目標件数) から割合を求める
pub fn progress_ratio(done: usize, target: usize) -> f32 {
    if target == 0 {
        return 0.0;
    }
    (done.min(target) as f32) / (target as f32)
}

#[component]
pub fn ProgressBar(progress: ReadSignal<Option<(usize, usize)>>) -> impl IntoView {
    let ratio = move || {
        progress
            .get()
            .map(|(done, target)| progress_ratio(done, target))
            .unwrap_or(0.0)
    };

    view! {
        <div class="progress-container">
            <div class="progress-bar">
                <div
                    class="progress-fill"
                    style=move || format!("width: {}%", ratio() * 100.0)
                />
            </div>
            <p class="progress-text">
                {move || match progress.get() {
                    Some((done, target)) => format!("選択中... {} / {}件", done, target),
                    None => String::new(),
                }}
            </p>
        </div>
    }
}
