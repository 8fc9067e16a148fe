//! ページ送り・ページサイズ選択

use leptos::prelude::*;
use artgrid_common::GalleryView;

/// 表示するページ番号リンク（0始まり、現在ページを中心に最大 `span` 個）
pub fn page_links(current: usize, page_count: usize, span: usize) -> Vec<usize> {
    if page_count == 0 || span == 0 {
        return Vec::new();
    }
    let span = span.min(page_count);
    let start = current
        .saturating_sub(span / 2)
        .min(page_count - span);
    (start..start + span).collect()
}

#[component]
pub fn Paginator<FP, FS>(
    gallery: ReadSignal<GalleryView>,
    size_choices: Vec<usize>,
    on_page_change: FP,
    on_page_size_change: FS,
) -> impl IntoView
where
    FP: Fn(usize) + 'static + Clone + Send + Sync,
    FS: Fn(usize) + 'static + Clone + Send + Sync,
{
    let busy = move || gallery.with(|g| g.is_busy());
    let window = move || gallery.with(|g| g.window());

    view! {
        <div class="paginator">
            <button
                class="btn btn-small btn-secondary"
                disabled=move || busy() || !window().has_prev()
                on:click={
                    let on_page_change = on_page_change.clone();
                    move |_| on_page_change(0)
                }
            >
                "«"
            </button>
            <button
                class="btn btn-small btn-secondary"
                disabled=move || busy() || !window().has_prev()
                on:click={
                    let on_page_change = on_page_change.clone();
                    move |_| on_page_change(window().page_index.saturating_sub(1))
                }
            >
                "‹"
            </button>

            <For
                each=move || {
                    let w = window();
                    page_links(w.page_index, w.page_count(), 5)
                }
                key=|page| *page
                children={
                    let on_page_change = on_page_change.clone();
                    move |page| {
                        let on_page_change = on_page_change.clone();
                        view! {
                            <button
                                class="btn btn-small page-link"
                                class:active=move || window().page_index == page
                                disabled=busy
                                on:click=move |_| on_page_change(page)
                            >
                                {page + 1}
                            </button>
                        }
                    }
                }
            />

            <button
                class="btn btn-small btn-secondary"
                disabled=move || busy() || !window().has_next()
                on:click={
                    let on_page_change = on_page_change.clone();
                    move |_| on_page_change(window().page_index + 1)
                }
            >
                "›"
            </button>
            <button
                class="btn btn-small btn-secondary"
                disabled=move || busy() || !window().has_next()
                on:click=move |_| on_page_change(window().page_count().saturating_sub(1))
            >
                "»"
            </button>

            <span class="page-range">
                {move || gallery.with(|g| g.window().range_label(g.records().len()))}
            </span>

            <select
                class="page-size"
                disabled=busy
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                        on_page_size_change(size);
                    }
                }
            >
                {size_choices
                    .into_iter()
                    .map(|size| {
                        view! {
                            <option
                                value=size.to_string()
                                selected=move || window().page_size == size
                            >
                                {format!("{}件", size)}
                            </option>
                        }
                    })
                    .collect::<Vec<_>>()}
            </select>
        </div>
    }
}
