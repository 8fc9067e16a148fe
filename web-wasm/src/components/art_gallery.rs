//! 作品一覧ビュー（選択状態の所有者）
//!
//! `GalleryView` をシグナルで保持し、子コンポーネントへ読み取り専用で渡す。
//! 取得は `spawn_local` で1本ずつ実行し、ビジー中の操作は `GalleryView` 側で無視される。

use leptos::prelude::*;
use leptos::task::spawn_local;
use gloo::console;
use artgrid_common::{
    accumulate_first_n, CatalogConfig, CatalogSource, GalleryView, PageRequest, RecordId,
};
use crate::api::catalog::WebCatalog;
use crate::components::{
    data_table::DataTable,
    header::Header,
    paginator::Paginator,
    progress_bar::ProgressBar,
};

#[component]
pub fn ArtGallery(config: CatalogConfig) -> impl IntoView {
    let gallery = RwSignal::new(GalleryView::new(config.page_size));
    let (progress, set_progress) = signal(None::<(usize, usize)>);
    let base_url = StoredValue::new(config.base_url.clone());
    let size_choices = config.size_choices();

    // ページ取得（失敗時はログのみ、表示は前のまま）
    let load = move |request: Option<PageRequest>| {
        let Some(request) = request else {
            return;
        };
        let catalog = WebCatalog::new(base_url.get_value());
        spawn_local(async move {
            let result = catalog.fetch_page(request.api_page(), request.limit()).await;
            gallery.update(|g| {
                if let Err(e) = g.complete_page(request, result) {
                    console::error!(format!("Error fetching data: {}", e));
                }
            });
        });
    };

    let on_page_change = move |page_index: usize| {
        load(gallery.try_update(|g| g.request_page(page_index)).flatten());
    };

    let on_page_size_change = move |page_size: usize| {
        load(gallery.try_update(|g| g.request_page_size(page_size)).flatten());
    };

    let on_selection_toggle = move |checked: Vec<RecordId>| {
        gallery.update(|g| {
            g.apply_page_selection(&checked);
        });
    };

    let on_bulk_select_submit = move |target: usize| {
        let Some(request) = gallery.try_update(|g| g.request_bulk_select(target)).flatten() else {
            return;
        };
        let catalog = WebCatalog::new(base_url.get_value());
        set_progress.set(Some((0, request.target)));

        spawn_local(async move {
            let accumulation = accumulate_first_n(&catalog, &request, |done, target| {
                set_progress.set(Some((done, target)));
            })
            .await;

            if let Some(e) = &accumulation.failure {
                console::error!(format!("Error fetching data: {}", e));
            }
            gallery.update(|g| g.complete_bulk_select(&accumulation));
            set_progress.set(None);
            console::log!(format!(
                "{} rows selected ({} pages)",
                accumulation.ids.len(),
                accumulation.pages_fetched
            ));
        });
    };

    // マウント時に先頭ページを取得
    load(gallery.try_update(|g| g.request_reload()).flatten());

    view! {
        <div class="art-gallery">
            <Header
                selected=Signal::derive(move || gallery.with(|g| g.selection().len()))
                total=Signal::derive(move || gallery.with(|g| g.window().total_records))
            />

            <DataTable
                gallery=gallery.read_only()
                on_selection_toggle=on_selection_toggle
                on_bulk_select_submit=on_bulk_select_submit
            />

            <Paginator
                gallery=gallery.read_only()
                size_choices=size_choices
                on_page_change=on_page_change
                on_page_size_change=on_page_size_change
            />

            <Show when=move || progress.get().is_some()>
                <ProgressBar progress=progress />
            </Show>
        </div>
    }
}
