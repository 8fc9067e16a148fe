//! 作品一覧テーブル
//!
//! チェック表示は毎回「表示中ページ ∩ 選択集合」から求める。
//! チェック操作はページ上のチェック済みID一覧として親へ通知する。

use leptos::prelude::*;
use artgrid_common::reconcile::{header_click_ids, row_toggle_ids};
use artgrid_common::{ArtworkRecord, GalleryView, HeaderState, RecordId};
use crate::components::form_popover::FormPopover;

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

#[component]
pub fn DataTable<FT, FB>(
    gallery: ReadSignal<GalleryView>,
    on_selection_toggle: FT,
    on_bulk_select_submit: FB,
) -> impl IntoView
where
    FT: Fn(Vec<RecordId>) + 'static + Clone + Send + Sync,
    FB: Fn(usize) + 'static + Clone + Send + Sync,
{
    let (popover_open, set_popover_open) = signal(false);
    let busy = move || gallery.with(|g| g.is_busy());
    let header = move || gallery.with(|g| g.header_state());

    let on_bulk_submit = move |target: usize| {
        set_popover_open.set(false);
        on_bulk_select_submit(target);
    };

    view! {
        <div class="table-wrapper" class:loading=busy>
            <table class="data-table">
                <thead>
                    <tr>
                        <th class="col-select">
                            <input
                                type="checkbox"
                                prop:checked=move || header() == HeaderState::Checked
                                prop:indeterminate=move || header() == HeaderState::Indeterminate
                                disabled=busy
                                on:change={
                                    let on_selection_toggle = on_selection_toggle.clone();
                                    move |_| {
                                        let ids = gallery.with(|g| header_click_ids(g.records(), g.selection()));
                                        on_selection_toggle(ids);
                                    }
                                }
                            />
                        </th>
                        <th class="col-popover">
                            <button
                                class="popover-toggle"
                                title="行数を指定して選択"
                                disabled=busy
                                on:click=move |_| set_popover_open.update(|open| *open = !*open)
                            >
                                "▾"
                            </button>
                            <div class="popover" class:open=move || popover_open.get()>
                                <FormPopover on_submit=on_bulk_submit />
                            </div>
                        </th>
                        <th>"タイトル"</th>
                        <th>"制作地"</th>
                        <th>"作者"</th>
                        <th>"銘文"</th>
                        <th>"制作年"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || gallery.with(|g| g.records().to_vec())
                        key=|record| record.id
                        children=move |record| {
                            let on_selection_toggle = on_selection_toggle.clone();
                            view! {
                                <DataRow
                                    record=record
                                    gallery=gallery
                                    on_selection_toggle=on_selection_toggle
                                />
                            }
                        }
                    />
                </tbody>
            </table>
            <Show when=busy>
                <div class="loading-overlay">"読み込み中..."</div>
            </Show>
        </div>
    }
}

#[component]
fn DataRow<FT>(
    record: ArtworkRecord,
    gallery: ReadSignal<GalleryView>,
    on_selection_toggle: FT,
) -> impl IntoView
where
    FT: Fn(Vec<RecordId>) + 'static + Clone + Send + Sync,
{
    let id = record.id;
    let is_checked = move || gallery.with(|g| g.is_checked(id));

    view! {
        <tr class:selected=is_checked>
            <td class="col-select">
                <input
                    type="checkbox"
                    prop:checked=is_checked
                    disabled=move || gallery.with(|g| g.is_busy())
                    on:change=move |_| {
                        let ids = gallery.with(|g| row_toggle_ids(g.records(), g.selection(), id));
                        on_selection_toggle(ids);
                    }
                />
            </td>
            <td class="col-popover"></td>
            <td>{record.title_or_empty().to_string()}</td>
            <td>{text(&record.place_of_origin)}</td>
            <td class="artist">{text(&record.artist_display)}</td>
            <td>{text(&record.inscriptions)}</td>
            <td class="year">{record.year_span()}</td>
        </tr>
    }
}
