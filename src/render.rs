//! 端末向けの表出力

use artgrid_common::{Accumulation, ArtworkRecord, GalleryView, HeaderState, PageWindow, SelectionSet};

const TITLE_WIDTH: usize = 36;
const ORIGIN_WIDTH: usize = 14;
const ARTIST_WIDTH: usize = 28;
const INSCRIPTION_WIDTH: usize = 20;
const YEAR_WIDTH: usize = 11;

/// 文字数で切り詰める（超過時は末尾を…にする）
pub fn truncate(text: &str, width: usize) -> String {
    let first_line = text.lines().next().unwrap_or("");
    if first_line.chars().count() <= width {
        return first_line.to_string();
    }
    let mut out: String = first_line.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn cell(value: Option<&str>, width: usize) -> String {
    let text = match value.map(str::trim) {
        Some(v) if !v.is_empty() => truncate(v, width),
        _ => "-".to_string(),
    };
    format!("{:<width$}", text, width = width)
}

fn header_mark(state: HeaderState) -> &'static str {
    match state {
        HeaderState::Checked => "[x]",
        HeaderState::Indeterminate => "[-]",
        HeaderState::Unchecked => "[ ]",
    }
}

/// 1行分
pub fn render_row(record: &ArtworkRecord, checked: bool) -> String {
    format!(
        "{} {:>8}  {}  {}  {}  {}  {}",
        if checked { "[x]" } else { "[ ]" },
        record.id,
        cell(Some(record.title_or_empty()), TITLE_WIDTH),
        cell(record.place_of_origin.as_deref(), ORIGIN_WIDTH),
        cell(record.artist_display.as_deref(), ARTIST_WIDTH),
        cell(record.inscriptions.as_deref(), INSCRIPTION_WIDTH),
        cell(Some(&record.year_span()), YEAR_WIDTH),
    )
}

/// ページ全体（ヘッダー・行・フッター）
pub fn render_table(records: &[ArtworkRecord], selection: &SelectionSet, window: PageWindow) -> String {
    let mut lines = Vec::with_capacity(records.len() + 3);
    lines.push(format!(
        "{} {:>8}  {:<tw$}  {:<ow$}  {:<aw$}  {:<iw$}  {:<yw$}",
        header_mark(artgrid_common::header_state(records, selection)),
        "ID",
        "タイトル",
        "制作地",
        "作者",
        "銘文",
        "制作年",
        tw = TITLE_WIDTH,
        ow = ORIGIN_WIDTH,
        aw = ARTIST_WIDTH,
        iw = INSCRIPTION_WIDTH,
        yw = YEAR_WIDTH,
    ));

    for record in records {
        lines.push(render_row(record, selection.contains(record.id)));
    }

    lines.push(format!(
        "ページ {}/{}  ({})  選択中: {}件",
        window.api_page(),
        window.page_count().max(1),
        window.range_label(records.len()),
        selection.len()
    ));
    lines.join("\n")
}

pub fn render_view(view: &GalleryView) -> String {
    render_table(view.records(), view.selection(), view.window())
}

/// 一括選択の結果概要
pub fn render_summary(accumulation: &Accumulation) -> String {
    let mut line = format!(
        "{}件を選択（{}ページ取得）",
        accumulation.ids.len(),
        accumulation.pages_fetched
    );
    if accumulation.is_partial() {
        line.push_str(&format!(" ※目標{}件に届かず", accumulation.target));
    }
    line
}
