//! 表示ページと選択集合の突き合わせ

use crate::selection::SelectionSet;
use crate::types::{ArtworkRecord, RecordId};

/// ヘッダーチェックボックスの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderState {
    Unchecked,
    Indeterminate,
    Checked,
}

/// 表示中ページでチェック表示する行のID（表示順）
pub fn checked_ids(records: &[ArtworkRecord], selection: &SelectionSet) -> Vec<RecordId> {
    records
        .iter()
        .map(|r| r.id)
        .filter(|&id| selection.contains(id))
        .collect()
}

/// ヘッダーチェックボックスの表示状態
pub fn header_state(records: &[ArtworkRecord], selection: &SelectionSet) -> HeaderState {
    let checked = records.iter().filter(|r| selection.contains(r.id)).count();
    match checked {
        0 => HeaderState::Unchecked,
        n if n == records.len() => HeaderState::Checked,
        _ => HeaderState::Indeterminate,
    }
}

/// ヘッダークリック後にページ上でチェックされる行のID
///
/// 全行チェック済みならページを全解除、それ以外はページを全選択。
pub fn header_click_ids(records: &[ArtworkRecord], selection: &SelectionSet) -> Vec<RecordId> {
    match header_state(records, selection) {
        HeaderState::Checked => Vec::new(),
        _ => records.iter().map(|r| r.id).collect(),
    }
}

/// 1行トグル後にページ上でチェックされる行のID
pub fn row_toggle_ids(
    records: &[ArtworkRecord],
    selection: &SelectionSet,
    id: RecordId,
) -> Vec<RecordId> {
    let mut ids = checked_ids(records, selection);
    if let Some(pos) = ids.iter().position(|&c| c == id) {
        ids.remove(pos);
    } else if records.iter().any(|r| r.id == id) {
        ids.push(id);
    }
    ids
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(ids: &[RecordId]) -> Vec<ArtworkRecord> {
        ids.iter()
            .map(|&id| ArtworkRecord { id, ..Default::default() })
            .collect()
    }

    #[test]
    fn test_checked_ids_intersection() {
        let page = records(&[11, 12, 13, 14]);
        let selection: SelectionSet = [1, 12, 14, 99].into_iter().collect();
        assert_eq!(checked_ids(&page, &selection), vec![12, 14]);
    }

    #[test]
    fn test_header_state() {
        let page = records(&[1, 2, 3]);
        assert_eq!(header_state(&page, &SelectionSet::new()), HeaderState::Unchecked);
        assert_eq!(header_state(&page, &[2].into_iter().collect()), HeaderState::Indeterminate);
        assert_eq!(header_state(&page, &[1, 2, 3, 7].into_iter().collect()), HeaderState::Checked);
    }

    #[test]
    fn test_header_state_empty_page() {
        let selection: SelectionSet = [1].into_iter().collect();
        assert_eq!(header_state(&[], &selection), HeaderState::Unchecked);
    }

    #[test]
    fn test_header_click_ids() {
        let page = records(&[1, 2, 3]);
        let partial: SelectionSet = [2].into_iter().collect();
        let full: SelectionSet = [1, 2, 3].into_iter().collect();
        assert_eq!(header_click_ids(&page, &partial), vec![1, 2, 3]);
        assert!(header_click_ids(&page, &full).is_empty());
    }

    #[test]
    fn test_row_toggle_ids() {
        let page = records(&[1, 2, 3]);
        let selection: SelectionSet = [1, 3].into_iter().collect();
        assert_eq!(row_toggle_ids(&page, &selection, 3), vec![1]);
        assert_eq!(row_toggle_ids(&page, &selection, 2), vec![1, 3, 2]);
        // 表示中ページにないIDは無視
        assert_eq!(row_toggle_ids(&page, &selection, 42), vec![1, 3]);
    }
}
