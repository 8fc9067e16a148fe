//! セッション全体の選択状態

use crate::types::RecordId;
use std::collections::BTreeSet;

/// 選択中レコードIDの集合
///
/// ページングとは独立しており、ページを移動しても内容は変わらない。
/// 変更されるのは行のトグル・ページ単位の選択・一括選択の確定のみ。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: BTreeSet<RecordId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.ids.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// ID昇順のイテレータ
    pub fn iter(&self) -> impl Iterator<Item = RecordId> + '_ {
        self.ids.iter().copied()
    }

    pub fn insert(&mut self, id: RecordId) -> bool {
        self.ids.insert(id)
    }

    /// 1件トグル。トグル後に選択状態なら `true`
    pub fn toggle(&mut self, id: RecordId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    /// 一括選択の確定: 集合全体を置き換える
    pub fn replace_with(&mut self, ids: impl IntoIterator<Item = RecordId>) {
        self.ids = ids.into_iter().collect();
    }

    /// 表示中ページのチェック状態を反映
    ///
    /// `page_ids` に含まれるIDのうち `checked` にあるものを追加し、ないものを外す。
    /// 他ページのIDには触れない。`page_ids` にないIDは無視する。
    pub fn set_page_members(&mut self, page_ids: &[RecordId], checked: &[RecordId]) {
        for &id in page_ids {
            if checked.contains(&id) {
                self.ids.insert(id);
            } else {
                self.ids.remove(&id);
            }
        }
    }
}

impl FromIterator<RecordId> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = RecordId>>(iter: I) -> Self {
        Self { ids: iter.into_iter().collect() }
    }
}
