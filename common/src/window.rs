//! 表示中ページの位置情報

/// 表示ウィンドウ（ページ番号・ページサイズ・総件数）
///
/// `page_index` は0始まり。APIへ渡すページ番号は `api_page()` で得る。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub page_index: usize,
    pub page_size: usize,
    pub total_records: usize,
}

impl PageWindow {
    /// 先頭ページのウィンドウを作成（総件数は未取得のため0）
    pub fn new(page_size: usize) -> Self {
        Self {
            page_index: 0,
            page_size: page_size.max(1),
            total_records: 0,
        }
    }

    /// APIに渡すページ番号（1始まり）
    pub fn api_page(&self) -> usize {
        self.page_index + 1
    }

    /// 表示先頭レコードの通し番号（0始まり）
    pub fn first(&self) -> usize {
        self.page_index * self.page_size
    }

    /// 総ページ数
    pub fn page_count(&self) -> usize {
        self.total_records.div_ceil(self.page_size)
    }

    pub fn has_prev(&self) -> bool {
        self.page_index > 0
    }

    pub fn has_next(&self) -> bool {
        self.page_index + 1 < self.page_count()
    }

    /// 指定ページへ移動したウィンドウ
    pub fn with_page(self, page_index: usize) -> Self {
        Self { page_index, ..self }
    }

    /// ページサイズ変更後のウィンドウ
    ///
    /// 表示先頭レコードが引き続き見えるページに移る。
    pub fn with_page_size(self, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            page_index: self.first() / page_size,
            page_size,
            ..self
        }
    }

    /// 上流が返した総件数を反映（後勝ち）
    pub fn with_total(self, total_records: usize) -> Self {
        Self { total_records, ..self }
    }

    /// 表示範囲の説明（例: "11-20 / 25"）
    pub fn range_label(&self, shown: usize) -> String {
        if shown == 0 {
            return format!("0 / {}", self.total_records);
        }
        format!("{}-{} / {}", self.first() + 1, self.first() + shown, self.total_records)
    }
}
