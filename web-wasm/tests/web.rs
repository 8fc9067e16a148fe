//! ブラウザ側の補助関数テスト

use artgrid_wasm::components::form_popover::parse_target;
use artgrid_wasm::components::header::selection_badge;
use artgrid_wasm::components::paginator::page_links;
use artgrid_wasm::components::progress_bar::progress_ratio;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn test_parse_target() {
    assert_eq!(parse_target("15"), Some(15));
    assert_eq!(parse_target(" 3 "), Some(3));
    assert_eq!(parse_target("0"), None);
    assert_eq!(parse_target("-4"), None);
    assert_eq!(parse_target("1.5"), None);
    assert_eq!(parse_target(""), None);
}

#[wasm_bindgen_test]
fn test_page_links_near_start() {
    assert_eq!(page_links(0, 3, 5), vec![0, 1, 2]);
    assert_eq!(page_links(1, 20, 5), vec![0, 1, 2, 3, 4]);
}

#[wasm_bindgen_test]
fn test_page_links_centered_and_end() {
    assert_eq!(page_links(10, 20, 5), vec![8, 9, 10, 11, 12]);
    assert_eq!(page_links(19, 20, 5), vec![15, 16, 17, 18, 19]);
}

#[wasm_bindgen_test]
fn test_page_links_empty() {
    assert!(page_links(0, 0, 5).is_empty());
}

#[wasm_bindgen_test]
fn test_progress_ratio() {
    assert_eq!(progress_ratio(0, 0), 0.0);
    assert_eq!(progress_ratio(10, 20), 0.5);
    assert_eq!(progress_ratio(20, 15), 1.0);
}

#[wasm_bindgen_test]
fn test_selection_badge() {
    assert_eq!(selection_badge(0, 0), "選択中: 0件");
    assert_eq!(selection_badge(15, 25), "選択中: 15 / 25件");
}
