//! テスト用のカタログレスポンス生成

#![allow(dead_code)]

use mockito::{Matcher, Mock, ServerGuard};
use serde_json::json;

/// ID 1..=total のカタログの `page` ページ目（1始まり）
pub fn page_body(total: u64, page: u64, limit: u64) -> String {
    let start = (page - 1) * limit + 1;
    let end = (start + limit - 1).min(total);
    let data: Vec<_> = (start..=end)
        .map(|id| {
            json!({
                "id": id,
                "title": format!("Artwork {}", id),
                "place_of_origin": "France",
                "artist_display": format!("Artist {}\nFrench, 1840-1926", id),
                "inscriptions": null,
                "date_start": 1800 + id,
                "date_end": 1801 + id
            })
        })
        .collect();

    json!({
        "pagination": {
            "total": total,
            "limit": limit,
            "offset": start - 1,
            "total_pages": total.div_ceil(limit),
            "current_page": page
        },
        "data": data
    })
    .to_string()
}

fn page_query(page: u64, limit: u64) -> Matcher {
    Matcher::AllOf(vec![
        Matcher::UrlEncoded("page".into(), page.to_string()),
        Matcher::UrlEncoded("limit".into(), limit.to_string()),
    ])
}

/// 指定ページを返すモック（未登録。`create_async` で登録する）
pub fn page_mock(server: &mut ServerGuard, total: u64, page: u64, limit: u64) -> Mock {
    server
        .mock("GET", "/artworks")
        .match_query(page_query(page, limit))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(page_body(total, page, limit))
}

/// 指定ページで失敗するモック（未登録）
pub fn failure_mock(server: &mut ServerGuard, page: u64, limit: u64, status: usize) -> Mock {
    server
        .mock("GET", "/artworks")
        .match_query(page_query(page, limit))
        .with_status(status)
        .with_body("Internal Server Error")
}

pub fn base_url(server: &ServerGuard) -> String {
    format!("{}/artworks", server.url())
}
