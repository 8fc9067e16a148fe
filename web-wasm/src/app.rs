//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use artgrid_common::CatalogConfig;
use crate::components::art_gallery::ArtGallery;

#[component]
pub fn App() -> impl IntoView {
    let config = CatalogConfig::default();

    view! {
        <div class="container">
            <ArtGallery config=config />
        </div>
    }
}
