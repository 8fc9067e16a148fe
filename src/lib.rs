//! artgrid: 美術作品カタログのページ横断選択（ネイティブ版）
//!
//! 選択ロジックは artgrid_common にあり、ここではreqwestクライアントと
//! 端末向けの入出力を提供する。

pub mod browse;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod render;
pub mod select;
