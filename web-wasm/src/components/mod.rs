pub mod header;
pub mod art_gallery;
pub mod data_table;
pub mod form_popover;
pub mod paginator;
pub mod progress_bar;
