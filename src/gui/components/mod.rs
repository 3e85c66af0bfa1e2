// src/gui/components/mod.rs
pub mod data_table;
pub mod diagnostics;
pub mod export_bar;
pub mod status_bar;
pub mod tabs;
pub mod url_bar;
