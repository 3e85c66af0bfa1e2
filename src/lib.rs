// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod extract;

pub mod details;
pub mod diagnostics;
pub mod emails;
pub mod export;
pub mod fetch;
pub mod file;
pub mod progress;
pub mod runner;
pub mod sample;

#[cfg(feature = "cli")]
pub mod cli;
pub mod gui;

pub use extract::{extract_maps_urls, extract_with_report, is_maps_url};
