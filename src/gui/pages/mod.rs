// src/gui/pages/mod.rs
use std::{error::Error, path::PathBuf};

use eframe::egui;

use crate::{
    config::options::AppOptions,
    details::BusinessDetails,
    fetch::FetchError,
    gui::app::App,
    progress::Progress,
    runner::RunOutcome,
};

pub mod details;
pub mod maps_urls;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKind {
    MapsUrls,
    Details,
}

/// What a worker thread hands back to the UI.
#[derive(Debug)]
pub enum JobResult {
    Urls(Result<RunOutcome, FetchError>),
    Details(Result<BusinessDetails, FetchError>),
}

pub trait Page: Send + Sync + 'static {
    fn title(&self) -> &'static str;
    fn kind(&self) -> PageKind;

    /// Label on the run button.
    fn action_label(&self) -> &'static str;
    fn url_hint(&self) -> &'static str;

    fn headers(&self) -> &'static [&'static str];

    /// Default column widths (px-ish); the last column takes the remainder.
    fn column_widths(&self) -> &'static [f32] {
        &[]
    }

    /// Table rows for display, in `headers()` order.
    fn rows(&self, app: &App) -> Vec<Vec<String>>;

    /// Extra controls under the URL bar.
    fn draw_controls(&self, _ui: &mut egui::Ui, _app: &mut App) {}

    /// Runs on the worker thread.
    fn run(&self, url: &str, opts: &AppOptions, progress: &mut dyn Progress) -> JobResult;

    fn copy_text(&self, app: &App) -> Result<String, Box<dyn Error>>;
    fn export(&self, app: &App) -> Result<PathBuf, Box<dyn Error>>;
}
