// src/gui/pages/details.rs
//
// Business details lookups. Each run appends one row, so several listings
// can be collected and exported together.

use std::{error::Error, path::PathBuf};

use eframe::egui;

use crate::{
    config::options::AppOptions,
    details::{FIELD_LABELS, fetch_details},
    export::details_to_string,
    file::write_details_export,
    gui::app::App,
    progress::Progress,
};

use super::{JobResult, PageKind};

pub struct DetailsPage;
pub static PAGE: DetailsPage = DetailsPage;

impl super::Page for DetailsPage {
    fn title(&self) -> &'static str { "Business Details" }
    fn kind(&self) -> PageKind { PageKind::Details }
    fn action_label(&self) -> &'static str { "Get Details" }
    fn url_hint(&self) -> &'static str { "https://www.google.com/search?q=...&tbm=lcl" }

    fn headers(&self) -> &'static [&'static str] { &FIELD_LABELS }

    fn column_widths(&self) -> &'static [f32] { &[180.0, 260.0, 120.0, 220.0, 200.0] }

    fn rows(&self, app: &App) -> Vec<Vec<String>> {
        app.details
            .iter()
            .map(|d| d.values().iter().map(|v| s!(*v)).collect())
            .collect()
    }

    fn draw_controls(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.horizontal(|ui| {
            ui.checkbox(&mut app.state.options.lookup_email, "Look for email on business website");
            if ui
                .add_enabled(!app.details.is_empty(), egui::Button::new("Clear"))
                .clicked()
            {
                logd!("UI: cleared {} detail rows", app.details.len());
                app.details.clear();
                app.progress.reset("Idle");
            }
        });
    }

    fn run(&self, url: &str, opts: &AppOptions, progress: &mut dyn Progress) -> JobResult {
        JobResult::Details(fetch_details(url, opts, Some(progress)))
    }

    fn copy_text(&self, app: &App) -> Result<String, Box<dyn Error>> {
        details_to_string(&app.details, app.state.options.export.include_headers)
    }

    fn export(&self, app: &App) -> Result<PathBuf, Box<dyn Error>> {
        write_details_export(&app.state.options.export, &app.details)
    }
}
