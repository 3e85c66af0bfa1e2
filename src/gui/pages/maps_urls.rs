// src/gui/pages/maps_urls.rs
use std::{error::Error, path::PathBuf};

use eframe::egui;

use crate::{
    config::{
        consts::{STATUS_HEADER, STATUS_VALID, URL_HEADER},
        options::AppOptions,
    },
    export::to_export_string,
    file::write_export,
    gui::{actions, app::App},
    progress::Progress,
    runner,
};

use super::{JobResult, PageKind};

pub struct MapsUrlsPage;
pub static PAGE: MapsUrlsPage = MapsUrlsPage;

const HEADERS: [&str; 3] = ["#", URL_HEADER, STATUS_HEADER];

impl super::Page for MapsUrlsPage {
    fn title(&self) -> &'static str { "Maps URLs" }
    fn kind(&self) -> PageKind { PageKind::MapsUrls }
    fn action_label(&self) -> &'static str { "Extract URLs" }
    fn url_hint(&self) -> &'static str { "https://example.com/business-directory" }

    fn headers(&self) -> &'static [&'static str] { &HEADERS }

    fn column_widths(&self) -> &'static [f32] { &[36.0, 640.0, 60.0] }

    fn rows(&self, app: &App) -> Vec<Vec<String>> {
        app.urls
            .iter()
            .enumerate()
            .map(|(i, u)| vec![(i + 1).to_string(), u.clone(), s!(STATUS_VALID)])
            .collect()
    }

    fn draw_controls(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.horizontal(|ui| {
            ui.checkbox(&mut app.state.options.debug, "Debug mode (show page analysis)");
            if ui
                .add_enabled(!app.running, egui::Button::new("Test with sample data"))
                .clicked()
            {
                actions::run_sample(app);
            }
        });
    }

    fn run(&self, url: &str, opts: &AppOptions, progress: &mut dyn Progress) -> JobResult {
        JobResult::Urls(runner::run(url, opts, Some(progress)))
    }

    fn copy_text(&self, app: &App) -> Result<String, Box<dyn Error>> {
        to_export_string(&app.urls, &app.state.options.export)
    }

    fn export(&self, app: &App) -> Result<PathBuf, Box<dyn Error>> {
        write_export(&app.state.options.export, &app.urls)
    }
}
