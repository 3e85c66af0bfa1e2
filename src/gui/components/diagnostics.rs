// src/gui/components/diagnostics.rs
//
// Page analysis from the last URL run. Only there in debug mode or when
// nothing was found.

use eframe::egui;
use crate::gui::{app::App, pages::PageKind};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    if app.current_page_kind() != PageKind::MapsUrls {
        return;
    }
    let Some(diag) = &app.diagnostics else { return };

    egui::CollapsingHeader::new("Page analysis")
        .default_open(app.urls.is_empty())
        .show(ui, |ui| {
            egui::Grid::new("diag_counts").striped(true).show(ui, |ui| {
                ui.label("Content size");
                ui.label(format!("{} chars", diag.content_len));
                ui.end_row();
                ui.label("Raw matches");
                ui.label(diag.raw_hits.to_string());
                ui.end_row();
                for (k, n) in &diag.keyword_counts {
                    ui.label(format!("'{k}'"));
                    ui.label(n.to_string());
                    ui.end_row();
                }
                for (name, n) in diag.pattern_hits.iter().filter(|(_, n)| *n > 0) {
                    ui.label(format!("pattern {name}"));
                    ui.label(n.to_string());
                    ui.end_row();
                }
            });

            if !diag.first_raw.is_empty() {
                ui.label("First candidates:");
                for raw in &diag.first_raw {
                    ui.monospace(raw);
                }
            }
            if !diag.early_urls.is_empty() {
                ui.label("URLs near the top of the page:");
                for u in &diag.early_urls {
                    ui.monospace(u);
                }
            }

            egui::CollapsingHeader::new("Content sample").show(ui, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("diag_sample")
                    .max_height(160.0)
                    .show(ui, |ui| {
                        ui.add(egui::Label::new(egui::RichText::new(&diag.sample).monospace()).wrap());
                    });
            });
        });
    ui.separator();
}
