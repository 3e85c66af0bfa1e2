// src/gui/components/export_bar.rs

use eframe::egui;
use crate::{
    config::options::ExportFormat,
    gui::{actions, app::App, pages::PageKind},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let is_urls = app.current_page_kind() == PageKind::MapsUrls;

    {
        let export = &mut app.state.options.export;

        // --- Format + Include headers ---
        ui.horizontal(|ui| {
            let prev_fmt = export.format;
            ui.label("Format:");
            if is_urls {
                ui.selectable_value(&mut export.format, ExportFormat::Csv, "CSV");
                ui.selectable_value(&mut export.format, ExportFormat::Txt, "TXT");
            } else {
                ui.label("CSV");
            }

            if export.format != prev_fmt {
                logf!("UI: Export format → {:?}", export.format);
                if !app.out_path_dirty {
                    app.out_path_text = export.out_path().to_string_lossy().into_owned();
                }
            }

            let before_headers = export.include_headers;
            ui.add_enabled(
                !is_urls || export.format == ExportFormat::Csv,
                egui::Checkbox::new(&mut export.include_headers, "Include headers"),
            );
            if export.include_headers != before_headers {
                logf!("UI: Include_headers → {}", export.include_headers);
            }
        });
    }

    // --- Output field + actions ---
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text)
                .font(egui::TextStyle::Monospace))
            .changed()
        {
            app.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
        }

        if ui.button("Copy").clicked() {
            actions::copy(app, ui.ctx());
        }
        if ui.button("Export").clicked() {
            actions::export(app);
        }
    });
}
