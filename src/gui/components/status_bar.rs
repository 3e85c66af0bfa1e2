// src/gui/components/status_bar.rs

use eframe::egui;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let p = &app.progress;

    if app.running || p.fraction > 0.0 {
        ui.add(egui::ProgressBar::new(p.fraction).show_percentage().animate(app.running));
    }
    ui.label(format!("Status: {}", p.status));

    if !p.log.is_empty() {
        egui::CollapsingHeader::new(format!("Messages ({})", p.log.len()))
            .id_salt("status_log")
            .show(ui, |ui| {
                for line in &p.log {
                    ui.label(line);
                }
            });
    }
}
