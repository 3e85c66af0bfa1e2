// src/gui/components/url_bar.rs
//
// URL field, fetch mode and the run button, then any page-specific controls.

use eframe::egui;
use crate::{
    config::options::FetchMode,
    gui::{actions, app::App},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let page = app.current_page();

    ui.horizontal(|ui| {
        ui.label("URL:");
        let edit = egui::TextEdit::singleline(&mut app.state.gui.url_text)
            .hint_text(page.url_hint())
            .desired_width(520.0);
        let resp = ui.add_enabled(!app.running, edit);
        let enter = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        let mode = &mut app.state.options.fetch.mode;
        let before = *mode;
        egui::ComboBox::from_id_salt("fetch_mode")
            .selected_text(mode.label())
            .show_ui(ui, |ui| {
                for m in FetchMode::ALL {
                    ui.selectable_value(mode, m, m.label());
                }
            });
        if *mode != before {
            logf!("UI: Fetch mode → {:?}", mode);
        }

        let can_run = !app.running && !app.state.gui.url_text.trim().is_empty();
        let red = egui::Color32::from_rgb(220, 30, 30);
        let clicked = ui
            .add_enabled(
                can_run,
                egui::Button::new(egui::RichText::new(page.action_label()).color(egui::Color32::BLACK).strong())
                    .fill(red),
            )
            .clicked();

        if clicked || (enter && can_run) {
            actions::run(app, ui.ctx());
        }
    });

    page.draw_controls(ui, app);
}
