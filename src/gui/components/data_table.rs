// src/gui/components/data_table.rs
//
// Draws the live table for the current page. Purely a view.

use eframe::egui;
use egui_extras::{Column, TableBuilder};
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let page = app.current_page();
    let headers = page.headers();
    let widths = page.column_widths();
    let rows = page.rows(app);

    if rows.is_empty() {
        ui.weak("No results yet.");
        return;
    }

    // Ensure scroll bars allocate space (not floating over content)
    ui.style_mut().spacing.scroll.floating = false;

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .min_scrolled_height(0.0)
        .id_salt(("table_state", page.kind()));

    for ci in 0..headers.len() {
        let col = if ci + 1 == headers.len() {
            Column::remainder().at_least(60.0)
        } else {
            let w = widths.get(ci).copied().unwrap_or(120.0);
            Column::initial(w).at_least(30.0).clip(true)
        };
        table = table.column(col);
    }

    table
        .header(20.0, |mut header| {
            for h in headers {
                header.col(|ui| { ui.strong(*h); });
            }
        })
        .body(|body| {
            body.rows(18.0, rows.len(), |mut row| {
                let row_idx = row.index();
                if let Some(data) = rows.get(row_idx) {
                    for cell in data {
                        row.col(|ui| {
                            ui.add(egui::Label::new(cell.as_str()).truncate())
                                .on_hover_text(cell.as_str());
                        });
                    }
                }
            });
        });
}
