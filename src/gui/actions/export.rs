// src/gui/actions/export.rs
use crate::gui::app::App;

pub fn export(app: &mut App) {
    let page = app.current_page();

    if page.rows(app).is_empty() {
        app.status("Nothing to export");
        logd!("Export: Clicked, but there's nothing to export");
        return;
    }

    app.apply_out_path();

    match page.export(app) {
        Ok(path) => {
            logf!("Export: OK page={:?} → {}", page.kind(), path.display());
            app.status(format!("Exported to {}", path.display()));
        }
        Err(e) => {
            loge!("Export: Error: {}", e);
            app.status(format!("Export error: {e}"));
        }
    }
}
