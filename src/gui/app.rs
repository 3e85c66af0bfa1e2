// src/gui/app.rs
use std::{error::Error, sync::mpsc::Receiver, time::Duration};

use eframe::egui;

use crate::{
    config::{self, state::AppState},
    details::BusinessDetails,
    diagnostics::Diagnostics,
    progress::ProgressEvent,
};

use super::{
    actions,
    components,
    pages::{JobResult, Page, PageKind},
    progress::GuiProgress,
    router,
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    let opts = config::file::load_or_default();
    eframe::run_native(
        "Google Maps URL Extractor",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::with_options(opts))))),
    )?;
    Ok(())
}

/// A job running on a worker thread.
pub struct Job {
    pub kind: PageKind,
    pub events: Receiver<ProgressEvent>,
    pub result: Receiver<JobResult>,
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // results
    pub urls: Vec<String>,
    pub details: Vec<BusinessDetails>,
    pub diagnostics: Option<Diagnostics>,

    // status/progress (fed from the worker's channel)
    pub progress: GuiProgress,
    pub running: bool,
    pub job: Option<Job>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let out_path_text = state.options.export.out_path().to_string_lossy().into();
        logf!(
            "Init: mode={:?}, export={}",
            state.options.fetch.mode,
            state.options.export.out_path().display()
        );

        Self {
            state,
            out_path_text,
            out_path_dirty: false,
            urls: Vec::new(),
            details: Vec::new(),
            diagnostics: None,
            progress: GuiProgress::default(),
            running: false,
            job: None,
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.gui.current_page_index = idx; }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page { router::page_at(self.current_index()) }

    #[inline]
    pub fn current_page_kind(&self) -> PageKind { self.current_page().kind() }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.progress.set_status(msg);
    }

    /// Push the output text field into ExportOptions if the user edited it.
    pub fn apply_out_path(&mut self) {
        if self.out_path_dirty {
            self.state.options.export.set_path(&self.out_path_text);
            self.out_path_text = self.state.options.export.out_path().to_string_lossy().into_owned();
            self.out_path_dirty = false;
            logf!("Export: out path set → {}", self.out_path_text);
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        actions::poll(self);
        if self.running {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            components::status_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::tabs::draw(ui, self);

            ui.separator();

            components::url_bar::draw(ui, self);

            ui.separator();

            components::export_bar::draw(ui, self);

            ui.separator();

            components::diagnostics::draw(ui, self);

            components::data_table::draw(ui, self);
        });
    }
}
