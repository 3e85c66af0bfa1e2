// src/gui/actions/run.rs
//
// Jobs run on a worker thread so the window keeps repainting. The worker
// reports over two channels (progress events, final result); `poll` drains
// both once per frame.

use std::{
    sync::mpsc::{self, TryRecvError},
    thread,
};

use eframe::egui;

use crate::{
    gui::{
        app::{App, Job},
        pages::JobResult,
    },
    progress::{ChannelProgress, RecordingProgress},
    runner::{self, check_input_url},
    sample::{SAMPLE_LABEL, SAMPLE_PAGE},
};

pub fn run(app: &mut App, ctx: &egui::Context) {
    if app.running {
        return;
    }
    let page = app.current_page();
    let url = s!(app.state.gui.url_text.trim());
    if let Err(e) = check_input_url(&url) {
        app.status(format!("❌ {e}"));
        return;
    }

    let opts = app.state.options.clone();
    let (ev_tx, ev_rx) = mpsc::channel();
    let (res_tx, res_rx) = mpsc::channel();
    let ctx2 = ctx.clone();

    logf!("Run: begin page={:?} url={} mode={:?}", page.kind(), url, opts.fetch.mode);

    let spawned = thread::Builder::new()
        .name(s!("extract-worker"))
        .spawn(move || {
            let mut prog = ChannelProgress::new(ev_tx);
            let res = page.run(&url, &opts, &mut prog);
            let _ = res_tx.send(res);
            ctx2.request_repaint();
        });

    match spawned {
        Ok(_) => {
            app.running = true;
            app.progress.reset("Starting...");
            app.job = Some(Job { kind: page.kind(), events: ev_rx, result: res_rx });
        }
        Err(e) => {
            loge!("Run: couldn't spawn worker: {e}");
            app.status(format!("Error: couldn't start worker ({e})"));
        }
    }
}

/// Built-in sample page. Pure text work, so it runs inline.
pub fn run_sample(app: &mut App) {
    if app.running {
        return;
    }
    let mut rec = RecordingProgress::default();
    let outcome = runner::run_on_text(SAMPLE_PAGE, SAMPLE_LABEL, &app.state.options, Some(&mut rec));
    for ev in rec.events {
        app.progress.apply(ev);
    }
    logf!("Sample: {} URLs", outcome.urls.len());
    apply(app, JobResult::Urls(Ok(outcome)));
}

pub fn poll(app: &mut App) {
    let Some(job) = app.job.as_ref() else { return };

    for ev in job.events.try_iter() {
        app.progress.apply(ev);
    }
    let kind = job.kind;
    let received = job.result.try_recv();

    match received {
        Ok(res) => {
            if let Some(job) = app.job.take() {
                for ev in job.events.try_iter() {
                    app.progress.apply(ev);
                }
            }
            app.running = false;
            logd!("Run: finished page={kind:?}");
            apply(app, res);
        }
        Err(TryRecvError::Empty) => {}
        Err(TryRecvError::Disconnected) => {
            app.job = None;
            app.running = false;
            loge!("Run: worker for {kind:?} exited without a result");
            app.status("Error: worker stopped unexpectedly");
        }
    }
}

fn apply(app: &mut App, res: JobResult) {
    match res {
        JobResult::Urls(Ok(out)) => {
            let n = out.urls.len();
            app.urls = out.urls;
            app.diagnostics = out.diagnostics;
            if n == 0 {
                app.status("No Google Maps URLs found. The page may not contain business listings.");
            } else {
                app.status(format!("✅ Found {n} Google Maps URLs ({} chars via {})", out.page_len, out.source));
            }
        }
        JobResult::Urls(Err(e)) => {
            app.urls.clear();
            app.diagnostics = None;
            app.status(format!("❌ Error: {e}"));
        }
        JobResult::Details(Ok(d)) => {
            if d.is_empty() {
                app.status("No business details found on this page");
            } else {
                let name = d.name.clone().unwrap_or_else(|| s!("(unnamed)"));
                app.details.push(d);
                app.status(format!("✅ Added {name}"));
            }
        }
        JobResult::Details(Err(e)) => app.status(format!("❌ Error: {e}")),
    }
}
