// src/gui/progress.rs
//
// UI-side mirror of a running job: the worker sends ProgressEvents over a
// channel and the app folds them in here once per frame.

use std::collections::VecDeque;

use crate::progress::ProgressEvent;

pub const MAX_LOG: usize = 50;

pub struct GuiProgress {
    /// 0.0..=1.0
    pub fraction: f32,
    pub status: String,
    /// Warnings and notable lines from the current run, oldest first.
    pub log: VecDeque<String>,
}

impl Default for GuiProgress {
    fn default() -> Self {
        Self { fraction: 0.0, status: s!("Idle"), log: VecDeque::new() }
    }
}

impl GuiProgress {
    pub fn reset(&mut self, status: &str) {
        self.fraction = 0.0;
        self.status = s!(status);
        self.log.clear();
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status = msg.into();
    }

    fn push_log(&mut self, line: String) {
        if self.log.len() == MAX_LOG {
            self.log.pop_front();
        }
        self.log.push_back(line);
    }

    pub fn apply(&mut self, ev: ProgressEvent) {
        match ev {
            ProgressEvent::Begin(target) => {
                self.reset("Starting...");
                logd!("UI: job started for {target}");
            }
            ProgressEvent::Step(pct, msg) => {
                self.fraction = f32::from(pct) / 100.0;
                self.status = msg;
            }
            ProgressEvent::Log(msg) => {
                self.push_log(msg.clone());
                self.status = msg;
            }
            ProgressEvent::Warn(msg) => self.push_log(join!("⚠ ", &msg)),
            ProgressEvent::Finish => self.fraction = 1.0,
        }
    }
}
