// src/progress.rs
use std::sync::mpsc::Sender;

/// Lightweight progress reporting for the fetch/extract run.
/// Frontends (GUI/CLI) implement this to surface status to users; the
/// extraction functions themselves never see it.
pub trait Progress {
    /// Called once at the start with the URL (or label) being processed.
    fn begin(&mut self, _target: &str) {}

    /// A stage was reached. `percent` is 0..=100.
    fn step(&mut self, _percent: u8, _msg: &str) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Something went wrong but the run continues (e.g. fallback to HTTP).
    fn warn(&mut self, _msg: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Reborrow an optional sink for a nested call without giving it up.
pub fn reborrow<'a>(progress: &'a mut Option<&mut dyn Progress>) -> Option<&'a mut dyn Progress> {
    match progress {
        Some(p) => Some(&mut **p as &mut dyn Progress),
        None => None,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProgressEvent {
    Begin(String),
    Step(u8, String),
    Log(String),
    Warn(String),
    Finish,
}

/// Forwards every call over a channel, so a worker thread can report to
/// whoever owns the receiver. A dropped receiver is ignored.
pub struct ChannelProgress {
    tx: Sender<ProgressEvent>,
}

impl ChannelProgress {
    pub fn new(tx: Sender<ProgressEvent>) -> Self {
        Self { tx }
    }

    fn send(&self, ev: ProgressEvent) {
        let _ = self.tx.send(ev);
    }
}

impl Progress for ChannelProgress {
    fn begin(&mut self, target: &str) { self.send(ProgressEvent::Begin(s!(target))); }
    fn step(&mut self, percent: u8, msg: &str) { self.send(ProgressEvent::Step(percent.min(100), s!(msg))); }
    fn log(&mut self, msg: &str) { self.send(ProgressEvent::Log(s!(msg))); }
    fn warn(&mut self, msg: &str) { self.send(ProgressEvent::Warn(s!(msg))); }
    fn finish(&mut self) { self.send(ProgressEvent::Finish); }
}

/// Collects events in memory. Handy for tests and for replaying a run.
#[derive(Default)]
pub struct RecordingProgress {
    pub events: Vec<ProgressEvent>,
}

impl Progress for RecordingProgress {
    fn begin(&mut self, target: &str) { self.events.push(ProgressEvent::Begin(s!(target))); }
    fn step(&mut self, percent: u8, msg: &str) { self.events.push(ProgressEvent::Step(percent.min(100), s!(msg))); }
    fn log(&mut self, msg: &str) { self.events.push(ProgressEvent::Log(s!(msg))); }
    fn warn(&mut self, msg: &str) { self.events.push(ProgressEvent::Warn(s!(msg))); }
    fn finish(&mut self) { self.events.push(ProgressEvent::Finish); }
}
