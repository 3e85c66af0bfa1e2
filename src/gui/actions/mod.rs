// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{run, copy, export, ...}.

mod copy;    // src/gui/actions/copy.rs
mod export;  // src/gui/actions/export.rs
mod run;     // src/gui/actions/run.rs

pub use copy::copy;
pub use export::export;
pub use run::{poll, run, run_sample};
