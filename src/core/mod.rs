// src/core/mod.rs

pub mod sanitize;
pub mod url;
