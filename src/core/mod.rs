// src/core/mod.rs

pub mod format;
pub mod html;
pub mod net;
