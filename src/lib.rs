// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod controller;
pub mod core;
pub mod error;
pub mod file;
pub mod gui;
pub mod model;
pub mod reference;
pub mod render;
pub mod select;

#[doc(hidden)]
pub use ::log as __log;
