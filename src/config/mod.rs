// src/config/mod.rs
pub mod consts;
pub mod endpoint;
