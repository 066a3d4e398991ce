// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{search,poll,clear,copy,export}.

mod clear;  // src/gui/actions/clear.rs
mod copy;   // src/gui/actions/copy.rs
mod export; // src/gui/actions/export.rs
mod search; // src/gui/actions/search.rs

pub use clear::clear;
pub use copy::copy;
pub use export::export;
pub use search::{poll, search};
