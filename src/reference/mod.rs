// src/reference/mod.rs
//
// Static enumerations backing the two select controls.

mod industries;
mod prefectures;

pub use industries::{INDUSTRIES, Industries, OTHER_INDUSTRY};
pub use prefectures::{PREFECTURES, Prefectures};

use crate::{
    error::SelectError,
    select::{self, Controls},
};

/// A fixed, ordered list of valid values for one select control.
pub trait Catalog: Send + Sync + 'static {
    /// Human label, used in logs.
    fn label(&self) -> &'static str;

    /// The fixed entries, in display order.
    fn entries(&self) -> &'static [&'static str];

    /// Label of the empty-value option prepended to the control, if the
    /// control supports "no selection".
    fn placeholder(&self) -> Option<&'static str> {
        None
    }

    /// Owned copy of the entries; callers may mutate it freely.
    fn list(&self) -> Vec<String> {
        self.entries().iter().map(|e| s!(*e)).collect()
    }

    fn is_valid(&self, name: &str) -> bool {
        self.entries().contains(&name)
    }

    /// Replace the options of control `id` with this catalog and select
    /// `default_value`. The control must already be registered.
    fn initialize_select(
        &self,
        controls: &mut Controls,
        id: &str,
        default_value: &str,
    ) -> Result<(), SelectError> {
        let control = controls.lookup_mut(id)?;
        select::populate(control, self.entries(), self.placeholder(), default_value);
        logd!(
            "Select: {} → #{id} ({} options, default={default_value:?})",
            self.label(),
            control.len()
        );
        Ok(())
    }
}
