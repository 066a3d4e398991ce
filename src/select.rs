// src/select.rs
//
// Select controls as plain data. The GUI draws them as combo boxes; the
// controller reads their current value when a search starts.

use std::collections::BTreeMap;

use crate::error::SelectError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: &str, label: &str) -> Self {
        Self { value: s!(value), label: s!(label) }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectControl {
    options: Vec<SelectOption>,
    selected: Option<usize>,
}

impl SelectControl {
    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    /// Value of the selected option; empty when nothing is selected.
    pub fn value(&self) -> &str {
        self.selected
            .and_then(|i| self.options.get(i))
            .map(|o| o.value.as_str())
            .unwrap_or("")
    }

    /// Label of the selected option; empty when nothing is selected.
    pub fn selected_label(&self) -> &str {
        self.selected
            .and_then(|i| self.options.get(i))
            .map(|o| o.label.as_str())
            .unwrap_or("")
    }

    /// Select the first option whose value matches. Clears the selection
    /// when none does. Returns whether a match was found.
    pub fn set_value(&mut self, value: &str) -> bool {
        self.selected = self.options.iter().position(|o| o.value == value);
        self.selected.is_some()
    }

    pub fn select_index(&mut self, index: usize) {
        if index < self.options.len() {
            self.selected = Some(index);
        }
    }

    /// Replace all options. `selected` falls back to the first option, the
    /// way a browser `<select>` shows its first entry by default.
    pub fn replace_options(&mut self, options: Vec<SelectOption>, selected: Option<usize>) {
        self.selected = match selected {
            Some(i) if i < options.len() => Some(i),
            _ if options.is_empty() => None,
            _ => Some(0),
        };
        self.options = options;
    }
}

/// Id → control registry, standing in for a page's element lookup.
#[derive(Clone, Debug, Default)]
pub struct Controls {
    selects: BTreeMap<String, SelectControl>,
}

impl Controls {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an empty control under `id` (no-op if it already exists).
    pub fn register(&mut self, id: &str) -> &mut SelectControl {
        self.selects.entry(s!(id)).or_default()
    }

    pub fn get(&self, id: &str) -> Option<&SelectControl> {
        self.selects.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut SelectControl> {
        self.selects.get_mut(id)
    }

    pub fn lookup_mut(&mut self, id: &str) -> Result<&mut SelectControl, SelectError> {
        self.selects
            .get_mut(id)
            .ok_or_else(|| SelectError::Missing(s!(id)))
    }

    /// Current value of control `id`; empty if missing or unselected.
    pub fn value(&self, id: &str) -> &str {
        self.get(id).map(SelectControl::value).unwrap_or("")
    }
}

/// Fill `control` with one option per entry (value = label = entry),
/// optionally preceded by an empty-value placeholder, and select the option
/// whose value equals `default_value`. Replaces any previous options.
pub fn populate(
    control: &mut SelectControl,
    entries: &[&str],
    placeholder: Option<&str>,
    default_value: &str,
) {
    let mut options = Vec::with_capacity(entries.len() + 1);
    if let Some(label) = placeholder {
        options.push(SelectOption::new("", label));
    }
    options.extend(entries.iter().map(|e| SelectOption::new(e, e)));

    let selected = options.iter().position(|o| o.value == default_value);
    control.replace_options(options, selected);
}
