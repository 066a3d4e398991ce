// tests/select_init.rs
use subsidy_search::{
    error::SelectError,
    reference::{Catalog, INDUSTRIES, PREFECTURES},
    select::Controls,
};

fn controls_with(ids: &[&str]) -> Controls {
    let mut c = Controls::new();
    for id in ids {
        c.register(id);
    }
    c
}

#[test]
fn prefecture_select_has_one_option_per_entry_and_default_selected() {
    let mut controls = controls_with(&["pref"]);
    PREFECTURES.initialize_select(&mut controls, "pref", "東京都").unwrap();

    let control = controls.get("pref").unwrap();
    assert_eq!(control.len(), 47);

    let selected: Vec<usize> = (0..control.len()).filter(|&i| control.is_selected(i)).collect();
    assert_eq!(selected.len(), 1);
    assert_eq!(control.value(), "東京都");
    assert_eq!(control.selected_label(), "東京都");

    for opt in control.options() {
        assert_eq!(opt.value, opt.label);
    }
}

#[test]
fn industry_select_prepends_empty_placeholder() {
    let mut controls = controls_with(&["industry"]);
    INDUSTRIES.initialize_select(&mut controls, "industry", "").unwrap();

    let control = controls.get("industry").unwrap();
    assert_eq!(control.len(), 20);

    let first = &control.options()[0];
    assert_eq!(first.value, "");
    assert!(first.label.contains("select"));

    assert_eq!(control.selected_index(), Some(0));
    assert_eq!(control.value(), "");
}

#[test]
fn industry_default_can_be_a_real_entry() {
    let mut controls = controls_with(&["industry"]);
    INDUSTRIES.initialize_select(&mut controls, "industry", "情報通信業").unwrap();

    let control = controls.get("industry").unwrap();
    assert_eq!(control.value(), "情報通信業");
    let n = (0..control.len()).filter(|&i| control.is_selected(i)).count();
    assert_eq!(n, 1);
}

#[test]
fn missing_control_is_reported_not_panicked() {
    let mut controls = controls_with(&["something-else"]);
    let err = PREFECTURES
        .initialize_select(&mut controls, "pref", "東京都")
        .unwrap_err();
    assert_eq!(err, SelectError::Missing("pref".into()));
    assert!(err.to_string().contains("pref"));
    assert!(controls.get("pref").is_none());
}

#[test]
fn reinitializing_replaces_options() {
    let mut controls = controls_with(&["industry"]);
    INDUSTRIES.initialize_select(&mut controls, "industry", "建設業").unwrap();
    INDUSTRIES.initialize_select(&mut controls, "industry", "建設業").unwrap();

    let control = controls.get("industry").unwrap();
    assert_eq!(control.len(), 20, "no duplicated options");
    assert_eq!(control.value(), "建設業");
}

#[test]
fn set_value_to_unknown_clears_selection() {
    let mut controls = controls_with(&["pref"]);
    PREFECTURES.initialize_select(&mut controls, "pref", "東京都").unwrap();
    let control = controls.get_mut("pref").unwrap();

    assert!(control.set_value("大阪府"));
    assert_eq!(control.value(), "大阪府");

    assert!(!control.set_value("nowhere"));
    assert_eq!(control.value(), "");
    assert_eq!(control.selected_index(), None);
}
