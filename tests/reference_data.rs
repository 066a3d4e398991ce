// tests/reference_data.rs
use std::collections::HashSet;

use subsidy_search::reference::{Catalog, INDUSTRIES, OTHER_INDUSTRY, PREFECTURES};

#[test]
fn prefectures_are_the_47_in_order() {
    let list = PREFECTURES.list();
    assert_eq!(list.len(), 47);
    assert_eq!(list.first().map(String::as_str), Some("北海道"));
    assert_eq!(list[12], "東京都");
    assert_eq!(list.last().map(String::as_str), Some("沖縄県"));

    let unique: HashSet<_> = list.iter().collect();
    assert_eq!(unique.len(), 47, "no duplicates");
}

#[test]
fn every_prefecture_is_valid() {
    for p in PREFECTURES.list() {
        assert!(PREFECTURES.is_valid(&p), "{p} should be valid");
    }
}

#[test]
fn unknown_prefectures_are_invalid() {
    for bad in ["", "東京", "Tokyo", "東京都 ", "大阪県", "情報通信業"] {
        assert!(!PREFECTURES.is_valid(bad), "{bad:?} should be invalid");
    }
}

#[test]
fn industries_are_19_and_accept_empty() {
    let list = INDUSTRIES.list();
    assert_eq!(list.len(), 19);
    assert_eq!(list.last().map(String::as_str), Some(OTHER_INDUSTRY));

    for i in &list {
        assert!(INDUSTRIES.is_valid(i), "{i} should be valid");
    }
    assert!(INDUSTRIES.is_valid(""), "empty means unselected");

    for bad in [" ", "IT", "情報通信", "東京都"] {
        assert!(!INDUSTRIES.is_valid(bad), "{bad:?} should be invalid");
    }
}

#[test]
fn only_the_catch_all_is_other() {
    assert!(INDUSTRIES.is_other("その他"));
    for i in INDUSTRIES.list().iter().filter(|i| i.as_str() != "その他") {
        assert!(!INDUSTRIES.is_other(i), "{i} is not the catch-all");
    }
    assert!(!INDUSTRIES.is_other(""));
}

#[test]
fn list_returns_an_independent_copy() {
    let mut first = PREFECTURES.list();
    first.clear();
    first.push("架空県".into());

    let second = PREFECTURES.list();
    assert_eq!(second.len(), 47);
    assert!(!PREFECTURES.is_valid("架空県"));
}
