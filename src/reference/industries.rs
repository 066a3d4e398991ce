// src/reference/industries.rs
use super::Catalog;

/// Catch-all category.
pub const OTHER_INDUSTRY: &str = "その他";

/// Major divisions of the Japan Standard Industrial Classification, plus
/// the catch-all.
const NAMES: [&str; 19] = [
    "農業・林業・漁業",
    "鉱業・採石業・砂利採取業",
    "建設業",
    "製造業",
    "電気・ガス・熱供給・水道業",
    "情報通信業",
    "運輸業・郵便業",
    "卸売業・小売業",
    "金融業・保険業",
    "不動産業・物品賃貸業",
    "学術研究・専門・技術サービス業",
    "宿泊業・飲食サービス業",
    "生活関連サービス業・娯楽業",
    "教育・学習支援業",
    "医療・福祉",
    "複合サービス事業",
    "サービス業（他に分類されないもの）",
    "公務（他に分類されるものを除く）",
    OTHER_INDUSTRY,
];

pub struct Industries;

pub static INDUSTRIES: Industries = Industries;

impl Industries {
    pub fn is_other(&self, name: &str) -> bool {
        name == OTHER_INDUSTRY
    }
}

impl Catalog for Industries {
    fn label(&self) -> &'static str {
        "industries"
    }

    fn entries(&self) -> &'static [&'static str] {
        &NAMES
    }

    fn placeholder(&self) -> Option<&'static str> {
        Some("-- select an industry --")
    }

    /// The empty string stands for "unselected" and is accepted.
    fn is_valid(&self, name: &str) -> bool {
        name.is_empty() || NAMES.contains(&name)
    }
}
