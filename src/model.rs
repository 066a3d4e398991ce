// src/model.rs
//
// Request/response shapes of the search API. Everything coming back from
// the API is untrusted and optional.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::config::consts::{DEFAULT_PREFECTURE, DEFAULT_TOP_K};

/// Filter criteria read from the form for one search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchCriteria {
    pub prefecture: String,
    pub municipality: Option<String>,
    pub industry: Option<String>,
    pub keywords: Option<String>,
    pub top_k: u32,
}

impl SearchCriteria {
    /// Apply the form fallbacks to raw field values: empty prefecture →
    /// default, empty free text → `None`, unparsable top-K → 10.
    pub fn from_fields(
        prefecture: &str,
        municipality: &str,
        industry: &str,
        keywords: &str,
        top_k: &str,
    ) -> Self {
        Self {
            prefecture: if prefecture.is_empty() { s!(DEFAULT_PREFECTURE) } else { s!(prefecture) },
            municipality: non_empty(municipality),
            industry: non_empty(industry),
            keywords: non_empty(keywords),
            top_k: parse_top_k(top_k),
        }
    }

    pub fn to_request(&self) -> SearchRequest {
        SearchRequest {
            prefecture: self.prefecture.clone(),
            municipality: self.municipality.clone(),
            industry: self.industry.clone(),
            keywords: self.keywords.clone(),
            top_k: self.top_k,
        }
    }
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() { None } else { Some(s!(s)) }
}

/// Leading digits after trimming, like `parseInt(s, 10)`. Zero, overflow
/// and non-numeric input fall back to the default.
pub fn parse_top_k(s: &str) -> u32 {
    let t = s.trim_start();
    let t = t.strip_prefix('+').unwrap_or(t);
    let digits_end = t.find(|c: char| !c.is_ascii_digit()).unwrap_or(t.len());

    match t[..digits_end].parse::<u32>() {
        Ok(n) if n > 0 => n,
        _ => DEFAULT_TOP_K,
    }
}

/// POST body. `None` fields serialize as `null`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub prefecture: String,
    pub municipality: Option<String>,
    pub industry: Option<String>,
    pub keywords: Option<String>,
    pub top_k: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct SearchResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<ResultItem>,
    /// Whole milliseconds; fractional values are rounded.
    #[serde(default, deserialize_with = "lenient_millis")]
    pub took_ms: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ResultItem {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub deadline: Option<String>,
    /// Number or numeric string; checked when rendered.
    #[serde(default)]
    pub amount_max: Option<Value>,
    /// Fraction 0–1, number or numeric string.
    #[serde(default)]
    pub rate_max: Option<Value>,
    #[serde(default)]
    pub area: Option<String>,
    #[serde(default)]
    pub municipality: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub grant_type: Option<String>,
    #[serde(default, alias = "confidence_score")]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub reasons: Option<Vec<String>>,
}

fn null_as_default<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(d)?.unwrap_or_default())
}

/// Null, negative or non-finite durations read as 0.
fn lenient_millis<'de, D>(d: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<f64>::deserialize(d)? {
        Some(ms) if ms.is_finite() && ms > 0.0 => ms.round() as u64,
        _ => 0,
    })
}
