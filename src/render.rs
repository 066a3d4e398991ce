// src/render.rs
//
// Turns API result items into display blocks and keeps the status line.
// `Card` holds raw text for native drawing; every `*_html` method escapes
// API-supplied strings on the way out.

use url::Url;

use crate::{
    config::consts::MAX_REASONS,
    core::{
        format::{as_number, group_thousands, percent},
        html::escape,
    },
    error::RenderError,
    model::ResultItem,
};

pub const DEFAULT_GRANT_TYPE: &str = "subsidy";
pub const UNKNOWN_TITLE: &str = "title unknown";
pub const NO_MATCHES: &str = "No matching programs found.";
pub const NO_RESULTS_STATUS: &str = "0 results";
pub const BUSY_STATUS: &str = "searching…";
pub const NO_REASONS: &str = "—";
pub const LINK_LABEL: &str = "official page";
pub const META_SEP: &str = " · ";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeClass {
    Subsidy,
    Grant,
}

impl BadgeClass {
    pub fn for_type(grant_type: &str) -> Self {
        match grant_type {
            "grant" | "助成金" => BadgeClass::Grant,
            _ => BadgeClass::Subsidy,
        }
    }

    pub fn css(self) -> &'static str {
        match self {
            BadgeClass::Subsidy => "subsidy",
            BadgeClass::Grant => "grant",
        }
    }
}

/// One result, ready for display. Text fields are unescaped.
#[derive(Clone, Debug, PartialEq)]
pub struct Card {
    pub badge: String,
    pub badge_class: BadgeClass,
    pub title: String,
    /// Metadata fragments, in display order.
    pub meta: Vec<String>,
    pub confidence: String,
    pub summary: String,
    /// At most `MAX_REASONS`.
    pub reasons: Vec<String>,
    /// Only set for http(s) URLs.
    pub link: Option<String>,
}

impl Card {
    pub fn from_item(item: &ResultItem) -> Result<Self, RenderError> {
        let badge = non_empty(item.grant_type.as_deref()).unwrap_or(DEFAULT_GRANT_TYPE);
        let title = non_empty(item.title.as_deref()).unwrap_or(UNKNOWN_TITLE);

        let mut meta = Vec::new();
        if let Some(deadline) = non_empty(item.deadline.as_deref()) {
            meta.push(format!("deadline: {deadline}"));
        }
        if let Some(v) = &item.amount_max {
            let amount = as_number("amount_max", v)?;
            meta.push(format!("max amount: {}円", group_thousands(amount)));
        }
        if let Some(v) = &item.rate_max {
            let rate = as_number("rate_max", v)?;
            meta.push(format!("subsidy rate: {}", percent(rate)));
        }
        let area: Vec<&str> = [item.area.as_deref(), item.municipality.as_deref()]
            .into_iter()
            .filter_map(non_empty)
            .collect();
        if !area.is_empty() {
            meta.push(format!("area: {}", area.join(" ")));
        }
        if let Some(industry) = non_empty(item.industry.as_deref()) {
            meta.push(format!("industry: {industry}"));
        }

        let reasons = item
            .reasons
            .iter()
            .flatten()
            .take(MAX_REASONS)
            .cloned()
            .collect();

        Ok(Self {
            badge: s!(badge),
            badge_class: BadgeClass::for_type(badge),
            title: s!(title),
            meta,
            confidence: percent(item.confidence.unwrap_or(0.0)),
            summary: item.summary.clone().unwrap_or_default(),
            reasons,
            link: item.source_url.as_deref().and_then(safe_link),
        })
    }

    pub fn meta_line(&self) -> String {
        self.meta.join(META_SEP)
    }

    pub fn to_html(&self) -> String {
        let meta = self
            .meta
            .iter()
            .map(|m| escape(m))
            .collect::<Vec<_>>()
            .join(META_SEP);

        let reasons = if self.reasons.is_empty() {
            format!(r#"<span class="pill">{NO_REASONS}</span>"#)
        } else {
            self.reasons
                .iter()
                .map(|r| format!(r#"<span class="pill">{}</span>"#, escape(r)))
                .collect::<Vec<_>>()
                .join(" ")
        };

        let link = match &self.link {
            Some(url) => format!(
                r#"<a class="btn" href="{}" target="_blank" rel="noopener">{LINK_LABEL}</a>"#,
                escape(url)
            ),
            None => s!(),
        };

        format!(
            r#"<div class="card-modern">
  <div class="card-head">
    <div>
      <div class="kind-badge {class}">{badge}</div>
      <h3>{title}</h3>
      <div class="meta">{meta}</div>
    </div>
    <div class="score">confidence <span class="score">{confidence}</span></div>
  </div>
  <div class="body">{summary}</div>
  <div class="card-footer">{link} {reasons}</div>
</div>"#,
            class = self.badge_class.css(),
            badge = escape(&self.badge),
            title = escape(&self.title),
            confidence = self.confidence,
            summary = escape(&self.summary),
        )
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

/// Only absolute http(s) URLs become links.
fn safe_link(raw: &str) -> Option<String> {
    let url = Url::parse(raw.trim()).ok()?;
    match url.scheme() {
        "http" | "https" => Some(s!(url.as_str())),
        _ => {
            logd!("Render: dropping link with scheme {:?}", url.scheme());
            None
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Block {
    NoMatches,
    Card(Card),
}

impl Block {
    pub fn to_html(&self) -> String {
        match self {
            Block::NoMatches => {
                format!(r#"<div class="result"><span class="hint">{NO_MATCHES}</span></div>"#)
            }
            Block::Card(card) => card.to_html(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Status {
    #[default]
    Empty,
    Busy,
    Message(String),
    Error(String),
}

impl Status {
    pub fn text(&self) -> &str {
        match self {
            Status::Empty => "",
            Status::Busy => BUSY_STATUS,
            Status::Message(m) | Status::Error(m) => m.as_str(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Status::Error(_))
    }

    pub fn to_html(&self) -> String {
        match self {
            Status::Error(m) => format!(
                r#"<span class="badge ng">error</span> <span class="hint">{}</span>"#,
                escape(m)
            ),
            other => escape(other.text()),
        }
    }
}

/// The status line plus the rendered results area.
#[derive(Clone, Debug, Default)]
pub struct Surface {
    pub status: Status,
    blocks: Vec<Block>,
}

impl Surface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Card(c) => Some(c),
            Block::NoMatches => None,
        })
    }

    pub fn clear_results(&mut self) {
        self.blocks.clear();
    }

    pub fn clear(&mut self) {
        self.blocks.clear();
        self.status = Status::Empty;
    }

    pub fn results_html(&self) -> String {
        self.blocks
            .iter()
            .map(Block::to_html)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn status_html(&self) -> String {
        self.status.to_html()
    }

    /// Standalone HTML document with the status line and results.
    pub fn page_html(&self) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="ja">
<head>
<meta charset="utf-8">
<title>Subsidy &amp; grant search results</title>
<style>{PAGE_CSS}</style>
</head>
<body>
<div id="status">{status}</div>
<div id="results">
{results}
</div>
</body>
</html>
"#,
            status = self.status_html(),
            results = self.results_html(),
        )
    }
}

const PAGE_CSS: &str = "\
body{font-family:sans-serif;max-width:860px;margin:24px auto;color:#222}\
.card-modern{border:1px solid #ddd;border-radius:10px;padding:14px;margin:12px 0}\
.card-head{display:flex;justify-content:space-between;gap:12px}\
.kind-badge{display:inline-block;font-size:12px;padding:2px 8px;border-radius:999px;color:#fff}\
.kind-badge.subsidy{background:#1565c0}.kind-badge.grant{background:#2e7d32}\
.meta,.score,.hint{font-size:13px;color:#666}\
.pill{display:inline-block;font-size:12px;background:#f1f1f1;border-radius:999px;padding:2px 8px}\
.badge.ng{background:#c62828;color:#fff;padding:2px 6px;border-radius:4px}\
.btn{font-size:13px;margin-right:8px}";

/// Replace the results area with `items`, in order, and report the count.
///
/// All cards are built before anything is shown; a malformed field leaves
/// the results area empty and returns the error.
pub fn render(surface: &mut Surface, items: &[ResultItem], took_ms: u64) -> Result<(), RenderError> {
    surface.clear_results();

    if items.is_empty() {
        surface.blocks.push(Block::NoMatches);
        surface.status = Status::Message(s!(NO_RESULTS_STATUS));
        return Ok(());
    }

    let cards = items
        .iter()
        .map(Card::from_item)
        .collect::<Result<Vec<_>, _>>()?;

    surface.blocks.extend(cards.into_iter().map(Block::Card));
    surface.status = Status::Message(format!(
        "search complete: {} items ({} ms)",
        items.len(),
        took_ms
    ));
    Ok(())
}
