// tests/controller_flow.rs
use std::cell::RefCell;

use serde_json::json;
use subsidy_search::{
    config::consts::{INDUSTRY_SELECT, PREFECTURE_SELECT},
    controller::{ClientContext, Phase, SearchController, SearchForm},
    core::net::SearchTransport,
    error::SearchError,
    model::{SearchRequest, SearchResponse},
    render::{Block, Status},
    select::Controls,
};

/// Answers every search with a canned outcome and records requests.
struct Fake {
    reply: Box<dyn Fn() -> Result<SearchResponse, SearchError>>,
    seen: RefCell<Vec<(String, SearchRequest)>>,
}

impl Fake {
    fn ok(v: serde_json::Value) -> Self {
        Self {
            reply: Box::new(move || -> Result<SearchResponse, SearchError> {
                Ok(serde_json::from_value(v.clone()).unwrap())
            }),
            seen: RefCell::new(Vec::new()),
        }
    }

    fn status(code: u16) -> Self {
        Self {
            reply: Box::new(move || -> Result<SearchResponse, SearchError> { Err(SearchError::Status(code)) }),
            seen: RefCell::new(Vec::new()),
        }
    }
}

impl SearchTransport for Fake {
    fn search(&self, endpoint: &str, request: &SearchRequest) -> Result<SearchResponse, SearchError> {
        self.seen.borrow_mut().push((endpoint.to_string(), request.clone()));
        (self.reply)()
    }
}

fn controller() -> SearchController {
    SearchController::new(ClientContext::with_endpoint("http://api.test/v1/search"))
}

#[test]
fn empty_form_builds_default_request() {
    let mut c = controller();
    // simulate a cleared prefecture control
    c.form.selects.get_mut(PREFECTURE_SELECT).unwrap().set_value("");
    c.form.top_k = String::new();

    let fake = Fake::ok(json!({"items": [], "took_ms": 1}));
    c.search(&fake);

    let seen = fake.seen.borrow();
    let (endpoint, req) = &seen[0];
    assert_eq!(endpoint, "http://api.test/v1/search");
    assert_eq!(req.prefecture, "東京都");
    assert_eq!(req.top_k, 10);
    assert_eq!(req.municipality, None);
    assert_eq!(req.industry, None);
    assert_eq!(req.keywords, None);

    let body = serde_json::to_value(req).unwrap();
    assert_eq!(
        body,
        json!({"prefecture": "東京都", "municipality": null, "industry": null, "keywords": null, "top_k": 10})
    );
}

#[test]
fn filled_form_is_sent_as_is() {
    let mut c = controller();
    c.form.selects.get_mut(PREFECTURE_SELECT).unwrap().set_value("大阪府");
    c.form.selects.get_mut(INDUSTRY_SELECT).unwrap().set_value("製造業");
    c.form.municipality = "堺市".into();
    c.form.keywords = "省エネ".into();
    c.form.top_k = "25 items".into();

    let req = c.begin_search().unwrap().request;
    assert_eq!(req.prefecture, "大阪府");
    assert_eq!(req.industry.as_deref(), Some("製造業"));
    assert_eq!(req.municipality.as_deref(), Some("堺市"));
    assert_eq!(req.keywords.as_deref(), Some("省エネ"));
    assert_eq!(req.top_k, 25);
}

#[test]
fn non_numeric_top_k_falls_back() {
    let mut c = controller();
    for raw in ["abc", "", "0", "-3", "99999999999"] {
        c.form.top_k = raw.into();
        assert_eq!(c.form.criteria().top_k, 10, "{raw:?}");
    }
}

#[test]
fn success_renders_and_reenables_trigger() {
    let mut c = controller();
    let fake = Fake::ok(json!({
        "items": [{"title": "A"}, {"title": "B"}],
        "took_ms": 12
    }));

    assert_eq!(c.search(&fake), Phase::Success);
    assert!(c.trigger_enabled());
    assert_eq!(c.surface().cards().count(), 2);
    assert_eq!(c.surface().status.text(), "search complete: 2 items (12 ms)");
}

#[test]
fn http_error_shows_status_and_reenables_trigger() {
    let mut c = controller();
    assert_eq!(c.search(&Fake::status(500)), Phase::Failure);

    assert!(c.trigger_enabled());
    assert!(c.surface().status.is_error());
    assert!(c.surface().status.text().contains("HTTP 500"));
    assert!(c.surface().status_html().contains("HTTP 500"));
    assert!(c.surface().blocks().is_empty());
}

#[test]
fn malformed_field_is_reported_like_transport_failure() {
    let mut c = controller();
    let fake = Fake::ok(json!({"items": [{"title": "A", "rate_max": "half"}], "took_ms": 2}));

    assert_eq!(c.search(&fake), Phase::Failure);
    assert!(c.surface().status.text().contains("rate_max"));
}

#[test]
fn searching_state_disables_trigger_and_clears_results() {
    let mut c = controller();
    c.search(&Fake::ok(json!({"items": [], "took_ms": 0})));
    assert_eq!(c.surface().blocks(), &[Block::NoMatches]);

    let pending = c.begin_search().unwrap();
    assert_eq!(c.phase(), Phase::Searching);
    assert!(!c.trigger_enabled());
    assert_eq!(c.surface().status, Status::Busy);
    assert!(c.surface().blocks().is_empty());

    // second trigger while running is ignored
    assert!(c.begin_search().is_none());

    assert!(c.complete(pending.generation, Err(SearchError::Transport("connection refused".into()))));
    assert_eq!(c.phase(), Phase::Failure);
    assert!(c.trigger_enabled());
    assert_eq!(c.surface().status.text(), "connection refused");
}

#[test]
fn reset_restores_defaults_and_orphans_running_search() {
    let mut c = controller();
    c.form.selects.get_mut(PREFECTURE_SELECT).unwrap().set_value("北海道");
    c.form.selects.get_mut(INDUSTRY_SELECT).unwrap().set_value("建設業");
    c.form.municipality = "札幌市".into();
    c.form.keywords = "除雪".into();
    c.form.top_k = "3".into();

    let pending = c.begin_search().unwrap();
    c.reset();

    assert_eq!(c.phase(), Phase::Idle);
    assert!(c.trigger_enabled());
    assert_eq!(c.form.prefecture(), "東京都");
    assert_eq!(c.form.industry(), "");
    assert_eq!(c.form.municipality, "");
    assert_eq!(c.form.keywords, "");
    assert_eq!(c.form.top_k, "10");
    assert_eq!(c.surface().status, Status::Empty);

    // the orphaned search finishing later must not render into the cleared form
    let late: SearchResponse = serde_json::from_value(json!({"items": [{"title": "late"}], "took_ms": 900})).unwrap();
    assert!(!c.complete(pending.generation, Ok(late)));
    assert!(c.surface().blocks().is_empty());
    assert_eq!(c.surface().status, Status::Empty);
}

#[test]
fn stale_generation_is_dropped() {
    let mut c = controller();
    let first = c.begin_search().unwrap();
    c.reset();
    let second = c.begin_search().unwrap();
    assert!(second.generation > first.generation);

    let resp = |t: &str| -> SearchResponse {
        serde_json::from_value(json!({"items": [{"title": t}], "took_ms": 1})).unwrap()
    };
    assert!(c.complete(second.generation, Ok(resp("fresh"))));
    assert!(!c.complete(first.generation, Ok(resp("stale"))));

    let titles: Vec<&str> = c.surface().cards().map(|card| card.title.as_str()).collect();
    assert_eq!(titles, ["fresh"]);
}

#[test]
fn form_without_select_controls_still_searches() {
    // bootstrap logs the missing controls and continues
    let form = SearchForm::with_controls(Controls::new());
    assert!(form.selects.get(PREFECTURE_SELECT).is_none());

    let mut c = SearchController::with_form(ClientContext::with_endpoint("http://api.test"), form);
    let req = c.begin_search().unwrap().request;
    assert_eq!(req.prefecture, "東京都");
    assert_eq!(req.industry, None);

    c.reset();
    assert_eq!(c.phase(), Phase::Idle);
}
