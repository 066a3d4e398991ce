// src/controller.rs
//
// Search flow: Idle → Searching → (Success | Failure), reset from anywhere.
// The network call itself happens outside (`begin_search` hands out the
// request, `complete` takes the outcome), so the GUI can run it on a worker
// thread while the CLI and tests simply call `search`.

use crate::{
    config::{
        consts::{DEFAULT_INDUSTRY, DEFAULT_PREFECTURE, DEFAULT_TOP_K, INDUSTRY_SELECT, PREFECTURE_SELECT},
        endpoint::{HostContext, resolve_endpoint},
    },
    core::net::SearchTransport,
    error::SearchError,
    model::{SearchCriteria, SearchRequest, SearchResponse},
    reference::{Catalog, INDUSTRIES, PREFECTURES},
    render::{self, Status, Surface},
    select::Controls,
};

/// Per-app settings fixed at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientContext {
    endpoint: String,
}

impl ClientContext {
    /// Resolve the endpoint once from the host context.
    pub fn new(host: &HostContext) -> Self {
        let endpoint = resolve_endpoint(host);
        logf!("Init: search endpoint {endpoint}");
        Self { endpoint }
    }

    /// Skip resolution and use `endpoint` as given.
    pub fn with_endpoint(endpoint: &str) -> Self {
        logf!("Init: search endpoint {endpoint} (explicit)");
        Self { endpoint: s!(endpoint) }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

/// Form inputs: the two select controls plus free-text fields.
#[derive(Clone, Debug)]
pub struct SearchForm {
    pub selects: Controls,
    pub municipality: String,
    pub keywords: String,
    /// Raw text; parsed when a search starts.
    pub top_k: String,
}

impl Default for SearchForm {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchForm {
    /// Form with both select controls present and populated.
    pub fn new() -> Self {
        let mut selects = Controls::new();
        selects.register(PREFECTURE_SELECT);
        selects.register(INDUSTRY_SELECT);
        Self::with_controls(selects)
    }

    /// Populate whichever select controls exist in `selects`. A missing
    /// control is logged and left out; the form stays usable.
    pub fn with_controls(mut selects: Controls) -> Self {
        let inits: [(&dyn Catalog, &str, &str); 2] = [
            (&PREFECTURES, PREFECTURE_SELECT, DEFAULT_PREFECTURE),
            (&INDUSTRIES, INDUSTRY_SELECT, DEFAULT_INDUSTRY),
        ];
        for (catalog, id, default) in inits {
            if let Err(e) = catalog.initialize_select(&mut selects, id, default) {
                loge!("Bootstrap: {} not initialized: {e}", catalog.label());
            }
        }

        Self {
            selects,
            municipality: s!(),
            keywords: s!(),
            top_k: DEFAULT_TOP_K.to_string(),
        }
    }

    pub fn prefecture(&self) -> &str {
        self.selects.value(PREFECTURE_SELECT)
    }

    pub fn industry(&self) -> &str {
        self.selects.value(INDUSTRY_SELECT)
    }

    pub fn criteria(&self) -> SearchCriteria {
        SearchCriteria::from_fields(
            self.prefecture(),
            &self.municipality,
            self.industry(),
            &self.keywords,
            &self.top_k,
        )
    }

    pub fn reset(&mut self) {
        if let Some(pref) = self.selects.get_mut(PREFECTURE_SELECT) {
            pref.set_value(DEFAULT_PREFECTURE);
        }
        if let Some(industry) = self.selects.get_mut(INDUSTRY_SELECT) {
            industry.set_value(DEFAULT_INDUSTRY);
        }
        self.municipality.clear();
        self.keywords.clear();
        self.top_k = DEFAULT_TOP_K.to_string();
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Searching,
    Success,
    Failure,
}

/// A search handed out by `begin_search`, to be answered via `complete`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingSearch {
    pub generation: u64,
    pub endpoint: String,
    pub request: SearchRequest,
}

pub struct SearchController {
    ctx: ClientContext,
    pub form: SearchForm,
    surface: Surface,
    phase: Phase,
    // Bumped by every search and reset; outcomes for older values are dropped.
    generation: u64,
}

impl SearchController {
    pub fn new(ctx: ClientContext) -> Self {
        Self::with_form(ctx, SearchForm::new())
    }

    pub fn with_form(ctx: ClientContext, form: SearchForm) -> Self {
        Self {
            ctx,
            form,
            surface: Surface::new(),
            phase: Phase::Idle,
            generation: 0,
        }
    }

    pub fn context(&self) -> &ClientContext {
        &self.ctx
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The search trigger is disabled while a request is outstanding.
    pub fn trigger_enabled(&self) -> bool {
        self.phase != Phase::Searching
    }

    /// Idle → Searching. Reads the form, clears results, shows the busy
    /// status. `None` if a search is already outstanding.
    pub fn begin_search(&mut self) -> Option<PendingSearch> {
        if !self.trigger_enabled() {
            logd!("Search: trigger ignored, generation {} still running", self.generation);
            return None;
        }

        let criteria = self.form.criteria();
        self.generation += 1;
        self.phase = Phase::Searching;
        self.surface.clear_results();
        self.surface.status = Status::Busy;

        logf!(
            "Search: begin #{} pref={} muni={:?} industry={:?} kw={:?} top_k={}",
            self.generation,
            criteria.prefecture,
            criteria.municipality,
            criteria.industry,
            criteria.keywords,
            criteria.top_k
        );

        Some(PendingSearch {
            generation: self.generation,
            endpoint: s!(self.ctx.endpoint()),
            request: criteria.to_request(),
        })
    }

    /// Searching → Success | Failure. Returns false (and changes nothing)
    /// when `generation` is not the latest search.
    pub fn complete(&mut self, generation: u64, outcome: Result<SearchResponse, SearchError>) -> bool {
        if generation != self.generation || self.phase != Phase::Searching {
            logd!("Search: dropping stale result #{generation} (current #{})", self.generation);
            return false;
        }

        let result = outcome.and_then(|resp| {
            render::render(&mut self.surface, &resp.items, resp.took_ms)?;
            Ok(resp.items.len())
        });

        match result {
            Ok(count) => {
                logf!("Search: OK #{generation} items={count}");
                self.phase = Phase::Success;
            }
            Err(e) => {
                loge!("Search: Error #{generation}: {e}");
                self.surface.status = Status::Error(e.to_string());
                self.phase = Phase::Failure;
            }
        }
        true
    }

    /// Run one search to completion on the calling thread.
    pub fn search<T: SearchTransport + ?Sized>(&mut self, transport: &T) -> Phase {
        if let Some(pending) = self.begin_search() {
            let outcome = transport.search(&pending.endpoint, &pending.request);
            self.complete(pending.generation, outcome);
        }
        self.phase
    }

    /// Restore form defaults and clear status and results. Any outstanding
    /// search is orphaned: its outcome will be dropped by `complete`.
    pub fn reset(&mut self) {
        if self.phase == Phase::Searching {
            logd!("Reset: orphaning search #{}", self.generation);
        }
        self.generation += 1;
        self.form.reset();
        self.surface.clear();
        self.phase = Phase::Idle;
        logf!("Reset: form cleared");
    }
}
