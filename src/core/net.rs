// src/core/net.rs
//
// JSON POST to the search API.

use reqwest::blocking::Client;

use crate::{
    config::consts::USER_AGENT,
    error::SearchError,
    model::{SearchRequest, SearchResponse},
};

/// Something that can answer a search request. The controller only sees
/// this; tests swap in fakes.
pub trait SearchTransport {
    fn search(&self, endpoint: &str, request: &SearchRequest) -> Result<SearchResponse, SearchError>;
}

/// reqwest-backed transport. No timeout of its own beyond reqwest's
/// defaults; cheap to clone (shares the connection pool).
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, SearchError> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }
}

impl SearchTransport for HttpTransport {
    fn search(&self, endpoint: &str, request: &SearchRequest) -> Result<SearchResponse, SearchError> {
        let resp = self.client.post(endpoint).json(request).send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(SearchError::Status(status.as_u16()));
        }

        let text = resp.text()?;
        Ok(serde_json::from_str(&text)?)
    }
}
