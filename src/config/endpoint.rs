// src/config/endpoint.rs
//
// Picks the search endpoint from the host context the app was started in.
// Pure: callers gather hostname/origin, this only decides.

use url::{Origin, Url};

use super::consts::{LOCAL_ENDPOINT, LOCAL_HOSTS, REMOTE_ENDPOINT, SEARCH_PATH};

/// Ambient host information, as a browser would expose it via `location`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HostContext {
    pub hostname: Option<String>,
    pub origin: Option<String>,
}

impl HostContext {
    /// No host information at all (desktop default).
    pub fn none() -> Self {
        Self::default()
    }

    /// Build from an origin URL; the hostname is taken from it when it parses.
    pub fn from_origin(origin: &str) -> Self {
        let hostname = Url::parse(origin)
            .ok()
            .and_then(|u| u.host_str().map(str::to_owned));
        Self { hostname, origin: Some(s!(origin)) }
    }
}

/// Decide where search requests go.
///
/// 1. recognized local-development hostname → fixed loopback endpoint
/// 2. usable (tuple) origin → `{origin}/v1/search`
/// 3. anything else → fixed remote endpoint
pub fn resolve_endpoint(ctx: &HostContext) -> String {
    if let Some(host) = ctx.hostname.as_deref() {
        if LOCAL_HOSTS.contains(&host) {
            logd!("Endpoint: local host {host} → {LOCAL_ENDPOINT}");
            return s!(LOCAL_ENDPOINT);
        }
    }

    match ctx.origin.as_deref().map(origin_base) {
        Some(Some(base)) => join!(base, SEARCH_PATH),
        Some(None) => {
            logd!("Endpoint: unusable origin {:?}, using default", ctx.origin);
            s!(REMOTE_ENDPOINT)
        }
        None => s!(REMOTE_ENDPOINT),
    }
}

/// `scheme://host[:port]` for a parseable non-opaque origin.
fn origin_base(origin: &str) -> Option<String> {
    let url = Url::parse(origin.trim()).ok()?;
    match url.origin() {
        o @ Origin::Tuple(..) => Some(o.ascii_serialization()),
        Origin::Opaque(_) => None,
    }
}
