// src/config/consts.rs

// Form defaults
pub const DEFAULT_PREFECTURE: &str = "東京都";
pub const DEFAULT_INDUSTRY: &str = ""; // unselected
pub const DEFAULT_TOP_K: u32 = 10;

// Select control ids
pub const PREFECTURE_SELECT: &str = "pref";
pub const INDUSTRY_SELECT: &str = "industry";

// Endpoints
pub const LOCAL_ENDPOINT: &str = "http://localhost:8000/v1/search";
pub const REMOTE_ENDPOINT: &str = "https://subsidy-grant-api.vercel.app/v1/search";
pub const SEARCH_PATH: &str = "/v1/search";
pub const LOCAL_HOSTS: &[&str] = &["localhost", "127.0.0.1", "::1", "[::1]"];

// Net
pub const USER_AGENT: &str = concat!("subsidy_search/", env!("CARGO_PKG_VERSION"));

// Rendering
pub const MAX_REASONS: usize = 3;

// Local files
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_RESULTS_FILE: &str = "results.html";
