use serde::{Deserialize, Serialize};

/// JSON body carried by non-2xx API responses. The frontend renders the
/// message as a warning instead of failing the page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response of the cache invalidation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClearCacheResponse {
    pub cleared: usize,
}
