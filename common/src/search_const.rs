//! Shared constants for the product search endpoint.

/// Environment variable read by the server to locate the search service.
pub const SEARCH_ENDPOINT_ENV: &str = "PRODUCT_SEARCH_ENDPOINT";

pub const DEFAULT_SEARCH_ENDPOINT: &str = "http://localhost:8000/search";
