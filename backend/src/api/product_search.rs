//! Single-shot POST of a product search to the search service.

use common::{
    search_error::RequestFailed,
    search_query::ProductSearchRequest,
    search_result::{decode_search_response, SearchResponse},
};
use reqwest::header::CONTENT_TYPE;

use crate::config::SearchEndpointConfig;


/// Sends `request` once. No retry and no local timeout: the call waits for the
/// service or for the connection to fail.
pub async fn submit_product_search(config: &SearchEndpointConfig, request: &ProductSearchRequest) -> Result<SearchResponse, RequestFailed> {
    let body = serde_json::to_vec(request).map_err(|e| RequestFailed::Transport(format!("could not encode request: {e}")))?;
    tracing::info!("Submitting product search to {}: {:?}", config.url, request);

    let client = reqwest::Client::new();
    let response = client.post(config.url.clone())
        .header(CONTENT_TYPE, "application/json")
        .body(body)
        .send()
        .await
        .map_err(|e| {
            tracing::error!("Search request failed: {e}");
            RequestFailed::Transport(e.to_string())
        })?;
    let status = response.status().as_u16();
    tracing::info!("Response received: {}", status);

    let body = response.text().await.map_err(|e| RequestFailed::Transport(e.to_string()))?;
    let decoded = decode_search_response(status, &body);
    if let Err(e) = &decoded {
        tracing::error!("Search response rejected: {e}");
    }
    decoded
}

/// Same as [`submit_product_search`], with the endpoint taken from the environment.
pub async fn submit_product_search_from_env(request: &ProductSearchRequest) -> anyhow::Result<Result<SearchResponse, RequestFailed>> {
    let config = SearchEndpointConfig::from_env()?;
    Ok(submit_product_search(&config, request).await)
}
