//! Client API calls for the product search endpoint.

use common::{search_error::RequestFailed, search_query::ProductSearchRequest, search_result::SearchResponse};
use dioxus::prelude::*;


#[server]
pub async fn submit_product_search(request: ProductSearchRequest) -> Result<SearchResponse, ServerFnError> {
    let x = backend::api::product_search::submit_product_search_from_env(&request).await;
    match x {
        Ok(Ok(response)) => Ok(response),
        Ok(Err(failed)) => Err(ServerFnError::ServerError {
            message: failed.to_string(),
            code: 502,
            details: serde_json::to_value(&failed).ok(),
        }),
        Err(e) => Err(ServerFnError::ServerError { message: format!("{e:#}"), code: 500, details: None }),
    }
}

/// Runs one search round trip and folds every failure into [`RequestFailed`].
pub async fn run_product_search(request: ProductSearchRequest) -> Result<SearchResponse, RequestFailed> {
    submit_product_search(request).await.map_err(request_failed_from_server_error)
}

fn request_failed_from_server_error(e: ServerFnError) -> RequestFailed {
    if let ServerFnError::ServerError { details: Some(details), .. } = &e {
        if let Ok(failed) = serde_json::from_value::<RequestFailed>(details.clone()) {
            return failed;
        }
    }
    RequestFailed::Transport(e.to_string())
}
