//! Search responses and the slot holding the latest one.

use serde::{Deserialize, Serialize};

use crate::search_error::RequestFailed;


/// Whatever document the search endpoint returned. Its shape is not interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchResponse(pub serde_json::Value);

impl SearchResponse {
    /// Indented, human-readable rendering of the document.
    pub fn pretty(&self) -> String {
        serde_json::to_string_pretty(&self.0).unwrap_or_else(|_| self.0.to_string())
    }
}

/// Applies the endpoint's status and body rules: any 2xx status with a JSON body
/// is a response, everything else is a [`RequestFailed`].
pub fn decode_search_response(status: u16, body: &str) -> Result<SearchResponse, RequestFailed> {
    if !(200..300).contains(&status) {
        return Err(RequestFailed::Status { status, body: body.to_string() });
    }
    serde_json::from_str::<serde_json::Value>(body)
        .map(SearchResponse)
        .map_err(|e| RequestFailed::Decode(e.to_string()))
}

/// Latest successful response. Empty until the first success, and failures never clear it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchResultState {
    latest: Option<SearchResponse>,
}

impl SearchResultState {
    pub fn latest(&self) -> Option<&SearchResponse> {
        self.latest.as_ref()
    }

    /// Stores a successful response; a failure is handed back untouched for logging.
    pub fn apply(&mut self, outcome: Result<SearchResponse, RequestFailed>) -> Result<(), RequestFailed> {
        let response = outcome?;
        self.latest = Some(response);
        Ok(())
    }
}
