//! Client API calls.

pub mod search_api;
