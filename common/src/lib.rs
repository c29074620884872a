//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod search_sources;
pub mod source_selection;
pub mod price_text;
pub mod search_query;
pub mod search_result;
pub mod search_error;
pub mod search_const;
pub mod submission;
