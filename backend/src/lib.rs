//! Server-side plumbing for the product search form: endpoint configuration and
//! the outbound call to the search service.

pub mod config;
pub mod api;
