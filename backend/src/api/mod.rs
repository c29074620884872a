//! Outbound search API calls.

pub mod product_search;
