//! Shared UI components.

pub mod error_boundary;
pub mod navbar;
pub mod suspend_boundary;
pub mod product_search;
