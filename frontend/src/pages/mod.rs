//! Routed pages.

pub mod home_page;
