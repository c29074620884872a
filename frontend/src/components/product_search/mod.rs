//! Product search form, source toggles and result view.

pub mod product_search_form;
pub mod source_toggle;
pub mod search_results_view;
