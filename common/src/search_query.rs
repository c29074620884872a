//! Product search form state and the request built from it.

use serde::{Deserialize, Serialize};

use crate::{
    price_text::{parse_price, parse_price_text, price_wire, PriceText},
    search_sources::{DiscussionSite, Retailer},
    source_selection::{RetailerSelection, SiteSelection, SourceSelection},
};


/// Everything the user has typed or ticked so far. Nothing here is validated.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductSearchForm {
    pub category: String,
    pub min_price_text: String,
    pub max_price_text: String,
    pub sites: SiteSelection,
    pub retailers: RetailerSelection,
}

impl ProductSearchForm {
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    pub fn set_min_price_text(&mut self, text: impl Into<String>) {
        self.min_price_text = text.into();
    }

    pub fn set_max_price_text(&mut self, text: impl Into<String>) {
        self.max_price_text = text.into();
    }

    pub fn set_site(&mut self, site: DiscussionSite, checked: bool) {
        self.sites.set_selected(site, checked);
    }

    pub fn set_retailer(&mut self, retailer: Retailer, checked: bool) {
        self.retailers.set_selected(retailer, checked);
    }

    /// Builds the request payload. Never fails: unparsable prices become `NaN`.
    pub fn to_request(&self) -> ProductSearchRequest {
        ProductSearchRequest {
            product_category: self.category.clone(),
            min_price: parse_price(&self.min_price_text),
            max_price: parse_price(&self.max_price_text),
            sites: self.sites.selected_sources(),
            retailers: self.retailers.selected_sources(),
        }
    }

    /// Names of the price fields whose text has no numeric prefix.
    pub fn unparsable_price_fields(&self) -> Vec<&'static str> {
        [("min_price", &self.min_price_text), ("max_price", &self.max_price_text)]
            .into_iter()
            .filter(|(_, text)| parse_price_text(text) == PriceText::Unparsable)
            .map(|(name, _)| name)
            .collect()
    }
}

/// Body of the POST sent to the search endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSearchRequest {
    pub product_category: String,
    #[serde(with = "price_wire")]
    pub min_price: f64,
    #[serde(with = "price_wire")]
    pub max_price: f64,
    pub sites: Vec<DiscussionSite>,
    pub retailers: Vec<Retailer>,
}

impl ProductSearchRequest {
    /// Equality that treats two `NaN` prices as the same value.
    pub fn same_payload(&self, other: &Self) -> bool {
        fn same_price(a: f64, b: f64) -> bool {
            a == b || (a.is_nan() && b.is_nan())
        }
        self.product_category == other.product_category
            && same_price(self.min_price, other.min_price)
            && same_price(self.max_price, other.max_price)
            && self.sites == other.sites
            && self.retailers == other.retailers
    }
}
