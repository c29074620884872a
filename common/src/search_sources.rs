//! Closed sets of discussion sites and retailers a product search can target.

use serde::{Deserialize, Serialize};


/// A member of one of the fixed source sets.
///
/// `ALL` lists every member in canonical order; request source lists are always
/// emitted in that order.
pub trait SearchSource: Copy + Eq + 'static {
    const ALL: &'static [Self];

    /// Identifier sent to the search endpoint.
    fn wire_id(self) -> &'static str;

    /// Human-facing label. Never sent on the wire.
    fn display_label(self) -> &'static str {
        self.wire_id()
    }

    fn from_wire_id(id: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.wire_id() == id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DiscussionSite {
    #[serde(rename = "reddit")]
    Reddit,
    #[serde(rename = "twitter")]
    Twitter,
    #[serde(rename = "discord")]
    Discord,
}

impl SearchSource for DiscussionSite {
    const ALL: &'static [Self] = &[Self::Reddit, Self::Twitter, Self::Discord];

    fn wire_id(self) -> &'static str {
        match self {
            Self::Reddit => "reddit",
            Self::Twitter => "twitter",
            Self::Discord => "discord",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Retailer {
    #[serde(rename = "amazon")]
    Amazon,
    #[serde(rename = "walmart")]
    Walmart,
    #[serde(rename = "bestBuy")]
    BestBuy,
}

impl SearchSource for Retailer {
    const ALL: &'static [Self] = &[Self::Amazon, Self::Walmart, Self::BestBuy];

    fn wire_id(self) -> &'static str {
        match self {
            Self::Amazon => "amazon",
            Self::Walmart => "walmart",
            Self::BestBuy => "bestBuy",
        }
    }

    fn display_label(self) -> &'static str {
        match self {
            Self::BestBuy => "Best Buy",
            other => other.wire_id(),
        }
    }
}
