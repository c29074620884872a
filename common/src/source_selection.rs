//! Fixed-shape checkbox state for the two source sets.

use serde::{Deserialize, Serialize};

use crate::search_sources::{DiscussionSite, Retailer, SearchSource};


/// Boolean "included" flag for every member of a closed source set.
pub trait SourceSelection {
    type Source: SearchSource;

    fn is_selected(&self, source: Self::Source) -> bool;

    /// Sets the flag to `checked`. Mirrors the new checkbox state; this is not a toggle.
    fn set_selected(&mut self, source: Self::Source, checked: bool);

    /// Selected members, in canonical order.
    fn selected_sources(&self) -> Vec<Self::Source> {
        Self::Source::ALL
            .iter()
            .copied()
            .filter(|s| self.is_selected(*s))
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SiteSelection {
    pub reddit: bool,
    pub twitter: bool,
    pub discord: bool,
}

impl SiteSelection {
    fn flag_mut(&mut self, site: DiscussionSite) -> &mut bool {
        match site {
            DiscussionSite::Reddit => &mut self.reddit,
            DiscussionSite::Twitter => &mut self.twitter,
            DiscussionSite::Discord => &mut self.discord,
        }
    }
}

impl SourceSelection for SiteSelection {
    type Source = DiscussionSite;

    fn is_selected(&self, source: DiscussionSite) -> bool {
        match source {
            DiscussionSite::Reddit => self.reddit,
            DiscussionSite::Twitter => self.twitter,
            DiscussionSite::Discord => self.discord,
        }
    }

    fn set_selected(&mut self, source: DiscussionSite, checked: bool) {
        *self.flag_mut(source) = checked;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RetailerSelection {
    pub amazon: bool,
    pub walmart: bool,
    pub best_buy: bool,
}

impl RetailerSelection {
    fn flag_mut(&mut self, retailer: Retailer) -> &mut bool {
        match retailer {
            Retailer::Amazon => &mut self.amazon,
            Retailer::Walmart => &mut self.walmart,
            Retailer::BestBuy => &mut self.best_buy,
        }
    }
}

impl SourceSelection for RetailerSelection {
    type Source = Retailer;

    fn is_selected(&self, source: Retailer) -> bool {
        match source {
            Retailer::Amazon => self.amazon,
            Retailer::Walmart => self.walmart,
            Retailer::BestBuy => self.best_buy,
        }
    }

    fn set_selected(&mut self, source: Retailer, checked: bool) {
        *self.flag_mut(source) = checked;
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_nothing_selected() {
        assert!(SiteSelection::default().selected_sources().is_empty());
        assert!(RetailerSelection::default().selected_sources().is_empty());
    }

    #[test]
    fn set_selected_touches_only_one_flag() {
        let mut sites = SiteSelection::default();
        sites.set_selected(DiscussionSite::Twitter, true);
        assert_eq!(sites, SiteSelection { reddit: false, twitter: true, discord: false });

        sites.set_selected(DiscussionSite::Twitter, false);
        assert_eq!(sites, SiteSelection::default());
    }

    #[test]
    fn repeated_set_is_idempotent() {
        let mut once = RetailerSelection::default();
        once.set_selected(Retailer::Walmart, true);
        let mut twice = once;
        twice.set_selected(Retailer::Walmart, true);
        assert_eq!(once, twice);
    }

    #[test]
    fn last_write_per_flag_wins() {
        let toggles = [
            (Retailer::BestBuy, true),
            (Retailer::Amazon, true),
            (Retailer::BestBuy, false),
            (Retailer::Walmart, true),
            (Retailer::Amazon, false),
            (Retailer::BestBuy, true),
        ];
        let mut selection = RetailerSelection::default();
        for (retailer, checked) in toggles {
            selection.set_selected(retailer, checked);
        }
        for retailer in Retailer::ALL.iter().copied() {
            let expected = toggles.iter().rev().find(|(r, _)| *r == retailer).map(|(_, c)| *c).unwrap_or(false);
            assert_eq!(selection.is_selected(retailer), expected, "{retailer:?}");
        }
    }

    #[test]
    fn selected_sources_follow_canonical_order() {
        let mut sites = SiteSelection::default();
        sites.set_selected(DiscussionSite::Discord, true);
        sites.set_selected(DiscussionSite::Reddit, true);
        assert_eq!(sites.selected_sources(), vec![DiscussionSite::Reddit, DiscussionSite::Discord]);

        let mut retailers = RetailerSelection::default();
        retailers.set_selected(Retailer::BestBuy, true);
        retailers.set_selected(Retailer::Walmart, true);
        retailers.set_selected(Retailer::Amazon, true);
        assert_eq!(retailers.selected_sources(), Retailer::ALL.to_vec());
    }
}
