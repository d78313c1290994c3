use serde::Deserialize;

use crate::Offering;

/// Category value meaning "no category constraint".
pub const SHOW_ALL: &str = "All Pujas";

pub static CATEGORIES: [&str; 7] = [
    SHOW_ALL,
    "Health",
    "Wealth",
    "Peace",
    "Protection",
    "Success",
    "Family",
];

pub static TRENDING: [&str; 5] = [
    "Navratri Special",
    "Shivratri",
    "Diwali",
    "Monthly Puja",
    "Daily Rituals",
];

pub static REGIONS: [&str; 5] = [
    "North India",
    "South India",
    "East India",
    "West India",
    "Pan India",
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FilterState {
    #[serde(default, rename = "q")]
    pub search: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub trending: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
}

fn facet(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl FilterState {
    pub fn cleared() -> Self {
        Self::default()
    }

    pub fn category(&self) -> Option<&str> {
        facet(&self.category).filter(|c| *c != SHOW_ALL)
    }

    pub fn trending(&self) -> Option<&str> {
        facet(&self.trending)
    }

    pub fn region(&self) -> Option<&str> {
        facet(&self.region)
    }

    /// Search text without surrounding whitespace; blank means unset.
    pub fn search(&self) -> &str {
        self.search.trim()
    }

    pub fn has_active_filters(&self) -> bool {
        self.category().is_some()
            || self.trending().is_some()
            || self.region().is_some()
            || !self.search().is_empty()
    }

    pub fn matches(&self, offering: &Offering) -> bool {
        let search = self.search().to_lowercase();

        let matches_search = search.is_empty()
            || offering.title.to_lowercase().contains(&search)
            || offering.description.to_lowercase().contains(&search);

        matches_search
            && self.category().is_none_or(|c| offering.category == c)
            && self.trending().is_none_or(|t| offering.trending == Some(t))
            && self.region().is_none_or(|r| offering.region == r)
    }
}

/// Offerings matching every set facet, in catalog order.
pub fn filter<'a>(offerings: &'a [Offering], state: &FilterState) -> Vec<&'a Offering> {
    offerings.iter().filter(|o| state.matches(o)).collect()
}
