use crate::dataset::Dataset;
use crate::filter::ALL_SITES;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const ALL_SITES_LABEL: &str = "All Sites";

/// One choice of the site selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteOption {
    pub label: String,
    pub value: String,
}

impl SiteOption {
    pub fn all_sites() -> Self {
        Self {
            label: ALL_SITES_LABEL.to_string(),
            value: ALL_SITES.to_string(),
        }
    }

    pub fn for_site(site: &str) -> Self {
        Self {
            label: site.to_string(),
            value: site.to_string(),
        }
    }
}

/// Distinct sites in first-occurrence order. Never contains the reserved
/// `ALL` token.
pub fn list_sites(dataset: &Dataset) -> Vec<String> {
    let mut seen = HashSet::new();
    dataset
        .iter()
        .filter(|r| r.site != ALL_SITES && seen.insert(r.site.as_str()))
        .map(|r| r.site.clone())
        .collect()
}

/// Selector choices: the synthetic entry followed by every site.
pub fn site_options(dataset: &Dataset) -> Vec<SiteOption> {
    std::iter::once(SiteOption::all_sites())
        .chain(list_sites(dataset).iter().map(|s| SiteOption::for_site(s)))
        .collect()
}

/// Case-insensitive label search backing the searchable dropdown.
pub fn search_sites(options: &[SiteOption], query: &str) -> Vec<SiteOption> {
    let needle = query.trim().to_lowercase();
    options
        .iter()
        .filter(|opt| needle.is_empty() || opt.label.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
