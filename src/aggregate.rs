use crate::dataset::{Dataset, Outcome};
use crate::filter::SiteSelection;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteSuccesses {
    pub site: String,
    pub successes: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutcomeCount {
    pub outcome: Outcome,
    pub count: u64,
}

/// Data behind the outcome chart. The shape depends on the site selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OutcomeView {
    /// Success count per site, sites in first-seen order. Not normalized by
    /// launch count: each slice is the site's share of all successes.
    AllSites { entries: Vec<SiteSuccesses> },
    /// Launch count per outcome present at one site, largest first. Holds
    /// one or two entries, or none for an unknown site.
    SingleSite {
        site: String,
        entries: Vec<OutcomeCount>,
    },
}

impl OutcomeView {
    /// (label, count) pairs in chart order.
    pub fn entries(&self) -> Vec<(String, u64)> {
        match self {
            Self::AllSites { entries } => entries
                .iter()
                .map(|e| (e.site.clone(), e.successes))
                .collect(),
            Self::SingleSite { entries, .. } => entries
                .iter()
                .map(|e| (e.outcome.to_string(), e.count))
                .collect(),
        }
    }

    pub fn count_for(&self, label: &str) -> Option<u64> {
        self.entries()
            .into_iter()
            .find(|(l, _)| l == label)
            .map(|(_, c)| c)
    }

    pub fn len(&self) -> usize {
        match self {
            Self::AllSites { entries } => entries.len(),
            Self::SingleSite { entries, .. } => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn total(&self) -> u64 {
        self.entries().iter().map(|(_, c)| c).sum()
    }

    /// Each entry's fraction of the total; empty when the total is zero.
    pub fn shares(&self) -> Vec<(String, f64)> {
        let total = self.total();
        if total == 0 {
            return Vec::new();
        }
        self.entries()
            .into_iter()
            .map(|(label, c)| (label, c as f64 / total as f64))
            .collect()
    }

    pub fn title(&self) -> String {
        match self {
            Self::AllSites { .. } => "Total success launches".to_string(),
            Self::SingleSite { site, .. } => format!("Success/Failures for {}", site),
        }
    }
}

pub fn compute_outcome_view(dataset: &Dataset, selection: &SiteSelection) -> OutcomeView {
    match selection {
        SiteSelection::All => OutcomeView::AllSites {
            entries: successes_by_site(dataset),
        },
        SiteSelection::Site(site) => OutcomeView::SingleSite {
            site: site.clone(),
            entries: outcome_counts(dataset, site),
        },
    }
}

fn successes_by_site(dataset: &Dataset) -> Vec<SiteSuccesses> {
    let mut slot: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<SiteSuccesses> = Vec::new();

    for rec in dataset {
        let idx = *slot.entry(rec.site.as_str()).or_insert_with(|| {
            groups.push(SiteSuccesses {
                site: rec.site.clone(),
                successes: 0,
            });
            groups.len() - 1
        });
        groups[idx].successes += rec.outcome.class() as u64;
    }

    groups
}

fn outcome_counts(dataset: &Dataset, site: &str) -> Vec<OutcomeCount> {
    let mut counts: Vec<OutcomeCount> = Vec::with_capacity(2);

    for rec in dataset.iter().filter(|r| r.site == site) {
        match counts.iter_mut().find(|c| c.outcome == rec.outcome) {
            Some(c) => c.count += 1,
            None => counts.push(OutcomeCount {
                outcome: rec.outcome,
                count: 1,
            }),
        }
    }

    // Stable: ties keep first-seen order.
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}
