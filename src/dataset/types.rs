use crate::filter::{PayloadRange, ALL_SITES};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use tracing::warn;

/// Binary launch result. Summing `class()` over records yields the success count.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    pub fn from_class(class: u8) -> Option<Self> {
        match class {
            0 => Some(Self::Failure),
            1 => Some(Self::Success),
            _ => None,
        }
    }

    #[inline(always)]
    pub fn class(&self) -> u8 {
        match self {
            Self::Failure => 0,
            Self::Success => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchRecord {
    pub site: String,
    pub payload_mass_kg: f64,
    pub booster_category: String,
    pub outcome: Outcome,
}

impl LaunchRecord {
    pub fn new(
        site: impl Into<String>,
        payload_mass_kg: f64,
        booster_category: impl Into<String>,
        outcome: Outcome,
    ) -> Self {
        Self {
            site: site.into(),
            payload_mass_kg,
            booster_category: booster_category.into(),
            outcome,
        }
    }
}

/// Observed payload extremes, fixed at load time.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PayloadBounds {
    pub min: f64,
    pub max: f64,
}

impl PayloadBounds {
    fn observe(records: &[LaunchRecord]) -> Self {
        let mut iter = records.iter().map(|r| r.payload_mass_kg);
        let Some(first) = iter.next() else {
            return Self::default();
        };
        let (min, max) = iter.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));
        Self { min, max }
    }

    /// Seed for the range control: `(floor(min), ceil(max))`.
    pub fn initial_range(&self) -> PayloadRange {
        PayloadRange::new(self.min.floor(), self.max.ceil())
    }
}

/// Ordered, immutable launch table. Shared read-only behind an `Arc` once
/// the dashboard is live.
///
/// No record carries the reserved `ALL` site name; such records are dropped
/// on construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<LaunchRecord>,
    bounds: PayloadBounds,
}

impl Dataset {
    pub fn new(mut records: Vec<LaunchRecord>) -> Self {
        let before = records.len();
        records.retain(|r| r.site != ALL_SITES);
        if records.len() < before {
            warn!(
                "Dropped {} launches using the reserved site name '{}'.",
                before - records.len(),
                ALL_SITES
            );
        }
        let bounds = PayloadBounds::observe(&records);
        Self { records, bounds }
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LaunchRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn bounds(&self) -> PayloadBounds {
        self.bounds
    }

    pub fn total_successes(&self) -> u64 {
        self.records.iter().map(|r| r.outcome.class() as u64).sum()
    }
}

impl FromIterator<LaunchRecord> for Dataset {
    fn from_iter<I: IntoIterator<Item = LaunchRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a LaunchRecord;
    type IntoIter = std::slice::Iter<'a, LaunchRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
