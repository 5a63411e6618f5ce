use crate::config::SliderParams;
use crate::dataset::{Dataset, PayloadBounds};
use crate::error::{DashError, DashResult};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

pub const ALL_SITES: &str = "ALL";

/// Value of the site control. `"ALL"` is the synthetic every-site choice;
/// any other string names a site, known or not.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    pub fn site(name: impl Into<String>) -> Self {
        let name = name.into();
        if name == ALL_SITES {
            Self::All
        } else {
            Self::Site(name)
        }
    }

    #[inline(always)]
    pub fn matches(&self, site: &str) -> bool {
        match self {
            Self::All => true,
            Self::Site(name) => name == site,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_SITES,
            Self::Site(name) => name,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SiteSelection {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::site(s.trim()))
    }
}

impl From<String> for SiteSelection {
    fn from(s: String) -> Self {
        Self::site(s)
    }
}

impl From<SiteSelection> for String {
    fn from(sel: SiteSelection) -> Self {
        match sel {
            SiteSelection::All => ALL_SITES.to_string(),
            SiteSelection::Site(name) => name,
        }
    }
}

/// Inclusive payload interval in kg. An inverted pair is legal and matches
/// nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    #[inline(always)]
    pub fn contains(&self, payload_kg: f64) -> bool {
        self.low <= payload_kg && payload_kg <= self.high
    }

    pub fn is_inverted(&self) -> bool {
        self.low > self.high
    }
}

impl fmt::Display for PayloadRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}

/// Parses `"low,high"` (whitespace tolerated).
impl FromStr for PayloadRange {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 2 {
            return Err(DashError::InvalidRange(format!(
                "'{}' must be written as low,high",
                s
            )));
        }
        let parse = |p: &str| {
            p.parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| DashError::InvalidRange(format!("bad bound '{}'", p)))
        };
        Ok(Self::new(parse(parts[0])?, parse(parts[1])?))
    }
}

impl From<(f64, f64)> for PayloadRange {
    fn from((low, high): (f64, f64)) -> Self {
        Self::new(low, high)
    }
}

impl From<PayloadRange> for (f64, f64) {
    fn from(r: PayloadRange) -> Self {
        (r.low, r.high)
    }
}

/// The whole dashboard state. Only the binding layer writes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub site: SiteSelection,
    pub payload: PayloadRange,
}

impl FilterState {
    pub fn initial(dataset: &Dataset) -> Self {
        Self {
            site: SiteSelection::All,
            payload: dataset.bounds().initial_range(),
        }
    }
}

/// Configuration handed to the host's payload range selector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RangeControl {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub marks: Vec<f64>,
    pub initial_value: PayloadRange,
}

impl RangeControl {
    /// The control's extent is the configured slider widened, if needed, to
    /// cover the observed payload bounds.
    pub fn from_config(params: &SliderParams, bounds: PayloadBounds) -> DashResult<Self> {
        params.validate()?;
        let initial_value = bounds.initial_range();
        Ok(Self {
            min: params.slider_min.min(initial_value.low),
            max: params.slider_max.max(initial_value.high),
            step: params.slider_step,
            marks: params.get_marks()?,
            initial_value,
        })
    }
}
