use crate::dataset::{Dataset, Outcome};
use crate::filter::{PayloadRange, SiteSelection};
use serde::{Serialize, Serializer};
use tracing::debug;

/// One mark on the payload-vs-outcome chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    /// Charted on the y axis as the 0/1 class.
    #[serde(serialize_with = "serialize_class")]
    pub outcome: Outcome,
    pub booster_category: String,
}

fn serialize_class<S: Serializer>(outcome: &Outcome, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u8(outcome.class())
}

/// All marks for one booster category (one colour on the chart).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySeries {
    pub category: String,
    pub points: Vec<ScatterPoint>,
    pub successes: usize,
    pub failures: usize,
}

/// Rows surviving the site and payload filters, in dataset order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ScatterView {
    points: Vec<ScatterPoint>,
}

impl ScatterView {
    pub fn points(&self) -> &[ScatterPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points grouped by booster category, categories in first-seen order.
    pub fn by_category(&self) -> Vec<CategorySeries> {
        let mut series: Vec<CategorySeries> = Vec::new();
        for p in &self.points {
            let idx = match series.iter().position(|s| s.category == p.booster_category) {
                Some(i) => i,
                None => {
                    series.push(CategorySeries {
                        category: p.booster_category.clone(),
                        points: Vec::new(),
                        successes: 0,
                        failures: 0,
                    });
                    series.len() - 1
                }
            };
            let s = &mut series[idx];
            match p.outcome {
                Outcome::Success => s.successes += 1,
                Outcome::Failure => s.failures += 1,
            }
            s.points.push(p.clone());
        }
        series
    }

    pub fn title(&self) -> String {
        "Correlation between Payload and Success".to_string()
    }
}

pub fn compute_scatter_view(
    dataset: &Dataset,
    selection: &SiteSelection,
    range: &PayloadRange,
) -> ScatterView {
    if range.is_inverted() {
        debug!("Inverted payload range {}; scatter is empty", range);
        return ScatterView::default();
    }

    let points = dataset
        .iter()
        .filter(|r| range.contains(r.payload_mass_kg) && selection.matches(&r.site))
        .map(|r| ScatterPoint {
            payload_mass_kg: r.payload_mass_kg,
            outcome: r.outcome,
            booster_category: r.booster_category.clone(),
        })
        .collect();

    ScatterView { points }
}
