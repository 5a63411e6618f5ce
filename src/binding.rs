use crate::aggregate::{compute_outcome_view, OutcomeView};
use crate::dataset::Dataset;
use crate::filter::{FilterState, PayloadRange, SiteSelection};
use crate::scatter::{compute_scatter_view, ScatterView};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::{debug, info};

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
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum InputId {
    Site,
    Payload,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum OutputId {
    OutcomeChart,
    ScatterChart,
}

/// A change event from one of the two controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "input", content = "value", rename_all = "snake_case")]
pub enum InputValue {
    Site(SiteSelection),
    Payload(PayloadRange),
}

impl InputValue {
    pub fn id(&self) -> InputId {
        match self {
            Self::Site(_) => InputId::Site,
            Self::Payload(_) => InputId::Payload,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OutputView {
    Outcome(OutcomeView),
    Scatter(ScatterView),
}

impl OutputView {
    pub fn title(&self) -> String {
        match self {
            Self::Outcome(v) => v.title(),
            Self::Scatter(v) => v.title(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Outcome(v) => v.len(),
            Self::Scatter(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub type ComputeFn = fn(&Dataset, &FilterState) -> OutputView;

/// Declares which inputs an output reads and how it is computed.
#[derive(Clone, Copy)]
pub struct Binding {
    pub output: OutputId,
    pub inputs: &'static [InputId],
    pub compute: ComputeFn,
}

impl Binding {
    pub fn depends_on(&self, input: InputId) -> bool {
        self.inputs.contains(&input)
    }
}

fn outcome_chart(dataset: &Dataset, state: &FilterState) -> OutputView {
    OutputView::Outcome(compute_outcome_view(dataset, &state.site))
}

fn scatter_chart(dataset: &Dataset, state: &FilterState) -> OutputView {
    OutputView::Scatter(compute_scatter_view(dataset, &state.site, &state.payload))
}

/// The dependency table. Order here is republish order.
pub static BINDINGS: [Binding; 2] = [
    Binding {
        output: OutputId::OutcomeChart,
        inputs: &[InputId::Site],
        compute: outcome_chart,
    },
    Binding {
        output: OutputId::ScatterChart,
        inputs: &[InputId::Site, InputId::Payload],
        compute: scatter_chart,
    },
];

pub fn binding_for(output: OutputId) -> &'static Binding {
    match output {
        OutputId::OutcomeChart => &BINDINGS[0],
        OutputId::ScatterChart => &BINDINGS[1],
    }
}

/// Outputs that must be recomputed when `input` is written, in table order.
pub fn affected_outputs(input: InputId) -> Vec<OutputId> {
    BINDINGS
        .iter()
        .filter(|b| b.depends_on(input))
        .map(|b| b.output)
        .collect()
}

/// Live dashboard: the shared dataset, the current filter state and the
/// views last published for each chart.
///
/// Each call to [`Dashboard::on_input_changed`] holds `&mut self` until every
/// dependent output is republished, so callers only ever see the idle state.
#[derive(Debug, Clone)]
pub struct Dashboard {
    dataset: Arc<Dataset>,
    state: FilterState,
    outcome: OutcomeView,
    scatter: ScatterView,
}

impl Dashboard {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        let state = FilterState::initial(&dataset);
        let outcome = compute_outcome_view(&dataset, &state.site);
        let scatter = compute_scatter_view(&dataset, &state.site, &state.payload);
        info!(
            "Dashboard live: {} launches, initial payload range {}",
            dataset.len(),
            state.payload
        );
        Self {
            dataset,
            state,
            outcome,
            scatter,
        }
    }

    pub fn dataset(&self) -> &Arc<Dataset> {
        &self.dataset
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn outcome_view(&self) -> &OutcomeView {
        &self.outcome
    }

    pub fn scatter_view(&self) -> &ScatterView {
        &self.scatter
    }

    pub fn published(&self, output: OutputId) -> OutputView {
        match output {
            OutputId::OutcomeChart => OutputView::Outcome(self.outcome.clone()),
            OutputId::ScatterChart => OutputView::Scatter(self.scatter.clone()),
        }
    }

    /// Every published output, in declaration order.
    pub fn snapshot(&self) -> Vec<(OutputId, OutputView)> {
        OutputId::iter()
            .map(|id| (id, self.published(id)))
            .collect()
    }

    /// Applies one input write and returns the freshly published views of
    /// every output depending on it. A write always recomputes, even when
    /// the value is unchanged.
    pub fn on_input_changed(&mut self, value: InputValue) -> Vec<(OutputId, OutputView)> {
        let input = value.id();
        match value {
            InputValue::Site(site) => {
                info!("Input '{}' <- {}", input, site);
                self.state.site = site;
            }
            InputValue::Payload(range) => {
                info!("Input '{}' <- {}", input, range);
                self.state.payload = range;
            }
        }

        let mut updates = Vec::new();
        for binding in BINDINGS.iter().filter(|b| b.depends_on(input)) {
            let view = (binding.compute)(self.dataset.as_ref(), &self.state);
            debug!("Recomputed '{}': {} entries", binding.output, view.len());
            self.publish(view.clone());
            updates.push((binding.output, view));
        }

        updates
    }

    pub fn select_site(&mut self, site: SiteSelection) -> Vec<(OutputId, OutputView)> {
        self.on_input_changed(InputValue::Site(site))
    }

    pub fn set_payload_range(&mut self, range: PayloadRange) -> Vec<(OutputId, OutputView)> {
        self.on_input_changed(InputValue::Payload(range))
    }

    fn publish(&mut self, view: OutputView) {
        match view {
            OutputView::Outcome(v) => self.outcome = v,
            OutputView::Scatter(v) => self.scatter = v,
        }
    }
}
