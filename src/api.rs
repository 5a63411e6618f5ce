use crate::binding::{Dashboard, InputValue, OutputId, OutputView};
use crate::catalog::{site_options, SiteOption};
use crate::config::Config;
use crate::dataset::{load_dataset, PayloadBounds};
use crate::error::DashResult;
use crate::filter::{FilterState, RangeControl};
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;
use tracing::warn;

/// One republished chart, as sent to the host.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OutputUpdate {
    pub output: OutputId,
    pub title: String,
    pub view: OutputView,
}

impl From<(OutputId, OutputView)> for OutputUpdate {
    fn from((output, view): (OutputId, OutputView)) -> Self {
        Self {
            output,
            title: view.title(),
            view,
        }
    }
}

/// Everything a host needs to build its widgets at startup.
#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct DashboardLayout {
    pub title: String,
    pub site_placeholder: String,
    pub site_options: Vec<SiteOption>,
    pub payload_bounds: PayloadBounds,
    pub range_control: RangeControl,
    pub state: FilterState,
    pub outputs: Vec<OutputUpdate>,
}

/// Messages of the JSON-lines host protocol.
#[derive(Serialize, Debug, Clone)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostMessage {
    Layout(DashboardLayout),
    Update { outputs: Vec<OutputUpdate> },
    Error { message: String },
}

/// Loads the launch table and brings the binding layer live.
pub fn open_dashboard<P: AsRef<Path>>(data_path: P) -> DashResult<Dashboard> {
    let dataset = load_dataset(data_path)?;
    if dataset.is_empty() {
        warn!("⚠️  Launch table has no usable rows; charts will be empty.");
    }
    Ok(Dashboard::new(Arc::new(dataset)))
}

pub fn describe_layout(dashboard: &Dashboard, config: &Config) -> DashResult<DashboardLayout> {
    let bounds = dashboard.dataset().bounds();
    Ok(DashboardLayout {
        title: config.layout.dashboard_title.clone(),
        site_placeholder: config.layout.site_placeholder.clone(),
        site_options: site_options(dashboard.dataset()),
        payload_bounds: bounds,
        range_control: RangeControl::from_config(&config.slider, bounds)?,
        state: dashboard.state().clone(),
        outputs: dashboard.snapshot().into_iter().map(OutputUpdate::from).collect(),
    })
}

/// Parses one JSON event and feeds it through the binding layer.
pub fn apply_event(dashboard: &mut Dashboard, line: &str) -> DashResult<Vec<OutputUpdate>> {
    let event: InputValue = serde_json::from_str(line)?;
    Ok(dashboard
        .on_input_changed(event)
        .into_iter()
        .map(OutputUpdate::from)
        .collect())
}

/// Like [`apply_event`], but never fails: a bad line becomes an error message.
pub fn handle_host_line(dashboard: &mut Dashboard, line: &str) -> HostMessage {
    match apply_event(dashboard, line) {
        Ok(outputs) => HostMessage::Update { outputs },
        Err(e) => {
            warn!("Rejected host event: {}", e);
            HostMessage::Error {
                message: e.to_string(),
            }
        }
    }
}
