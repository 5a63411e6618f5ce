use launchdash::aggregate::compute_outcome_view;
use launchdash::binding::{
    affected_outputs, Dashboard, InputId, InputValue, OutputId, OutputView, BINDINGS,
};
use launchdash::dataset::{Dataset, LaunchRecord, Outcome};
use launchdash::filter::{PayloadRange, SiteSelection};
use launchdash::scatter::compute_scatter_view;
use std::sync::Arc;

fn dashboard() -> Dashboard {
    Dashboard::new(Arc::new(Dataset::new(vec![
        LaunchRecord::new("A", 500.0, "v1", Outcome::Success),
        LaunchRecord::new("A", 1500.0, "v1", Outcome::Failure),
        LaunchRecord::new("B", 800.7, "v2", Outcome::Success),
    ])))
}

fn ids(updates: &[(OutputId, OutputView)]) -> Vec<OutputId> {
    updates.iter().map(|(id, _)| *id).collect()
}

// --- INITIAL STATE ---

#[test]
fn test_initial_state_is_all_sites_and_dataset_bounds() {
    let dash = dashboard();
    assert_eq!(dash.state().site, SiteSelection::All);
    assert_eq!(dash.state().payload, PayloadRange::new(500.0, 1500.0));
}

#[test]
fn test_initial_outputs_are_computed_once_at_startup() {
    let dash = dashboard();
    let ds = dash.dataset().clone();
    assert_eq!(*dash.outcome_view(), compute_outcome_view(&ds, &SiteSelection::All));
    assert_eq!(dash.scatter_view().len(), 3);
    assert_eq!(ids(&dash.snapshot()), vec![OutputId::OutcomeChart, OutputId::ScatterChart]);
}

#[test]
fn test_initial_range_covers_fractional_extremes() {
    let dash = Dashboard::new(Arc::new(Dataset::new(vec![
        LaunchRecord::new("A", 362.4, "v1", Outcome::Success),
        LaunchRecord::new("A", 9600.6, "v1", Outcome::Success),
    ])));
    assert_eq!(dash.state().payload, PayloadRange::new(362.0, 9601.0));
    assert_eq!(dash.scatter_view().len(), 2);
}

// --- UPDATE RULES ---

#[test]
fn test_site_write_recomputes_both_outputs() {
    let mut dash = dashboard();
    let updates = dash.on_input_changed(InputValue::Site(SiteSelection::site("A")));

    assert_eq!(ids(&updates), vec![OutputId::OutcomeChart, OutputId::ScatterChart]);
    assert_eq!(dash.outcome_view().title(), "Success/Failures for A");
    assert_eq!(dash.scatter_view().len(), 2);
}

#[test]
fn test_payload_write_recomputes_only_scatter() {
    let mut dash = dashboard();
    let outcome_before = dash.outcome_view().clone();

    let updates = dash.set_payload_range(PayloadRange::new(0.0, 1000.0));

    assert_eq!(ids(&updates), vec![OutputId::ScatterChart]);
    assert_eq!(*dash.outcome_view(), outcome_before);
    assert_eq!(dash.scatter_view().len(), 2);
}

#[test]
fn test_returned_views_match_published_views() {
    let mut dash = dashboard();
    for (id, view) in dash.select_site(SiteSelection::site("B")) {
        assert_eq!(dash.published(id), view);
    }
}

#[test]
fn test_outputs_never_stale_after_sequence_of_events() {
    let mut dash = dashboard();
    dash.set_payload_range(PayloadRange::new(0.0, 1000.0));
    dash.select_site(SiteSelection::site("A"));
    dash.set_payload_range(PayloadRange::new(1000.0, 2000.0));
    dash.select_site(SiteSelection::All);

    let ds = dash.dataset().clone();
    let state = dash.state().clone();
    assert_eq!(state.payload, PayloadRange::new(1000.0, 2000.0));
    assert_eq!(*dash.outcome_view(), compute_outcome_view(&ds, &state.site));
    assert_eq!(
        *dash.scatter_view(),
        compute_scatter_view(&ds, &state.site, &state.payload)
    );
    assert_eq!(dash.scatter_view().len(), 1);
}

#[test]
fn test_rewriting_same_value_still_republishes() {
    let mut dash = dashboard();
    let first = dash.select_site(SiteSelection::All);
    let second = dash.select_site(SiteSelection::All);
    assert_eq!(first, second);
    assert_eq!(second.len(), 2);
}

#[test]
fn test_unknown_site_and_inverted_range_degrade_to_empty() {
    let mut dash = dashboard();
    let updates = dash.select_site(SiteSelection::site("Boca Chica"));
    assert!(updates.iter().all(|(_, v)| v.is_empty()));

    dash.select_site(SiteSelection::All);
    let updates = dash.set_payload_range(PayloadRange::new(900.0, 100.0));
    assert!(updates[0].1.is_empty());
}

#[test]
fn test_empty_dataset_dashboard() {
    let mut dash = Dashboard::new(Arc::new(Dataset::default()));
    assert_eq!(dash.state().payload, PayloadRange::new(0.0, 0.0));
    assert!(dash.outcome_view().is_empty());
    assert!(dash.scatter_view().is_empty());

    let updates = dash.select_site(SiteSelection::site("A"));
    assert_eq!(updates.len(), 2);
    assert!(updates.iter().all(|(_, v)| v.is_empty()));
}

// --- DEPENDENCY TABLE ---

#[test]
fn test_dependency_table_declarations() {
    assert_eq!(BINDINGS.len(), 2);
    assert_eq!(BINDINGS[0].output, OutputId::OutcomeChart);
    assert_eq!(BINDINGS[0].inputs, &[InputId::Site]);
    assert_eq!(BINDINGS[1].output, OutputId::ScatterChart);
    assert_eq!(BINDINGS[1].inputs, &[InputId::Site, InputId::Payload]);

    assert_eq!(affected_outputs(InputId::Payload), vec![OutputId::ScatterChart]);
}

#[test]
fn test_ids_have_stable_names() {
    assert_eq!(OutputId::OutcomeChart.to_string(), "outcome_chart");
    assert_eq!("scatter_chart".parse::<OutputId>().unwrap(), OutputId::ScatterChart);
    assert_eq!(InputId::Payload.to_string(), "payload");
}
