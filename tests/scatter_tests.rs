use launchdash::dataset::{Dataset, LaunchRecord, Outcome};
use launchdash::filter::{PayloadRange, SiteSelection};
use launchdash::scatter::compute_scatter_view;
use rstest::rstest;

fn scenario() -> Dataset {
    Dataset::new(vec![
        LaunchRecord::new("A", 500.0, "v1", Outcome::Success),
        LaunchRecord::new("A", 1500.0, "v1", Outcome::Failure),
        LaunchRecord::new("B", 800.0, "v2", Outcome::Success),
    ])
}

fn tuples(ds: &Dataset, sel: &SiteSelection, range: PayloadRange) -> Vec<(f64, u8, String)> {
    compute_scatter_view(ds, sel, &range)
        .points()
        .iter()
        .map(|p| (p.payload_mass_kg, p.outcome.class(), p.booster_category.clone()))
        .collect()
}

#[test]
fn test_scatter_all_sites_scenario() {
    let got = tuples(&scenario(), &SiteSelection::All, PayloadRange::new(0.0, 1000.0));
    assert_eq!(
        got,
        vec![(500.0, 1, "v1".to_string()), (800.0, 1, "v2".to_string())]
    );
}

#[test]
fn test_scatter_single_site_scenario() {
    let got = tuples(&scenario(), &SiteSelection::site("A"), PayloadRange::new(0.0, 1000.0));
    assert_eq!(got, vec![(500.0, 1, "v1".to_string())]);
}

#[rstest]
#[case(SiteSelection::All)]
#[case(SiteSelection::site("A"))]
#[case(SiteSelection::site("B"))]
fn test_scatter_out_of_bounds_range_is_empty(#[case] sel: SiteSelection) {
    let view = compute_scatter_view(&scenario(), &sel, &PayloadRange::new(2000.0, 3000.0));
    assert!(view.is_empty());
}

#[rstest]
#[case(500.0, 500.0, 1)]
#[case(500.0, 800.0, 2)]
#[case(800.0, 1500.0, 2)]
#[case(0.0, 499.99, 0)]
fn test_scatter_bounds_are_inclusive(#[case] low: f64, #[case] high: f64, #[case] expected: usize) {
    let view = compute_scatter_view(&scenario(), &SiteSelection::All, &PayloadRange::new(low, high));
    assert_eq!(view.len(), expected);
}

#[test]
fn test_scatter_inverted_range_is_empty() {
    let view = compute_scatter_view(
        &scenario(),
        &SiteSelection::All,
        &PayloadRange::new(1500.0, 500.0),
    );
    assert!(view.is_empty());
}

#[test]
fn test_scatter_unknown_site_is_empty() {
    let view = compute_scatter_view(
        &scenario(),
        &SiteSelection::site("C"),
        &PayloadRange::new(0.0, 1e6),
    );
    assert!(view.is_empty());
}

#[test]
fn test_scatter_preserves_dataset_order() {
    let ds = Dataset::new(vec![
        LaunchRecord::new("A", 900.0, "FT", Outcome::Success),
        LaunchRecord::new("B", 100.0, "B4", Outcome::Failure),
        LaunchRecord::new("A", 500.0, "FT", Outcome::Failure),
    ]);
    let payloads: Vec<f64> = compute_scatter_view(&ds, &SiteSelection::All, &PayloadRange::new(0.0, 1000.0))
        .points()
        .iter()
        .map(|p| p.payload_mass_kg)
        .collect();
    assert_eq!(payloads, vec![900.0, 100.0, 500.0]);
}

#[test]
fn test_scatter_on_empty_dataset() {
    let view = compute_scatter_view(&Dataset::default(), &SiteSelection::All, &PayloadRange::new(0.0, 10.0));
    assert!(view.is_empty());
    assert!(view.by_category().is_empty());
}
