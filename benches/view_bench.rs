use criterion::{criterion_group, criterion_main, Criterion};
use launchdash::aggregate::compute_outcome_view;
use launchdash::binding::Dashboard;
use launchdash::dataset::{Dataset, LaunchRecord, Outcome};
use launchdash::filter::{PayloadRange, SiteSelection};
use launchdash::scatter::compute_scatter_view;
use std::hint::black_box;
use std::sync::Arc;

const SITES: [&str; 4] = ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"];
const CATEGORIES: [&str; 5] = ["v1.0", "v1.1", "FT", "B4", "B5"];

// Deterministic synthetic launch table.
fn setup_dataset(rows: usize) -> Dataset {
    (0..rows)
        .map(|i| {
            let outcome = if i % 3 == 0 {
                Outcome::Failure
            } else {
                Outcome::Success
            };
            LaunchRecord::new(
                SITES[i % SITES.len()],
                ((i * 7919) % 10_000) as f64,
                CATEGORIES[(i / 7) % CATEGORIES.len()],
                outcome,
            )
        })
        .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
    let ds = setup_dataset(50_000);
    let site = SiteSelection::site("KSC LC-39A");
    let range = PayloadRange::new(2_500.0, 7_500.0);

    c.bench_function("outcome_view_all_sites", |b| {
        b.iter(|| compute_outcome_view(black_box(&ds), black_box(&SiteSelection::All)))
    });

    c.bench_function("outcome_view_single_site", |b| {
        b.iter(|| compute_outcome_view(black_box(&ds), black_box(&site)))
    });

    c.bench_function("scatter_view_single_site", |b| {
        b.iter(|| compute_scatter_view(black_box(&ds), black_box(&site), black_box(&range)))
    });

    let mut dash = Dashboard::new(Arc::new(ds.clone()));
    c.bench_function("site_event_round_trip", |b| {
        b.iter(|| dash.select_site(black_box(site.clone())))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
