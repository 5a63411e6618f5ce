use crate::reports;
use clap::Args;
use launchdash::binding::Dashboard;
use launchdash::catalog::site_options;
use launchdash::config::Config;
use launchdash::error::DashResult;
use launchdash::filter::RangeControl;

#[derive(Args, Debug, Clone)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub config: Config,
}

pub fn run(dashboard: &Dashboard, config: &Config) -> DashResult<()> {
    let dataset = dashboard.dataset();
    let control = RangeControl::from_config(&config.slider, dataset.bounds())?;

    println!("\n🛰️  === {} === 🛰️", config.layout.dashboard_title);
    println!(
        "{} launches, {} successful.",
        dataset.len(),
        dataset.total_successes()
    );

    println!("\n{}", config.layout.site_placeholder);
    println!("{}", reports::render_site_options(&site_options(dataset)));

    println!("\nPayload range (Kg):");
    println!("{}", reports::render_range_control(&control));

    for (_, view) in dashboard.snapshot() {
        println!("\n{}", reports::render_output(&view));
    }
    Ok(())
}
