use crate::reports;
use clap::Args;
use launchdash::binding::Dashboard;
use launchdash::config::Config;
use launchdash::error::DashResult;
use launchdash::filter::{PayloadRange, SiteSelection};
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct ViewArgs {
    #[command(flatten)]
    pub config: Config,

    /// Site name, or ALL.
    #[arg(short, long)]
    pub site: Option<SiteSelection>,

    /// Inclusive payload interval as low,high (kg).
    #[arg(short, long, allow_hyphen_values = true)]
    pub range: Option<PayloadRange>,
}

pub fn run(args: ViewArgs, mut dashboard: Dashboard) -> DashResult<()> {
    if let Some(site) = args.site {
        let updated = dashboard.select_site(site);
        info!("Site selection republished {} output(s)", updated.len());
    }
    if let Some(range) = args.range {
        let updated = dashboard.set_payload_range(range);
        info!("Payload range republished {} output(s)", updated.len());
    }

    let state = dashboard.state();
    println!(
        "\n🔎 === Site: {} | Payload: {} kg === 🔎",
        state.site, state.payload
    );
    for (_, view) in dashboard.snapshot() {
        println!("\n{}", reports::render_output(&view));
    }
    Ok(())
}
