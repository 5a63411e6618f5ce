mod charts;
mod controls;

use launchdash::binding::OutputView;

pub use self::charts::{outcome as render_outcome_chart, scatter as render_scatter_chart};
pub use self::controls::{
    range_control as render_range_control, site_options as render_site_options,
};

pub fn render_output(view: &OutputView) -> String {
    match view {
        OutputView::Outcome(v) => render_outcome_chart(v),
        OutputView::Scatter(v) => render_scatter_chart(v),
    }
}
