use clap::Args;
use launchdash::api::{describe_layout, handle_host_line, HostMessage};
use launchdash::binding::Dashboard;
use launchdash::config::Config;
use launchdash::error::DashResult;
use std::io::{self, BufRead, Write};
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct EventsArgs {
    #[command(flatten)]
    pub config: Config,
}

pub fn run(dashboard: Dashboard, config: &Config) -> DashResult<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    serve(dashboard, config, stdin.lock(), stdout.lock())
}

/// One JSON message per line out: a `layout` first, then an `update` or
/// `error` per input line.
fn serve<R: BufRead, W: Write>(
    mut dashboard: Dashboard,
    config: &Config,
    input: R,
    mut out: W,
) -> DashResult<()> {
    let layout = HostMessage::Layout(describe_layout(&dashboard, config)?);
    emit(&mut out, &layout)?;

    let mut handled = 0usize;
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let reply = handle_host_line(&mut dashboard, &line);
        emit(&mut out, &reply)?;
        handled += 1;
    }

    info!("Host closed the event stream after {} event(s)", handled);
    Ok(())
}

fn emit<W: Write>(out: &mut W, msg: &HostMessage) -> DashResult<()> {
    serde_json::to_writer(&mut *out, msg)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use launchdash::dataset::{Dataset, LaunchRecord, Outcome};
    use serde_json::Value;
    use std::sync::Arc;

    #[test]
    fn test_serve_emits_layout_then_updates() {
        let dashboard = Dashboard::new(Arc::new(Dataset::new(vec![
            LaunchRecord::new("A", 500.0, "v1", Outcome::Success),
            LaunchRecord::new("A", 1500.0, "v1", Outcome::Failure),
            LaunchRecord::new("B", 800.0, "v2", Outcome::Success),
        ])));
        let script = concat!(
            r#"{"input":"payload","value":[0,1000]}"#,
            "\n\n",
            "not json\n",
            r#"{"input":"site","value":"A"}"#,
            "\n",
        );

        let mut out = Vec::new();
        serve(dashboard, &Config::default(), script.as_bytes(), &mut out).unwrap();
        let lines: Vec<Value> = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0]["type"], "layout");
        assert_eq!(lines[0]["siteOptions"][0]["value"], "ALL");

        assert_eq!(lines[1]["type"], "update");
        assert_eq!(lines[1]["outputs"].as_array().unwrap().len(), 1);
        assert_eq!(lines[1]["outputs"][0]["output"], "scatter_chart");

        assert_eq!(lines[2]["type"], "error");

        assert_eq!(lines[3]["outputs"].as_array().unwrap().len(), 2);
        assert_eq!(lines[3]["outputs"][0]["output"], "outcome_chart");
    }
}
