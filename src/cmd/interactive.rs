use crate::reports;
use clap::Args;
use launchdash::binding::Dashboard;
use launchdash::catalog::{search_sites, site_options};
use launchdash::config::Config;
use launchdash::error::DashResult;
use launchdash::filter::{PayloadRange, SiteSelection};
use std::io::{self, BufRead, Write};

#[derive(Args, Debug, Clone)]
pub struct InteractiveArgs {
    #[command(flatten)]
    pub config: Config,
}

#[derive(Debug, Clone, PartialEq)]
enum ReplCommand {
    Site(SiteSelection),
    Range(PayloadRange),
    Sites(String),
    Show,
    Help,
    Quit,
}

const HELP: &str = "\
Commands:
  site <name|ALL>     select a launch site
  range <low> <high>  set the payload range (kg, inclusive)
  sites [query]       list site choices, optionally filtered
  show                print both charts
  help                this text
  quit                exit";

fn parse_command(line: &str) -> Result<ReplCommand, String> {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((v, r)) => (v, r.trim()),
        None => (line, ""),
    };

    match verb.to_lowercase().as_str() {
        "site" if !rest.is_empty() => Ok(ReplCommand::Site(SiteSelection::site(rest))),
        "site" => Err("usage: site <name|ALL>".to_string()),
        "range" => {
            let nums: Vec<&str> = rest
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|s| !s.is_empty())
                .collect();
            if nums.len() != 2 {
                return Err("usage: range <low> <high>".to_string());
            }
            nums.join(",")
                .parse::<PayloadRange>()
                .map(ReplCommand::Range)
                .map_err(|e| e.to_string())
        }
        "sites" => Ok(ReplCommand::Sites(rest.to_string())),
        "show" => Ok(ReplCommand::Show),
        "help" | "?" => Ok(ReplCommand::Help),
        "quit" | "exit" | "q" => Ok(ReplCommand::Quit),
        other => Err(format!("unknown command '{}' (try 'help')", other)),
    }
}

pub fn run(dashboard: Dashboard, config: &Config) -> DashResult<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    session(dashboard, config, stdin.lock(), stdout.lock())
}

fn session<R: BufRead, W: Write>(
    mut dashboard: Dashboard,
    config: &Config,
    input: R,
    mut out: W,
) -> DashResult<()> {
    let options = site_options(dashboard.dataset());

    writeln!(out, "\n🛰️  === {} === 🛰️", config.layout.dashboard_title)?;
    writeln!(out, "{}", HELP)?;
    for (_, view) in dashboard.snapshot() {
        writeln!(out, "\n{}", reports::render_output(&view))?;
    }

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&line) {
            Ok(c) => c,
            Err(msg) => {
                writeln!(out, "⚠️  {}", msg)?;
                continue;
            }
        };

        let updates = match command {
            ReplCommand::Site(site) => dashboard.select_site(site),
            ReplCommand::Range(range) => dashboard.set_payload_range(range),
            ReplCommand::Sites(query) => {
                let hits = search_sites(&options, &query);
                writeln!(out, "{}", reports::render_site_options(&hits))?;
                continue;
            }
            ReplCommand::Show => dashboard.snapshot(),
            ReplCommand::Help => {
                writeln!(out, "{}", HELP)?;
                continue;
            }
            ReplCommand::Quit => break,
        };

        for (_, view) in &updates {
            writeln!(out, "\n{}", reports::render_output(view))?;
        }
    }

    Ok(())
}
