use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use launchdash::api::open_dashboard;
use launchdash::config::Config;
use launchdash::error::DashResult;
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(
        global = true,
        short,
        long,
        default_value = "data/spacex_launch_dash.csv"
    )]
    data: String,

    /// JSON dashboard config; flags given on the command line win over it.
    #[arg(global = true, long = "config")]
    config_file: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the site catalog, range control and both initial charts.
    Summary(cmd::summary::SummaryArgs),
    /// Apply a site and/or payload selection and print both charts.
    View(cmd::view::ViewArgs),
    /// Drive the dashboard from an interactive prompt.
    Interactive(cmd::interactive::InteractiveArgs),
    /// JSON-lines host protocol on stdin/stdout.
    Events(cmd::events::EventsArgs),
}

impl Commands {
    fn config(&self) -> &Config {
        match self {
            Commands::Summary(args) => &args.config,
            Commands::View(args) => &args.config,
            Commands::Interactive(args) => &args.config,
            Commands::Events(args) => &args.config,
        }
    }
}

fn resolve_config(cli: &Cli, sub_matches: Option<&ArgMatches>) -> DashResult<Config> {
    let cli_config = cli.command.config();

    let config = match (&cli.config_file, sub_matches) {
        (Some(path), Some(m)) => {
            info!("⚙️  Loading dashboard config from: {}", path);
            let mut file_config = Config::load_from_file(path)?;
            file_config.merge_from_cli(cli_config, m);
            file_config
        }
        (Some(path), None) => {
            info!("⚙️  Loading dashboard config from: {}", path);
            Config::load_from_file(path)?
        }
        (None, _) => cli_config.clone(),
    };

    config.validate()?;
    Ok(config)
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let max_level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(max_level)
        .with_writer(std::io::stderr)
        .init();

    info!("🚀 Initializing Launch Dashboard...");

    let sub_matches = matches.subcommand().map(|(_, m)| m);
    let config = resolve_config(&cli, sub_matches).unwrap_or_else(|e| {
        error!("❌ {}", e);
        process::exit(1);
    });

    let dashboard = open_dashboard(&cli.data).unwrap_or_else(|e| {
        error!("❌ FATAL ERROR LOADING LAUNCH DATA from '{}':", cli.data);
        error!("   {}", e);
        process::exit(1);
    });

    let result = match cli.command {
        Commands::Summary(_) => cmd::summary::run(&dashboard, &config),
        Commands::View(args) => cmd::view::run(args, dashboard),
        Commands::Interactive(_) => cmd::interactive::run(dashboard, &config),
        Commands::Events(_) => cmd::events::run(dashboard, &config),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
