mod commands;

use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use mwtm_core::config::{self, Config};
use mwtm_core::log;

#[derive(Parser)]
#[command(
    name = "mwtm",
    version,
    about = "Move X11 windows to named monitors by title",
    after_help = "Example:\n  mwtm 'gmail' HDMI-1 'terminal' eDP-1\n\n\
                  Titles match by case-insensitive substring, monitors by \
                  case-insensitive name."
)]
struct Cli {
    /// Window title substring and monitor name, repeated
    #[arg(
        value_name = "TITLE MONITOR",
        allow_hyphen_values = true,
        required_unless_present_any = ["list", "init_config"]
    )]
    pairs: Vec<String>,

    /// Print debug diagnostics (skipped monitors, every move) to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Print the moves that would be made without moving anything
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// List monitors and windows instead of moving
    #[arg(long, conflicts_with = "pairs")]
    list: bool,

    /// X display to connect to (defaults to $DISPLAY)
    #[arg(long, value_name = "NAME")]
    display: Option<String>,

    /// Write a commented default config file and exit
    #[arg(long, conflicts_with_all = ["pairs", "list"])]
    init_config: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let (config, config_error) = match config::try_load() {
        Ok(config) => (config.unwrap_or_default(), None),
        Err(e) => (Config::default(), Some(e)),
    };
    log::init(log::effective_level(&config.logging, cli.verbose));
    if let Some(e) = config_error {
        tracing::warn!("{e}, using defaults");
    }

    if cli.init_config {
        return commands::init::execute();
    }
    if cli.list {
        return commands::list::execute(cli.display.as_deref());
    }

    let requests = match mwtm_core::parse_pairs(cli.pairs.as_slice()) {
        Ok(requests) => requests,
        Err(e) => Cli::command().error(ErrorKind::WrongNumberOfValues, e).exit(),
    };

    commands::run::execute(&requests, &config, cli.display.as_deref(), cli.dry_run)
}
