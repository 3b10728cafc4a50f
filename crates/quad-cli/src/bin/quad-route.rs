//! Quad Route - interactive planner for safe quadcopter routes

use anyhow::{Context, Result};
use clap::Parser;
use quad_cli::{Config, Menu, MenuOptions};
use quad_core::{validate_area, RouteService};
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Print route checks as JSON reports
    #[arg(long)]
    json: bool,

    /// Do not clear the terminal between menu actions
    #[arg(long)]
    no_clear: bool,

    /// Initial area X minimum
    #[arg(long)]
    x_min: Option<i64>,

    /// Initial area X maximum
    #[arg(long)]
    x_max: Option<i64>,

    /// Initial area Y minimum
    #[arg(long)]
    y_min: Option<i64>,

    /// Initial area Y maximum
    #[arg(long)]
    y_max: Option<i64>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut config = Config::from_env();

    // Logs go to stderr so they never interleave with the menu.
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .context("invalid log filter")?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();

    let area = config.area;
    config.area = validate_area(
        args.x_min.unwrap_or(i64::from(area.x.min)),
        args.x_max.unwrap_or(i64::from(area.x.max)),
        args.y_min.unwrap_or(i64::from(area.y.min)),
        args.y_max.unwrap_or(i64::from(area.y.max)),
    )
    .context("invalid initial area")?;

    tracing::info!(area = %config.area, "Starting quad route planner");

    let service = RouteService::new(&config.rules());
    let options = MenuOptions {
        json: args.json,
        clear_screen: !args.no_clear,
    };
    let stdin = io::stdin();
    let mut menu = Menu::new(service, stdin.lock(), io::stdout(), options);
    menu.run()
}
