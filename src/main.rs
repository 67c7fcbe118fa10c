use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod domain;
mod services;

use cli::*;
use commands::*;
use domain::constants::*;
use domain::models::*;
use services::classifier::{classify_input, effective_status};
use services::config::load_config;
use services::output::{print_one, print_out};
use services::plans::{all_plans, lookup_plan};
use services::render::{export, matrix_row, paint, plan_panel, state_line};
use services::selection::Selection;
use services::session::{run_session, SessionOptions};
use services::zscore::parse_z_score;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let loaded = load_config(cli.config.as_deref())?;
    let ctx = Ctx {
        json: cli.json || loaded.config.general.json,
        color: cli.color || loaded.config.display.color,
        config: loaded,
    };

    if handle_reference_commands(&cli, &ctx)? {
        return Ok(());
    }
    handle_runtime_commands(&cli, &ctx)?;
    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
