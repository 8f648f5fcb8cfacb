// proj - project scaffolding tool
// Main CLI entry point

use clap::Parser;
use std::process;
use proj::cli::{Cli, CliDispatcher};
use proj::services::default_registry;
use proj::utils::config::ConfigParser;
use proj::utils::error::UserError;
use proj::utils::logging::{init_logging, resolve_level};

fn main() {
    let cli = Cli::parse();

    let config = match ConfigParser::load() {
        Ok(config) => config,
        Err(err) => exit_with(&UserError::from_proj_error(&err)),
    };

    let level = resolve_level(cli.verbose, cli.quiet, &config.logging.level);
    if let Err(err) = init_logging(level) {
        eprintln!("Warning: {:#}", err);
    }

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    let registry = default_registry(".");
    let result = CliDispatcher::execute(cli.command, &registry);

    if let Err(err) = result {
        tracing::debug!(error = ?err, "command failed");
        exit_with(&UserError::from_proj_error(&err));
    }
}

fn exit_with(user_error: &UserError) -> ! {
    user_error.print();
    process::exit(user_error.exit_code);
}
