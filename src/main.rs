//! Main application entry point and CLI dispatch.
//!
//! Argument parsing happens first; each action then sets up logging and
//! configuration before delegating to its command handler.

use anyhow::Result;

use suncurve::args::{self, CliAction, ParsedArgs, RunOptions};
use suncurve::commands;
use suncurve::config::{self, Config};
use suncurve::logger::Log;
use suncurve::{log_error_exit, log_version};

fn main() {
    let parsed_args = ParsedArgs::from_env();

    if let Err(err) = run(parsed_args.action) {
        log_error_exit!("{err:#}");
        std::process::exit(1);
    }
}

fn run(action: CliAction) -> Result<()> {
    match action {
        CliAction::ShowVersion => {
            args::display_version_info();
            Ok(())
        }
        CliAction::ShowHelp => {
            args::display_help();
            Ok(())
        }
        CliAction::ShowHelpDueToError => {
            args::display_help();
            std::process::exit(1);
        }
        CliAction::Render { options } => {
            let config = setup(&options)?;
            commands::render::handle_render_command(&options, &config)
        }
        CliAction::TableCommand { options, json } => {
            // JSON output must stay machine-readable
            if json {
                Log::set_enabled(false);
            }
            let config = setup(&options)?;
            commands::table::handle_table_command(&options, &config, json)
        }
        CliAction::CitiesCommand => {
            log_version!();
            commands::cities::handle_cities_command()
        }
    }
}

/// Shared startup: debug flag, config directory override, version header,
/// and configuration load.
fn setup(options: &RunOptions) -> Result<Config> {
    Log::set_debug(options.debug_enabled);
    config::set_config_dir(options.config_dir.clone())?;

    log_version!();
    let config = Config::load()?;
    if options.debug_enabled {
        config.log_config();
    }
    Ok(config)
}
