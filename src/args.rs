//! Command-line argument parsing and processing.
//!
//! Hand-rolled parser producing a `CliAction` for the main dispatch. Supports
//! the `render` (default), `table`, and `cities` commands plus the shared
//! option flags, while gracefully handling unknown options.

/// Options shared by the render and table commands.
#[derive(Debug, PartialEq, Default, Clone)]
pub struct RunOptions {
    pub debug_enabled: bool,
    pub config_dir: Option<String>,
    /// Free-text city query.
    pub city: Option<String>,
    pub year: Option<i32>,
    /// Highlight date, ISO YYYY-MM-DD.
    pub date: Option<String>,
    /// Explicit-location fields, used together with `coords`.
    pub country: Option<String>,
    pub timezone: Option<String>,
    /// "LAT LON" coordinate string.
    pub coords: Option<String>,
    pub output: Option<String>,
    pub png: bool,
}

/// Represents the parsed command-line arguments and their intended actions.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    /// Render the chart (default command)
    Render { options: RunOptions },
    /// Print the computed table
    TableCommand { options: RunOptions, json: bool },
    /// List the embedded gazetteer
    CitiesCommand,
    /// Display help information and exit
    ShowHelp,
    /// Display version information and exit
    ShowVersion,
    /// Show help due to unknown arguments and exit
    ShowHelpDueToError,
}

/// Result of parsing command-line arguments.
pub struct ParsedArgs {
    pub action: CliAction,
}

impl ParsedArgs {
    /// Parse command-line arguments into a structured result.
    ///
    /// The first bare argument selects the command; everything else is flag
    /// parsing shared across commands.
    pub fn parse<I, S>(args: I) -> ParsedArgs
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args_vec: Vec<String> = args
            .into_iter()
            .skip(1)
            .map(|s| s.as_ref().to_string())
            .collect();

        let mut options = RunOptions::default();
        let mut command: Option<String> = None;
        let mut json_output = false;
        let mut display_help = false;
        let mut display_version = false;
        let mut unknown_arg_found = false;

        let mut i = 0;
        while i < args_vec.len() {
            let arg_str = &args_vec[i];
            match arg_str.as_str() {
                "--help" | "-h" => display_help = true,
                "--version" | "-V" => display_version = true,
                "--debug" | "-d" => options.debug_enabled = true,
                "--png" => options.png = true,
                "--json" => json_output = true,
                "--config" | "-c" => match take_value(&args_vec, i, arg_str) {
                    Some(value) => {
                        options.config_dir = Some(value);
                        i += 1;
                    }
                    None => unknown_arg_found = true,
                },
                "--city" => match take_value(&args_vec, i, arg_str) {
                    Some(value) => {
                        options.city = Some(value);
                        i += 1;
                    }
                    None => unknown_arg_found = true,
                },
                "--year" | "-y" => match take_value(&args_vec, i, arg_str) {
                    Some(value) => match value.parse::<i32>() {
                        Ok(year) => {
                            options.year = Some(year);
                            i += 1;
                        }
                        Err(_) => {
                            log_warning!("Invalid year value: {value}");
                            unknown_arg_found = true;
                            i += 1;
                        }
                    },
                    None => unknown_arg_found = true,
                },
                "--date" => match take_value(&args_vec, i, arg_str) {
                    Some(value) => {
                        options.date = Some(value);
                        i += 1;
                    }
                    None => unknown_arg_found = true,
                },
                "--country" => match take_value(&args_vec, i, arg_str) {
                    Some(value) => {
                        options.country = Some(value);
                        i += 1;
                    }
                    None => unknown_arg_found = true,
                },
                "--timezone" => match take_value(&args_vec, i, arg_str) {
                    Some(value) => {
                        options.timezone = Some(value);
                        i += 1;
                    }
                    None => unknown_arg_found = true,
                },
                "--coords" => match take_value(&args_vec, i, arg_str) {
                    Some(value) => {
                        options.coords = Some(value);
                        i += 1;
                    }
                    None => unknown_arg_found = true,
                },
                "--output" | "-o" => match take_value(&args_vec, i, arg_str) {
                    Some(value) => {
                        options.output = Some(value);
                        i += 1;
                    }
                    None => unknown_arg_found = true,
                },
                _ => {
                    if arg_str.starts_with('-') {
                        log_warning!("Unknown option: {arg_str}");
                        unknown_arg_found = true;
                    } else if command.is_none() {
                        command = Some(arg_str.clone());
                    } else {
                        log_warning!(
                            "Cannot use multiple commands at once: '{}' and '{}'",
                            command.as_deref().unwrap_or(""),
                            arg_str
                        );
                        unknown_arg_found = true;
                    }
                }
            }
            i += 1;
        }

        let action = if display_version {
            CliAction::ShowVersion
        } else if unknown_arg_found {
            CliAction::ShowHelpDueToError
        } else if display_help {
            CliAction::ShowHelp
        } else {
            match command.as_deref() {
                None | Some("render") | Some("r") => CliAction::Render { options },
                Some("table") | Some("t") => CliAction::TableCommand {
                    options,
                    json: json_output,
                },
                Some("cities") => CliAction::CitiesCommand,
                Some(unknown) => {
                    log_warning!("Unknown command: {unknown}");
                    CliAction::ShowHelpDueToError
                }
            }
        };

        ParsedArgs { action }
    }

    /// Convenience method to parse from std::env::args()
    pub fn from_env() -> ParsedArgs {
        Self::parse(std::env::args())
    }
}

/// Fetch the value following a flag, warning when it is missing.
fn take_value(args: &[String], i: usize, flag: &str) -> Option<String> {
    match args.get(i + 1) {
        Some(value) if !value.starts_with("--") => Some(value.clone()),
        _ => {
            log_warning!("Missing value for {flag}. Usage: {flag} <value>");
            None
        }
    }
}

/// Displays version information using custom logging style.
pub fn display_version_info() {
    log_version!();
    log_pipe!();
    println!("┗ {}", env!("CARGO_PKG_DESCRIPTION"));
}

/// Displays custom help message using logger methods.
pub fn display_help() {
    log_version!();
    log_block_start!(env!("CARGO_PKG_DESCRIPTION"));
    log_block_start!("Usage:");
    log_indented!("suncurve [OPTIONS] [COMMAND]");
    log_block_start!("Options:");
    log_indented!("    --city <name>      City to chart (gazetteer lookup)");
    log_indented!("-y, --year <year>      Year to chart (current year ± 2)");
    log_indented!("    --date <date>      Highlight date, YYYY-MM-DD");
    log_indented!("    --country <name>   Country label for explicit locations");
    log_indented!("    --timezone <tz>    IANA timezone for explicit locations");
    log_indented!("    --coords \"LAT LON\" Explicit coordinates");
    log_indented!("-o, --output <path>    Chart output file");
    log_indented!("    --png              Rasterize the chart to PNG");
    log_indented!("    --json             Print the table as JSON (table command)");
    log_indented!("-c, --config <dir>     Use custom configuration directory");
    log_indented!("-d, --debug            Enable detailed debug output");
    log_indented!("-h, --help             Print help information");
    log_indented!("-V, --version          Print version information");
    log_block_start!("Commands:");
    log_indented!("render, r              Render the sunrise/sunset chart (default)");
    log_indented!("table, t               Print the computed full-year table");
    log_indented!("cities                 List the embedded city gazetteer");
    log_end!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> CliAction {
        let full: Vec<String> = std::iter::once("suncurve".to_string())
            .chain(args.iter().map(|s| s.to_string()))
            .collect();
        ParsedArgs::parse(full).action
    }

    #[test]
    fn test_default_is_render() {
        match parse(&[]) {
            CliAction::Render { options } => assert_eq!(options, RunOptions::default()),
            other => panic!("expected Render, got {other:?}"),
        }
    }

    #[test]
    fn test_render_flags() {
        match parse(&["--city", "Paris", "--year", "2024", "--date", "2024-06-21", "--png"]) {
            CliAction::Render { options } => {
                assert_eq!(options.city.as_deref(), Some("Paris"));
                assert_eq!(options.year, Some(2024));
                assert_eq!(options.date.as_deref(), Some("2024-06-21"));
                assert!(options.png);
            }
            other => panic!("expected Render, got {other:?}"),
        }
    }

    #[test]
    fn test_explicit_location_flags() {
        match parse(&[
            "--city", "Lentilly", "--country", "France", "--coords", "45.816669 4.66667",
        ]) {
            CliAction::Render { options } => {
                assert_eq!(options.coords.as_deref(), Some("45.816669 4.66667"));
                assert_eq!(options.country.as_deref(), Some("France"));
            }
            other => panic!("expected Render, got {other:?}"),
        }
    }

    #[test]
    fn test_table_command_with_json() {
        match parse(&["table", "--city", "Paris", "--json"]) {
            CliAction::TableCommand { options, json } => {
                assert!(json);
                assert_eq!(options.city.as_deref(), Some("Paris"));
            }
            other => panic!("expected TableCommand, got {other:?}"),
        }
    }

    #[test]
    fn test_cities_command() {
        assert_eq!(parse(&["cities"]), CliAction::CitiesCommand);
    }

    #[test]
    fn test_help_and_version() {
        assert_eq!(parse(&["--help"]), CliAction::ShowHelp);
        assert_eq!(parse(&["-V"]), CliAction::ShowVersion);
    }

    #[test]
    fn test_unknown_option_shows_help() {
        assert_eq!(parse(&["--bogus"]), CliAction::ShowHelpDueToError);
    }

    #[test]
    fn test_invalid_year_shows_help() {
        assert_eq!(parse(&["--year", "soon"]), CliAction::ShowHelpDueToError);
    }

    #[test]
    fn test_missing_flag_value_shows_help() {
        assert_eq!(parse(&["--city"]), CliAction::ShowHelpDueToError);
    }

    #[test]
    fn test_multiple_commands_rejected() {
        assert_eq!(parse(&["table", "cities"]), CliAction::ShowHelpDueToError);
    }
}
