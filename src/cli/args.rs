//! Command-line argument parsing for the folio CLI.
//!
//! This module handles parsing command-line arguments and determining
//! which CLI command to execute.

use crate::content::ContactForm;
use crate::preferences::Theme;

/// What `folio theme` should do.
#[derive(Debug, Clone, PartialEq)]
pub enum ThemeAction {
    /// Print the current theme
    Show,
    /// Flip the theme
    Toggle,
    /// Enter a specific theme
    Set(Theme),
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Hydrate every section and print it (default)
    Show {
        /// Keep rotating the hero subtitles for a few periods
        watch: bool,
    },
    /// Inspect or change the theme preference
    Theme(ThemeAction),
    /// Send a contact message
    Contact(ContactForm),
    /// Delete the stored credential
    Logout,
    /// Arguments that could not be understood
    Invalid(String),
}

pub const USAGE: &str = "\
Usage: folio [COMMAND]

Commands:
  show [--watch]                      Fetch and print every section (default)
  theme [toggle|light|dark]           Print or change the theme preference
  contact <name> <email> <message...> Send a contact message
  logout                              Delete the stored credential

Options:
  -h, --help     Print this help
  -V, --version  Print the version";

/// Parse command-line arguments and return the appropriate command.
///
/// # Arguments
///
/// * `args` - Iterator of command-line arguments (typically `std::env::args()`)
///
/// # Examples
///
/// ```
/// use folio::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["folio".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    // Skip the program name
    let args: Vec<String> = args.skip(1).collect();

    if args.iter().any(|arg| arg == "--version" || arg == "-V") {
        return CliCommand::Version;
    }
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        return CliCommand::Help;
    }

    let Some((command, rest)) = args.split_first() else {
        return CliCommand::Show { watch: false };
    };

    match command.as_str() {
        "show" => parse_show(rest),
        "--watch" if rest.is_empty() => CliCommand::Show { watch: true },
        "theme" => parse_theme(rest),
        "contact" => parse_contact(rest),
        "logout" if rest.is_empty() => CliCommand::Logout,
        "logout" => CliCommand::Invalid("logout takes no arguments".to_string()),
        other => CliCommand::Invalid(format!("unknown command: {}", other)),
    }
}

fn parse_show(rest: &[String]) -> CliCommand {
    match rest {
        [] => CliCommand::Show { watch: false },
        [flag] if flag == "--watch" || flag == "-w" => CliCommand::Show { watch: true },
        _ => CliCommand::Invalid(format!("unexpected arguments to show: {}", rest.join(" "))),
    }
}

fn parse_theme(rest: &[String]) -> CliCommand {
    match rest {
        [] => CliCommand::Theme(ThemeAction::Show),
        [action] if action == "toggle" => CliCommand::Theme(ThemeAction::Toggle),
        [value] => match value.parse::<Theme>() {
            Ok(theme) => CliCommand::Theme(ThemeAction::Set(theme)),
            Err(e) => CliCommand::Invalid(e),
        },
        _ => CliCommand::Invalid("theme takes at most one argument".to_string()),
    }
}

fn parse_contact(rest: &[String]) -> CliCommand {
    match rest {
        [name, email, message @ ..] if !message.is_empty() => {
            CliCommand::Contact(ContactForm::new(name.as_str(), email.as_str(), message.join(" ")))
        }
        _ => CliCommand::Invalid("usage: folio contact <name> <email> <message...>".to_string()),
    }
}
