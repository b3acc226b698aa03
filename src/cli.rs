use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anstyle::{AnsiColor, Color, Style};
use clap::builder::Styles;
use clap::{ArgAction, CommandFactory, Parser};

/// Command-line interface definition.
///
/// Verbosity levels (diagnostics on stderr):
/// 0 - silent
/// 1 - errors (default)
/// 2 - warnings + errors
/// 3 - info
/// 4 - debug
/// 5 - trace
#[derive(Parser, Debug, Clone)]
#[command(
    name = "ipinfo",
    version,
    about = "Extract IPv4 addresses from a text file and reverse-resolve the public ones",
    disable_help_flag = true,
    styles = help_styles()
)]
pub struct Cli {
    /// Path of the file to read IPv4 addresses from (required)
    #[arg(short = 'f', value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Show this help message
    #[arg(short = 'h', long = "help", action = ArgAction::SetTrue)]
    pub help: bool,

    /// Verbosity level (0-5)
    #[arg(long, default_value_t = 1)]
    pub verbose: u8,

    /// Reverse lookup timeout per query, in seconds [default: system resolver setting]
    #[arg(long = "dns-timeout", value_name = "SECS")]
    pub dns_timeout: Option<u64>,

    /// Reverse lookup attempts per query [default: system resolver setting]
    #[arg(long = "dns-attempts", value_name = "N")]
    pub dns_attempts: Option<usize>,
}

impl Cli {
    /// Parse CLI arguments from process args.
    pub fn from_args() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    /// Input path, if one was given and is non-empty.
    pub fn input_path(&self) -> Option<&Path> {
        self.file
            .as_deref()
            .filter(|p| !p.as_os_str().is_empty())
    }

    /// Should we print usage instead of processing anything?
    pub fn wants_usage(&self) -> bool {
        self.help || self.input_path().is_none()
    }

    /// Rendered usage text. Styled only when `colored` is set.
    pub fn usage(colored: bool) -> String {
        let help = Self::command().render_help();
        if colored {
            help.ansi().to_string()
        } else {
            help.to_string()
        }
    }
}

/// Accept single-dash long flags (`-help`) alongside the usual forms.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| if arg == "-help" { OsString::from("--help") } else { arg })
        .collect()
}

fn help_styles() -> Styles {
    Styles::styled()
        .header(
            Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Blue))),
        )
        .usage(
            Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Blue))),
        )
        .literal(
            Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Cyan))),
        )
        .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::BrightBlack))))
        .error(
            Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Red))),
        )
}
