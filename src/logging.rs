//! Diagnostic logging on stderr.
//!
//! stdout carries the report, so every diagnostic goes through `tracing` to
//! stderr. The `--verbose` level picks the maximum level shown.

use std::io::IsTerminal;

use anstyle::{AnsiColor, Color, Style};
use tracing::level_filters::LevelFilter;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::fmt::{FmtContext, FormatEvent};
use tracing_subscriber::registry::LookupSpan;

/// Map the CLI verbosity scale onto a tracing level filter.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::OFF,
        1 => LevelFilter::ERROR,
        2 => LevelFilter::WARN,
        3 => LevelFilter::INFO,
        4 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// One line per event: a level marker followed by the event fields.
pub struct LineFormatter {
    colored: bool,
}

impl LineFormatter {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    fn marker(level: &Level) -> (&'static str, Style) {
        match *level {
            Level::TRACE => (
                "[ ]",
                Style::new().fg_color(Some(Color::Ansi(AnsiColor::BrightBlack))),
            ),
            Level::DEBUG => ("[?]", Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue)))),
            Level::INFO => (
                "[+]",
                Style::new()
                    .bold()
                    .fg_color(Some(Color::Ansi(AnsiColor::Green))),
            ),
            Level::WARN => (
                "[*]",
                Style::new()
                    .bold()
                    .fg_color(Some(Color::Ansi(AnsiColor::Yellow))),
            ),
            Level::ERROR => (
                "[-]",
                Style::new()
                    .bold()
                    .fg_color(Some(Color::Ansi(AnsiColor::Red))),
            ),
        }
    }
}

impl<S, N> FormatEvent<S, N> for LineFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let (symbol, style) = Self::marker(event.metadata().level());
        if self.colored {
            write!(writer, "{}{}{} ", style.render(), symbol, style.render_reset())?;
        } else {
            write!(writer, "{symbol} ")?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Install the global subscriber. A second install fails; the failure is
/// reported on stderr and the first subscriber stays in place.
pub fn init(verbosity: u8) {
    let colored = std::io::stderr().is_terminal();
    if let Err(e) = tracing_subscriber::fmt()
        .with_max_level(level_for(verbosity))
        .with_writer(std::io::stderr)
        .event_format(LineFormatter::new(colored))
        .try_init()
    {
        eprintln!("Failed to initialize logging: {e}");
    }
}
