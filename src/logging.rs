use std::fmt;
use std::io::IsTerminal;

use colored::*;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::fmt::{FmtContext, FormatEvent};
use tracing_subscriber::registry::LookupSpan;

/// Renders events as `[+] SAV001 deposit applied amount=250 balance=5250`.
///
/// The `account` field, when present, is pulled out in front of the message.
pub struct TellerFormatter;

#[derive(Default)]
struct TellerFields {
    account: Option<String>,
    message: String,
    rest: Vec<String>,
}

impl Visit for TellerFields {
    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "account" => self.account = Some(value.to_string()),
            name => self.rest.push(format!("{name}={value}")),
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        match field.name() {
            "message" => self.message = format!("{value:?}"),
            "account" => self.account = Some(format!("{value:?}")),
            name => self.rest.push(format!("{name}={value:?}")),
        }
    }
}

impl<S, N> FormatEvent<S, N> for TellerFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let symbol = match *event.metadata().level() {
            Level::TRACE => "[ ]".dimmed(),
            Level::DEBUG => "[?]".blue(),
            Level::INFO => "[+]".green().bold(),
            Level::WARN => "[*]".yellow().bold(),
            Level::ERROR => "[-]".red().bold(),
        };

        let mut fields = TellerFields::default();
        event.record(&mut fields);

        write!(writer, "{symbol} ")?;
        if let Some(account) = &fields.account {
            write!(writer, "{} ", account.as_str().bold())?;
        }
        write!(writer, "{}", fields.message)?;
        for field in &fields.rest {
            write!(writer, " {}", field.dimmed())?;
        }
        writeln!(writer)
    }
}

/// Installs the stderr subscriber. Stdout carries only the session transcript.
pub fn init_logging(level: Level) {
    if !std::io::stderr().is_terminal() {
        colored::control::set_override(false);
    }

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .event_format(TellerFormatter)
        .init();
}
