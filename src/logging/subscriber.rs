//! Tracing subscriber setup: console formatter, file layer, and initialisation.
use std::fs;
use std::io::{IsTerminal as _, Write as _};
use std::path::Path;
use std::sync::Mutex;

use tracing::{Event, Level, Metadata};

use super::utils::{format_utc_datetime, format_utc_time, log_file_path};
use crate::cli::VERSION;

pub(super) const STAGE_TARGET: &str = "dotfile_manager::stage";
pub(super) const DRY_RUN_TARGET: &str = "dotfile_manager::dry_run";

/// How an event is presented, derived from its level and target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Stage,
    DryRun,
    Info,
    Debug,
    Warn,
    Error,
}

impl Kind {
    fn of(metadata: &Metadata<'_>) -> Self {
        match (*metadata.level(), metadata.target()) {
            (Level::ERROR, _) => Self::Error,
            (Level::WARN, _) => Self::Warn,
            (Level::INFO, STAGE_TARGET) => Self::Stage,
            (Level::INFO, DRY_RUN_TARGET) => Self::DryRun,
            (Level::INFO, _) => Self::Info,
            _ => Self::Debug,
        }
    }

    /// Console label and the SGR style applied to it.
    const fn console_label(self) -> (&'static str, &'static str) {
        match self {
            Self::Stage => ("==> ", "1;34"),
            Self::DryRun => ("  [DRY RUN] ", "33"),
            Self::Info => ("  ", ""),
            Self::Debug => ("  debug: ", "2"),
            Self::Warn => ("WARN  ", "33"),
            Self::Error => ("ERROR ", "31"),
        }
    }

    const fn file_label(self) -> &'static str {
        match self {
            Self::Stage => "==> ",
            Self::DryRun => "    [dry run] ",
            Self::Info => "    ",
            Self::Debug => "    [debug] ",
            Self::Warn => "    [warn] ",
            Self::Error => "    [error] ",
        }
    }
}

fn render_console(kind: Kind, msg: &str, color: bool) -> String {
    match kind.console_label() {
        (label, style) if color && !style.is_empty() => {
            format!("\x1b[{style}m{label}\x1b[0m{msg}")
        }
        (label, _) => format!("{label}{msg}"),
    }
}

fn render_file(kind: Kind, timestamp: &str, msg: &str) -> String {
    format!("[{timestamp}] {}{msg}", kind.file_label())
}

/// Extracts the `message` field from a [`tracing::Event`].
#[derive(Default)]
struct MessageExtractor {
    message: String,
}

impl tracing::field::Visit for MessageExtractor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        }
    }
}

fn message(event: &Event<'_>) -> String {
    let mut extractor = MessageExtractor::default();
    event.record(&mut extractor);
    extractor.message
}

/// Appends every event to the per-command log file with a timestamp.
#[derive(Debug)]
pub(super) struct FileLayer {
    file: Mutex<fs::File>,
}

impl FileLayer {
    /// Open the log file for `command` under the cache directory, or `None`
    /// if there is no usable cache directory.
    pub(super) fn new(command: &str) -> Option<Self> {
        Self::create(&log_file_path(command)?)
    }

    /// Truncate `path`, write a one-line run header, and keep it open for
    /// appending.
    pub(super) fn create(path: &Path) -> Option<Self> {
        let header = format!(
            "# dotfile-manager {VERSION} started {} UTC\n",
            format_utc_datetime()
        );
        fs::write(path, header).ok()?;
        let file = fs::OpenOptions::new().append(true).open(path).ok()?;
        Some(Self {
            file: Mutex::new(file),
        })
    }
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for FileLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
        let line = render_file(
            Kind::of(event.metadata()),
            &format_utc_time(),
            &message(event),
        );
        if let Ok(mut f) = self.file.lock() {
            writeln!(f, "{line}").ok();
        }
    }
}

/// Console event format; colour is only used when attached to a terminal.
struct ConsoleFormatter {
    color: bool,
}

impl<S, N> tracing_subscriber::fmt::FormatEvent<S, N> for ConsoleFormatter
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
    N: for<'a> tracing_subscriber::fmt::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: tracing_subscriber::fmt::format::Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let line = render_console(Kind::of(event.metadata()), &message(event), self.color);
        writeln!(writer, "{line}")
    }
}

/// Initialise the global [`tracing`] subscriber.
///
/// Warnings and errors go to stderr, everything else to stdout; debug lines
/// reach the console only when `verbose` is set. Every event at `DEBUG` and
/// above is also appended to `<cache>/dotfile-manager/<command>.log` when a
/// cache directory is available. Call once, before any logging.
pub fn init_subscriber(verbose: bool, command: &str) {
    use tracing_subscriber::fmt::writer::MakeWriterExt as _;
    use tracing_subscriber::{
        Layer as _, filter::LevelFilter, fmt, layer::SubscriberExt as _,
        util::SubscriberInitExt as _,
    };

    let console_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    let color = std::io::stdout().is_terminal() && std::io::stderr().is_terminal();

    let make_writer = std::io::stderr
        .with_max_level(Level::WARN)
        .and(std::io::stdout.with_min_level(Level::INFO));

    let console_layer = fmt::layer()
        .event_format(ConsoleFormatter { color })
        .with_writer(make_writer)
        .with_filter(console_level);

    let file_layer = FileLayer::new(command).map(|l| l.with_filter(LevelFilter::DEBUG));

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}
