//! Logging setup.
//!
//! `WARN` and `ERROR` events are written to stderr, all the others to stdout.

use std::{io, sync::OnceLock};

use tracing::{Level, Subscriber};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::writer::BoxMakeWriter,
    layer::{Layer, SubscriberExt as _},
    registry::LookupSpan,
    util::SubscriberInitExt as _,
};

/// Maximum [`Level`] of the emitted events, set once the configuration is
/// loaded.
static MAX_LEVEL: OnceLock<Level> = OnceLock::new();

/// [`Level`] used until [`set_max_level()`] is called.
const DEFAULT_LEVEL: Level = Level::INFO;

/// Output stream of log events.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Stream {
    /// Standard output.
    Stdout,

    /// Standard error.
    Stderr,
}

impl Stream {
    /// Returns the [`Stream`] events of the provided [`Level`] go to.
    #[must_use]
    pub fn of(level: Level) -> Self {
        if level <= Level::WARN {
            Self::Stderr
        } else {
            Self::Stdout
        }
    }

    /// Indicates whether an event of the provided [`Level`] is written to
    /// this [`Stream`] when `max` is the maximum emitted [`Level`].
    #[must_use]
    pub fn emits(self, level: Level, max: Level) -> bool {
        Self::of(level) == self && level <= max
    }

    /// Creates a compact formatting [`Layer`] writing to this [`Stream`].
    fn layer<S>(self) -> impl Layer<S>
    where
        S: Subscriber + for<'a> LookupSpan<'a>,
    {
        let writer = match self {
            Self::Stdout => BoxMakeWriter::new(io::stdout),
            Self::Stderr => BoxMakeWriter::new(io::stderr),
        };
        tracing_subscriber::fmt::layer()
            .compact()
            .with_ansi(true)
            .with_thread_names(true)
            .with_writer(writer)
            .with_filter(filter_fn(move |meta| {
                meta.is_span() || self.emits(*meta.level(), max_level())
            }))
    }
}

/// Returns the current maximum [`Level`] of the emitted events.
fn max_level() -> Level {
    MAX_LEVEL.get().copied().unwrap_or(DEFAULT_LEVEL)
}

/// Installs the global subscriber writing to stdout and stderr.
pub fn init() {
    tracing_subscriber::registry()
        .with(Stream::Stdout.layer())
        .with(Stream::Stderr.layer())
        .init();
}

/// Sets the maximum [`Level`] of the emitted events.
///
/// Only the first call has effect.
pub fn set_max_level(level: Level) {
    if MAX_LEVEL.set(level).is_err() {
        tracing::warn!("log level is already set to {}", max_level());
    }
}
