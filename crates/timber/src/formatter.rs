use crate::Level;

use tracing_core::Subscriber;
use tracing_subscriber::{fmt, fmt::MakeWriter};

/// One compact line per event, no timestamp or target.
pub(crate) fn least_verbose<W>(level: Level, writer: W, ansi: bool) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let format = fmt::format().without_time().with_target(false).compact();
    fmt()
        .with_max_level(level)
        .with_ansi(ansi)
        .event_format(format)
        .with_writer(writer)
        .finish()
}

pub(crate) fn verbose<W>(level: Level, writer: W, ansi: bool) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    fmt()
        .with_max_level(level)
        .with_ansi(ansi)
        .with_writer(writer)
        .finish()
}

/// Adds thread ids and source locations on top of [`verbose`].
pub(crate) fn very_verbose<W>(level: Level, writer: W, ansi: bool) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    fmt()
        .with_max_level(level)
        .with_ansi(ansi)
        .with_writer(writer)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true)
        .finish()
}
