#![deny(missing_docs)]

//! Defines the output format of the events and spans `schema-codec` and its
//! libraries emit through `tracing`.
//!
//! Logs always go to stderr so they never mix with a schema printed to stdout.

mod formatter;

use std::io::{self, IsTerminal};

use tracing_subscriber::util::SubscriberInitExt;

pub use tracing_core::Level;

/// possible log levels
pub const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Initializes a global tracing subscriber that formats
/// all logs produced by an application that calls init,
/// and all logs produced by libraries consumed by that application.
///
/// The more verbose the level, the more context each line carries:
/// `debug` adds timestamps and targets, `trace` adds thread ids and source
/// locations. Colors are only used when stderr is a terminal.
pub fn init(level: Option<Level>) {
    let ansi = io::stderr().is_terminal();
    // by default, no logs are printed.
    match level {
        None => {}
        Some(level) if level <= Level::INFO => {
            formatter::least_verbose(level, io::stderr, ansi).init()
        }
        Some(level) if level == Level::DEBUG => formatter::verbose(level, io::stderr, ansi).init(),
        Some(level) => formatter::very_verbose(level, io::stderr, ansi).init(),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use tracing_core::metadata::ParseLevelError;

    use super::{Level, LEVELS};
    use std::str::FromStr;

    #[test]
    fn it_parses_all_possible_levels() -> Result<(), ParseLevelError> {
        for level in &LEVELS {
            Level::from_str(level)?;
        }
        Ok(())
    }

    #[rstest]
    #[case("error", true)]
    #[case("info", true)]
    #[case("debug", false)]
    #[case("trace", false)]
    fn it_orders_levels_from_quiet_to_chatty(#[case] level: &str, #[case] quiet: bool) {
        let level = Level::from_str(level).unwrap();
        assert_eq!(level <= Level::INFO, quiet);
    }
}
