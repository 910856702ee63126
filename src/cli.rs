use clap::{Parser, Subcommand};
use timber::Level;

use crate::command;

#[derive(Debug, Parser)]
#[command(
    name = "schema-codec",
    version,
    about = "
Convert GraphQL schemas between SDL and introspection JSON.

Print the SDL of a running service:

    $ schema-codec introspect http://localhost:4000/graphql

Turn an SDL file into an introspection result, or back:

    $ schema-codec json schema.graphql --output schema.json
    $ schema-codec sdl schema.json
"
)]
pub struct SchemaCodec {
    #[command(subcommand)]
    pub command: Command,

    /// Specify the log level: error, warn, info, debug or trace
    #[arg(long = "log", short = 'l', global = true, env = "SCHEMA_CODEC_LOG")]
    pub log_level: Option<Level>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Introspect a GraphQL endpoint and print its schema
    Introspect(command::Introspect),

    /// Print the introspection result of a local schema
    Json(command::Json),

    /// Print the SDL of a local schema
    Sdl(command::Sdl),
}

impl SchemaCodec {
    pub fn run(&self) -> anyhow::Result<()> {
        match &self.command {
            Command::Introspect(command) => command.run(),
            Command::Json(command) => command.run(),
            Command::Sdl(command) => command.run(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use speculoos::prelude::*;

    use super::*;

    #[test]
    fn it_has_a_valid_command_line() {
        SchemaCodec::command().debug_assert();
    }

    #[test]
    fn it_parses_headers_and_retries() {
        let cli = SchemaCodec::try_parse_from([
            "schema-codec",
            "introspect",
            "http://localhost:4000/graphql",
            "-H",
            "Authorization:Bearer token",
            "--retries",
            "2",
            "--format",
            "json",
        ])
        .unwrap();

        match cli.command {
            Command::Introspect(_) => {}
            other => panic!("parsed as {other:?}"),
        }
    }

    #[test]
    fn it_parses_the_log_level() {
        let cli = SchemaCodec::try_parse_from(["schema-codec", "sdl", "-", "--log", "DEBUG"]).unwrap();
        assert_that!(cli.log_level).is_equal_to(Some(Level::DEBUG));
    }

    #[test]
    fn it_rejects_unknown_log_levels() {
        let cli = SchemaCodec::try_parse_from(["schema-codec", "sdl", "-", "--log", "loud"]);
        assert_that!(cli.is_err()).is_true();
    }
}
