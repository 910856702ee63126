use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use graphql_connection::ExecutionContext;

use crate::{
    codec::{dump_schema, load_schema, DumpSource},
    options::{IntrospectOpts, OutputOpts},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum IntrospectFormat {
    /// The introspection result, as returned by the endpoint
    Json,
    /// The schema definition language
    Sdl,
}

#[derive(Debug, Parser)]
pub struct Introspect {
    #[clap(flatten)]
    opts: IntrospectOpts,

    /// What to print
    #[arg(long, value_enum, default_value_t = IntrospectFormat::Sdl)]
    format: IntrospectFormat,

    #[clap(flatten)]
    output: OutputOpts,
}

impl Introspect {
    pub fn run(&self) -> Result<()> {
        let connection = self.opts.connection();
        tracing::info!(endpoint = %self.opts.endpoint, "introspecting");

        let value = dump_schema(
            DumpSource::Connection(&connection),
            None,
            &ExecutionContext::new(),
        )
        .with_context(|| format!("could not introspect {}", self.opts.endpoint))?;

        // Building the schema rejects error responses and incomplete results
        // before anything is written.
        let schema = load_schema(value.clone())?
            .with_context(|| format!("{} returned no schema", self.opts.endpoint))?;

        match self.format {
            IntrospectFormat::Json => self.output.write_json(&value),
            IntrospectFormat::Sdl => self.output.write_sdl(&schema),
        }
    }
}
