use anyhow::Result;
use clap::Parser;
use graphql_connection::ExecutionContext;

use crate::{
    codec::dump_schema,
    options::{OutputOpts, SchemaOpt},
};

#[derive(Debug, Parser)]
pub struct Json {
    #[clap(flatten)]
    schema: SchemaOpt,

    #[clap(flatten)]
    output: OutputOpts,
}

impl Json {
    pub fn run(&self) -> Result<()> {
        let schema = self.schema.load()?;
        let value = dump_schema(&schema, None, &ExecutionContext::new())?;
        self.output.write_json(&value)
    }
}
