use anyhow::Result;
use clap::Parser;

use crate::options::{OutputOpts, SchemaOpt};

#[derive(Debug, Parser)]
pub struct Sdl {
    #[clap(flatten)]
    schema: SchemaOpt,

    #[clap(flatten)]
    output: OutputOpts,
}

impl Sdl {
    pub fn run(&self) -> Result<()> {
        let schema = self.schema.load()?;
        self.output.write_sdl(&schema)
    }
}
