use std::io::{self, Write};

use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use clap::Parser;
use graphql_schema::Schema;
use serde_json::Value;

use crate::codec::{
    dump_schema_definition, dump_schema_definition_to_path, write_introspection,
    write_introspection_to_path,
};

#[derive(Debug, Parser)]
pub(crate) struct OutputOpts {
    /// The file path to write the command output to, instead of stdout
    #[arg(long, short = 'o')]
    pub(crate) output: Option<Utf8PathBuf>,
}

impl OutputOpts {
    pub(crate) fn write_json(&self, value: &Value) -> Result<()> {
        match &self.output {
            Some(path) => write_introspection_to_path(value, path)
                .with_context(|| format!("could not write introspection result to {path}")),
            None => {
                let mut stdout = io::stdout().lock();
                write_introspection(value, &mut stdout)?;
                writeln!(stdout)?;
                Ok(())
            }
        }
    }

    pub(crate) fn write_sdl(&self, schema: &Schema) -> Result<()> {
        match &self.output {
            Some(path) => dump_schema_definition_to_path(schema, path)
                .map(|_| ())
                .with_context(|| format!("could not write SDL to {path}")),
            None => {
                let mut stdout = io::stdout().lock();
                dump_schema_definition(schema, Some(&mut stdout))?;
                writeln!(stdout)?;
                Ok(())
            }
        }
    }
}
