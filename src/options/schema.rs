use std::io::{self, Read};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use graphql_schema::Schema;

use crate::{
    codec::{
        classify_json_text, is_definition_path, load_schema, load_schema_from_definition,
        TextKind,
    },
    utils::parsers::{parse_schema_location, SchemaLocation},
};

#[derive(Debug, Parser)]
pub(crate) struct SchemaOpt {
    /// An SDL file (.graphql, .graphqls, .gql), an introspection JSON file,
    /// or `-` to read either from stdin
    #[arg(value_name = "SCHEMA", value_parser = parse_schema_location)]
    pub(crate) schema: SchemaLocation,
}

impl SchemaOpt {
    /// Loads the schema, telling SDL from JSON by file extension, or by
    /// content for stdin.
    pub(crate) fn load(&self) -> Result<Schema> {
        let loaded = match &self.schema {
            SchemaLocation::Stdin => {
                let mut text = String::new();
                io::stdin()
                    .read_to_string(&mut text)
                    .context("could not read schema from stdin")?;
                tracing::debug!(bytes = text.len(), "read schema from stdin");
                match classify_json_text(&text) {
                    TextKind::InlineJson => load_schema(text)?,
                    _ => Some(Schema::parse(&text, "stdin.graphql")?),
                }
            }
            SchemaLocation::File(path) if is_definition_path(path) => {
                load_schema_from_definition(path.as_path())?
            }
            SchemaLocation::File(path) => load_schema(path.as_path())?,
        };

        loaded.ok_or_else(|| match &self.schema {
            SchemaLocation::File(path) => anyhow!("no schema found at \"{path}\""),
            SchemaLocation::Stdin => anyhow!("no schema found on stdin"),
        })
    }
}
