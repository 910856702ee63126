use std::io::Write;

use camino::Utf8Path;
use codec_std::Fs;
use graphql_connection::ExecutionContext;
use graphql_schema::{Schema, INTROSPECTION_QUERY, OPERATION_NAME};
use serde_json::{Map, Value};

use crate::{codec::DumpSource, Result};

/// Runs the introspection query against `source` and returns the result.
///
/// A schema answers the query itself and ignores `context`. A connection
/// receives the query together with `context`, exactly as given. When a
/// `destination` is supplied the result is also written to it as pretty
/// JSON, starting with `{\n  "data"`.
pub fn dump_schema<'a>(
    source: impl Into<DumpSource<'a>>,
    destination: Option<&mut dyn Write>,
    context: &ExecutionContext,
) -> Result<Value> {
    let value = introspect(source.into(), context)?;
    if let Some(destination) = destination {
        write_introspection(&value, destination)?;
    }
    Ok(value)
}

/// Like [`dump_schema`], writing the JSON to `path`. Missing parent
/// directories are created.
pub fn dump_schema_to_path<'a>(
    source: impl Into<DumpSource<'a>>,
    path: &Utf8Path,
    context: &ExecutionContext,
) -> Result<Value> {
    let value = introspect(source.into(), context)?;
    write_introspection_to_path(&value, path)?;
    Ok(value)
}

/// Writes an introspection result as pretty JSON with two-space indentation.
pub fn write_introspection(value: &Value, destination: &mut dyn Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *destination, value)?;
    destination.flush()?;
    Ok(())
}

/// Writes an introspection result to `path` as pretty JSON.
pub fn write_introspection_to_path(value: &Value, path: &Utf8Path) -> Result<()> {
    Fs::write_file(path, serde_json::to_string_pretty(value)?)?;
    Ok(())
}

/// Prints `schema` as SDL, without trailing whitespace, writing it to
/// `destination` when one is supplied.
pub fn dump_schema_definition(
    schema: &Schema,
    destination: Option<&mut dyn Write>,
) -> Result<String> {
    let sdl = schema.to_sdl().trim_end().to_string();
    if let Some(destination) = destination {
        destination.write_all(sdl.as_bytes())?;
        destination.flush()?;
    }
    Ok(sdl)
}

/// Like [`dump_schema_definition`], writing the SDL to `path`.
pub fn dump_schema_definition_to_path(schema: &Schema, path: &Utf8Path) -> Result<String> {
    let sdl = dump_schema_definition(schema, None)?;
    Fs::write_file(path, &sdl)?;
    Ok(sdl)
}

fn introspect(source: DumpSource<'_>, context: &ExecutionContext) -> Result<Value> {
    match source {
        DumpSource::Schema(schema) => {
            tracing::debug!("introspecting local schema");
            Ok(schema.introspect().to_value()?)
        }
        DumpSource::Connection(connection) => {
            tracing::debug!("introspecting through connection");
            Ok(connection.execute(
                INTROSPECTION_QUERY,
                Some(OPERATION_NAME),
                &Map::new(),
                context,
            )?)
        }
    }
}
