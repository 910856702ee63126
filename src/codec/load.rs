use camino::Utf8Path;
use codec_std::Fs;
use graphql_connection::ExecutionContext;
use graphql_schema::{IntrospectionResponse, Schema};
use serde_json::{json, Value};

use crate::{
    codec::{
        dump::dump_schema,
        source::{classify_definition_text, classify_json_text, TextKind},
        DefinitionSource, DumpSource, SchemaSource,
    },
    CodecError, Result,
};

/// Loads a schema from an introspection result, a live connection or a
/// schema that is already built.
///
/// A path (or path-like string) that does not exist yields `Ok(None)`.
/// Malformed JSON is [`CodecError::Parse`]; JSON that is not a complete
/// introspection result is [`CodecError::SchemaBuild`].
pub fn load_schema<'a>(source: impl Into<SchemaSource<'a>>) -> Result<Option<Schema>> {
    let source = source.into();
    tracing::debug!(?source, "loading schema");

    match source {
        SchemaSource::Schema(schema) => Ok(Some(schema)),
        SchemaSource::Introspection(value) => from_introspection(value).map(Some),
        SchemaSource::Text(text) => match classify_json_text(&text) {
            TextKind::InlineJson => from_json_text(&text).map(Some),
            _ => from_json_file(Utf8Path::new(text.trim())),
        },
        SchemaSource::Path(path) => from_json_file(&path),
        SchemaSource::Connection(connection) => {
            let value = dump_schema(
                DumpSource::Connection(connection),
                None,
                &ExecutionContext::new(),
            )?;
            from_introspection(value).map(Some)
        }
    }
}

/// Loads a schema from SDL, given inline or as a file path.
///
/// A path that does not exist yields `Ok(None)`. Syntax errors are
/// [`CodecError::Parse`]; SDL that does not validate is
/// [`CodecError::SchemaBuild`].
pub fn load_schema_from_definition(source: impl Into<DefinitionSource>) -> Result<Option<Schema>> {
    let source = source.into();
    tracing::debug!(?source, "loading schema from definition");

    match source {
        DefinitionSource::Text(text) => match classify_definition_text(&text) {
            TextKind::FilePath => from_definition_file(Utf8Path::new(text.trim())),
            _ => Ok(Some(Schema::parse(&text, "schema.graphql")?)),
        },
        DefinitionSource::Path(path) => from_definition_file(&path),
    }
}

fn from_json_text(text: &str) -> Result<Schema> {
    from_introspection(serde_json::from_str(text)?)
}

fn from_json_file(path: &Utf8Path) -> Result<Option<Schema>> {
    match Fs::read_file(path) {
        Ok(contents) => from_json_text(&contents).map(Some),
        Err(codec_std::CodecStdError::NotFound { .. }) => {
            tracing::info!("no schema found at {path}");
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

fn from_definition_file(path: &Utf8Path) -> Result<Option<Schema>> {
    match Fs::read_file(path) {
        Ok(contents) => Ok(Some(Schema::parse(&contents, path)?)),
        Err(codec_std::CodecStdError::NotFound { .. }) => {
            tracing::info!("no schema found at {path}");
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

/// Builds a schema from `{"data": {"__schema": ...}}`. A bare
/// `{"__schema": ...}`, as some tools save it, is accepted too.
fn from_introspection(value: Value) -> Result<Schema> {
    let value = if value.get("__schema").is_some() {
        json!({ "data": value })
    } else {
        value
    };
    if !value.is_object() {
        return Err(CodecError::SchemaBuild(
            "an introspection result must be a JSON object".to_string(),
        ));
    }

    let response = IntrospectionResponse::from_value(value)?;
    Ok(Schema::try_from(response)?)
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use speculoos::prelude::*;

    use super::*;

    #[test]
    fn it_accepts_a_bare_schema_object() {
        let schema = from_introspection(json!({
            "__schema": {
                "queryType": { "name": "Query" },
                "types": [{
                    "kind": "OBJECT",
                    "name": "Query",
                    "fields": [{
                        "name": "ok",
                        "args": [],
                        "type": { "kind": "SCALAR", "name": "Boolean", "ofType": null }
                    }],
                    "interfaces": []
                }]
            }
        }))
        .unwrap();

        assert_that!(schema.query_type()).is_equal_to("Query");
    }

    #[test]
    fn it_rejects_documents_that_are_not_objects() {
        assert_that!(from_introspection(json!([1, 2])))
            .is_err()
            .matches(|err| matches!(err, CodecError::SchemaBuild(_)));
    }

    #[test]
    fn it_rejects_documents_without_data() {
        assert_that!(from_introspection(json!({ "errors": [{ "message": "nope" }] })))
            .is_err()
            .matches(|err| matches!(err, CodecError::SchemaBuild(message) if message == "nope"));
    }
}
