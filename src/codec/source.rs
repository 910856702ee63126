use camino::{Utf8Path, Utf8PathBuf};
use codec_std::Fs;
use graphql_connection::Connection;
use graphql_schema::Schema;
use serde_json::Value;

/// File extensions SDL files conventionally use.
pub const DEFINITION_EXTENSIONS: [&str; 3] = ["graphql", "graphqls", "gql"];

/// Where [`load_schema`](crate::load_schema) gets a schema from.
pub enum SchemaSource<'a> {
    /// An already built schema, returned as is.
    Schema(Schema),
    /// A parsed introspection result.
    Introspection(Value),
    /// Either inline introspection JSON or the path of a JSON file, decided
    /// by [`classify_json_text`].
    Text(String),
    /// Path of a JSON file holding an introspection result.
    Path(Utf8PathBuf),
    /// A live connection, asked for the schema with an empty context.
    Connection(&'a dyn Connection),
}

impl std::fmt::Debug for SchemaSource<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchemaSource::Schema(schema) => f.debug_tuple("Schema").field(&schema.query_type()).finish(),
            SchemaSource::Introspection(_) => f.write_str("Introspection"),
            SchemaSource::Text(text) => f.debug_tuple("Text").field(&text.len()).finish(),
            SchemaSource::Path(path) => f.debug_tuple("Path").field(path).finish(),
            SchemaSource::Connection(_) => f.write_str("Connection"),
        }
    }
}

impl From<Schema> for SchemaSource<'_> {
    fn from(schema: Schema) -> Self {
        SchemaSource::Schema(schema)
    }
}

impl From<Value> for SchemaSource<'_> {
    fn from(value: Value) -> Self {
        SchemaSource::Introspection(value)
    }
}

impl From<&str> for SchemaSource<'_> {
    fn from(text: &str) -> Self {
        SchemaSource::Text(text.to_string())
    }
}

impl From<String> for SchemaSource<'_> {
    fn from(text: String) -> Self {
        SchemaSource::Text(text)
    }
}

impl From<&Utf8Path> for SchemaSource<'_> {
    fn from(path: &Utf8Path) -> Self {
        SchemaSource::Path(path.to_path_buf())
    }
}

impl From<Utf8PathBuf> for SchemaSource<'_> {
    fn from(path: Utf8PathBuf) -> Self {
        SchemaSource::Path(path)
    }
}

/// Where [`load_schema_from_definition`](crate::load_schema_from_definition)
/// gets SDL from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefinitionSource {
    /// Either inline SDL or the path of an SDL file, decided by
    /// [`classify_definition_text`].
    Text(String),
    /// Path of an SDL file.
    Path(Utf8PathBuf),
}

impl From<&str> for DefinitionSource {
    fn from(text: &str) -> Self {
        DefinitionSource::Text(text.to_string())
    }
}

impl From<String> for DefinitionSource {
    fn from(text: String) -> Self {
        DefinitionSource::Text(text)
    }
}

impl From<&Utf8Path> for DefinitionSource {
    fn from(path: &Utf8Path) -> Self {
        DefinitionSource::Path(path.to_path_buf())
    }
}

impl From<Utf8PathBuf> for DefinitionSource {
    fn from(path: Utf8PathBuf) -> Self {
        DefinitionSource::Path(path)
    }
}

/// What [`dump_schema`](crate::dump_schema) introspects.
#[derive(Clone, Copy)]
pub enum DumpSource<'a> {
    /// Answer the introspection query locally.
    Schema(&'a Schema),
    /// Send the introspection query through the connection.
    Connection(&'a dyn Connection),
}

impl std::fmt::Debug for DumpSource<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DumpSource::Schema(schema) => f.debug_tuple("Schema").field(&schema.query_type()).finish(),
            DumpSource::Connection(_) => f.write_str("Connection"),
        }
    }
}

impl<'a> From<&'a Schema> for DumpSource<'a> {
    fn from(schema: &'a Schema) -> Self {
        DumpSource::Schema(schema)
    }
}

/// How a string handed to a load operation is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKind {
    /// The string is an introspection document.
    InlineJson,
    /// The string is SDL.
    InlineSdl,
    /// The string names a file.
    FilePath,
}

/// Decides whether `text` is inline introspection JSON or a file path.
///
/// Introspection results are JSON objects, so anything whose first
/// non-blank character is `{` is inline JSON and everything else is a path.
/// A malformed inline document is therefore reported as a parse error
/// instead of a missing file.
pub fn classify_json_text(text: &str) -> TextKind {
    if text.trim_start().starts_with('{') {
        TextKind::InlineJson
    } else {
        TextKind::FilePath
    }
}

/// Decides whether `text` is inline SDL or a file path.
///
/// A single line naming an existing file, or ending in one of the
/// [`DEFINITION_EXTENSIONS`], is a path. Everything else is SDL.
pub fn classify_definition_text(text: &str) -> TextKind {
    let candidate = text.trim();
    if candidate.is_empty() || candidate.contains('\n') {
        return TextKind::InlineSdl;
    }

    let path = Utf8Path::new(candidate);
    if Fs::is_file(path) || is_definition_path(path) {
        TextKind::FilePath
    } else {
        TextKind::InlineSdl
    }
}

/// Whether `path` carries an SDL file extension.
pub fn is_definition_path(path: &Utf8Path) -> bool {
    path.extension()
        .is_some_and(|extension| DEFINITION_EXTENSIONS.contains(&extension))
}
