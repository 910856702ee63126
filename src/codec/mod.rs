//! Conversions between a [`Schema`](graphql_schema::Schema), its
//! introspection result and its SDL, plus the file and stream plumbing
//! around them.

mod dump;
mod load;
mod source;

pub use dump::{
    dump_schema, dump_schema_definition, dump_schema_definition_to_path, dump_schema_to_path,
    write_introspection, write_introspection_to_path,
};
pub use load::{load_schema, load_schema_from_definition};
pub use source::{
    classify_definition_text, classify_json_text, is_definition_path, DefinitionSource,
    DumpSource, SchemaSource, TextKind, DEFINITION_EXTENSIONS,
};
