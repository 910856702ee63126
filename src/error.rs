use std::io;

use camino::Utf8PathBuf;
use codec_std::CodecStdError;
use graphql_connection::ConnectionError;
use graphql_schema::SchemaError;
use serde_json::error::Category;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CodecError>;

/// Everything that can go wrong loading or dumping a schema.
#[derive(Error, Debug)]
pub enum CodecError {
    /// The requested schema file does not exist. Loads report this as
    /// `Ok(None)`; it only surfaces from operations that need the file.
    #[error("no schema found at \"{path}\"")]
    NotFound {
        /// The missing path
        path: Utf8PathBuf,
    },

    /// The input is not well formed JSON or SDL.
    #[error("could not parse schema: {0}")]
    Parse(String),

    /// The input is well formed but does not describe a complete schema.
    #[error("could not build schema: {0}")]
    SchemaBuild(String),

    /// Reading a source or writing a destination failed.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// The connection a schema was dumped through failed.
    #[error(transparent)]
    Connection(#[from] ConnectionError),
}

impl From<SchemaError> for CodecError {
    fn from(error: SchemaError) -> Self {
        match error {
            SchemaError::Parse(message) => CodecError::Parse(message),
            SchemaError::Build(message) => CodecError::SchemaBuild(message),
        }
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(error: serde_json::Error) -> Self {
        match error.classify() {
            Category::Syntax | Category::Eof => CodecError::Parse(error.to_string()),
            Category::Data => CodecError::SchemaBuild(error.to_string()),
            Category::Io => CodecError::Io(error.into()),
        }
    }
}

impl From<CodecStdError> for CodecError {
    fn from(error: CodecStdError) -> Self {
        match error {
            CodecStdError::NotFound { path } => CodecError::NotFound { path: path.into() },
            CodecStdError::EmptyFile { empty_file } => {
                CodecError::Parse(format!("\"{empty_file}\" is an empty file"))
            }
            CodecStdError::AdhocError(error) => CodecError::Io(io::Error::other(error)),
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use speculoos::prelude::*;

    use super::*;

    #[rstest]
    #[case("{ \"data\": ", true)]
    #[case("{ \"data\" 1 }", true)]
    #[case("[1, 2]", false)]
    fn it_classifies_json_errors(#[case] input: &str, #[case] is_parse_error: bool) {
        let error = serde_json::from_str::<introspection_query::IntrospectionResponse>(input)
            .map(|_| ())
            .unwrap_err();

        let error = CodecError::from(error);
        if is_parse_error {
            assert_that!(matches!(error, CodecError::Parse(_))).is_true();
        } else {
            assert_that!(matches!(error, CodecError::SchemaBuild(_))).is_true();
        }
    }

    #[test]
    fn it_maps_schema_errors() {
        assert_that!(matches!(
            CodecError::from(SchemaError::Build("no query type".to_string())),
            CodecError::SchemaBuild(message) if message == "no query type"
        ))
        .is_true();
    }

    #[test]
    fn it_keeps_the_missing_path() {
        let error = CodecError::from(CodecStdError::NotFound {
            path: "schema.json".to_string(),
        });
        assert_that!(error.to_string()).is_equal_to("no schema found at \"schema.json\"".to_string());
    }
}
