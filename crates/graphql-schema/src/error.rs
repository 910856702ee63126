use thiserror::Error;

/// Failures turning SDL or an introspection result into a [`Schema`](crate::Schema).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// The SDL is not syntactically valid GraphQL.
    #[error("could not parse SDL: {0}")]
    Parse(String),

    /// The input is well formed but does not describe a usable schema.
    #[error("could not build schema: {0}")]
    Build(String),
}
