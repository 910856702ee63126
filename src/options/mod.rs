mod introspect;
mod output;
mod schema;

pub(crate) use introspect::IntrospectOpts;
pub(crate) use output::OutputOpts;
pub(crate) use schema::SchemaOpt;
