//! Load and dump GraphQL schemas.
//!
//! A schema moves between three forms: an in-memory [`Schema`], the JSON
//! result of the standard introspection query, and SDL text. The `load_*`
//! functions build a [`Schema`] from any of them, reading files when given
//! paths; the `dump_*` functions go the other way, optionally writing to a
//! stream or file. Remote schemas are reached through a
//! [`Connection`](graphql_connection::Connection).
//!
//! ```no_run
//! use schema_codec::{dump_schema_definition, load_schema};
//!
//! # fn main() -> schema_codec::Result<()> {
//! if let Some(schema) = load_schema("schema.json")? {
//!     println!("{}", dump_schema_definition(&schema, None)?);
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
mod codec;
mod command;
mod error;
mod options;
mod utils;

pub use codec::*;
pub use error::{CodecError, Result};

pub use graphql_connection::{Connection, ConnectionError, ExecutionContext, HttpConnection};
pub use graphql_schema::{Schema, SchemaError, INTROSPECTION_QUERY, OPERATION_NAME};

pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
