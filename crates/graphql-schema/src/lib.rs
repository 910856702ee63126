#![forbid(unsafe_code)]
#![deny(missing_debug_implementations, nonstandard_style)]
#![warn(future_incompatible, unreachable_pub, rust_2018_idioms)]

//! An in-memory GraphQL type system and its two textual forms.
//!
//! A [`Schema`] can be
//! - parsed from SDL with [`Schema::parse`] and printed back with
//!   [`Schema::to_sdl`],
//! - introspected locally with [`Schema::introspect`], and
//! - rebuilt from any server's introspection response with `Schema::try_from`.

mod builtins;
mod decode;
mod definition;
mod encode;
mod error;
mod introspection;
mod schema;

pub use builtins::{
    is_built_in_directive, is_built_in_type, BUILT_IN_DIRECTIVES, BUILT_IN_SCALARS,
};
pub use definition::*;
pub use error::SchemaError;
pub use schema::Schema;

pub use introspection_query::{IntrospectionResponse, INTROSPECTION_QUERY, OPERATION_NAME};
