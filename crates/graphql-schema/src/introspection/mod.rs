//! Conversions between a [`Schema`](crate::Schema) and the response to the
//! standard introspection query.
//!
//! [`Schema::introspect`](crate::Schema::introspect) answers the query
//! locally, and `Schema::try_from` rebuilds a schema from any server's
//! answer. Built-in scalars, introspection types and built-in directives are
//! added on the way out and dropped on the way in.

mod build;
mod execute;
