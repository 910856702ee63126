#![deny(missing_debug_implementations, nonstandard_style)]
#![warn(missing_docs, future_incompatible, unreachable_pub, rust_2018_idioms)]

//! How `schema-codec` talks to a GraphQL service it does not hold in memory.
//!
//! A [`Connection`] executes a document and hands back the raw JSON response.
//! The [`ExecutionContext`] given to [`Connection::execute`] is forwarded
//! untouched to anything the connection consults while building the request,
//! such as the header hook of [`HttpConnection`].

mod context;
mod error;
mod headers;
mod http;

pub use context::ExecutionContext;
pub use error::ConnectionError;
pub use http::{HeaderHook, HttpConnection};

use serde_json::{Map, Value};

/// Something that can execute a GraphQL document.
pub trait Connection {
    /// Executes `document` and returns the response body as JSON.
    ///
    /// `context` must reach every hook the connection calls exactly as given.
    fn execute(
        &self,
        document: &str,
        operation_name: Option<&str>,
        variables: &Map<String, Value>,
        context: &ExecutionContext,
    ) -> Result<Value, ConnectionError>;
}

impl<C: Connection + ?Sized> Connection for &C {
    fn execute(
        &self,
        document: &str,
        operation_name: Option<&str>,
        variables: &Map<String, Value>,
        context: &ExecutionContext,
    ) -> Result<Value, ConnectionError> {
        (**self).execute(document, operation_name, variables, context)
    }
}
