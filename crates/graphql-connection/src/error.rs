use thiserror::Error;

/// Failures executing a document through a [`Connection`](crate::Connection).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConnectionError {
    /// The request never produced a response: DNS, connect, TLS or timeout.
    #[error("could not reach the GraphQL endpoint: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("the GraphQL endpoint responded with HTTP {status}: {body}")]
    Http {
        /// Response status code.
        status: u16,
        /// Response body, possibly empty.
        body: String,
    },

    /// The response body is not JSON.
    #[error("could not parse the response as JSON: {0}")]
    Parse(String),

    /// A configured or context-derived header cannot be sent.
    #[error("invalid header {name}: {reason}")]
    InvalidHeader {
        /// Header name as given.
        name: String,
        /// Why it was rejected.
        reason: String,
    },
}

impl ConnectionError {
    /// Network failures and 5xx responses may succeed when tried again.
    pub const fn is_retryable(&self) -> bool {
        match self {
            ConnectionError::Network(_) => true,
            ConnectionError::Http { status, .. } => *status >= 500,
            ConnectionError::Parse(_) | ConnectionError::InvalidHeader { .. } => false,
        }
    }
}
