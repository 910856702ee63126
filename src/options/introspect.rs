use std::time::Duration;

use clap::Parser;
use graphql_connection::HttpConnection;

use crate::utils::parsers::parse_header;

#[derive(Debug, Parser)]
pub(crate) struct IntrospectOpts {
    /// The endpoint of the GraphQL service to introspect
    pub(crate) endpoint: String,

    /// headers to pass to the endpoint. Values must be key:value pairs.
    /// If a value has a space in it, use quotes around the pair,
    /// ex. -H "Auth:some key"

    // The `value_name` here is for the help text and error messages, to print like
    // --header <KEY:VALUE> rather than the plural field name --header <headers>
    #[arg(value_name = "KEY:VALUE", long = "header", short = 'H', value_parser = parse_header)]
    pub(crate) headers: Vec<(String, String)>,

    /// Seconds to wait for each request before giving up
    #[arg(long, env = "SCHEMA_CODEC_TIMEOUT", default_value_t = 30)]
    pub(crate) timeout: u64,

    /// How many times to retry network failures and server errors
    #[arg(long, env = "SCHEMA_CODEC_RETRIES", default_value_t = 0)]
    pub(crate) retries: u32,
}

impl IntrospectOpts {
    pub(crate) fn connection(&self) -> HttpConnection {
        HttpConnection::new(self.endpoint.as_str())
            .with_headers(self.headers.iter().cloned())
            .with_timeout(Duration::from_secs(self.timeout))
            .with_retries(self.retries)
    }
}
