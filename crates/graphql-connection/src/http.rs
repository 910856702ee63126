use std::{collections::HashMap, fmt, thread, time::Duration};

use backon::{BlockingRetryable, ExponentialBuilder};
use reqwest::{blocking::Client, header::HeaderMap};
use serde_json::{json, Map, Value};

use crate::{headers, Connection, ConnectionError, ExecutionContext};

/// Default timeout for a single request.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Delay before the first retry; every further retry doubles it, up to a minute.
const DEFAULT_BACKOFF_SECS: u64 = 1;

/// Derives per-request headers from the caller's context.
pub type HeaderHook = Box<dyn Fn(&ExecutionContext) -> HashMap<String, String> + Send + Sync>;

/// A [`Connection`] that POSTs documents to a GraphQL endpoint over HTTP.
///
/// Failed requests are retried with exponential backoff when the failure is
/// transient (see [`ConnectionError::is_retryable`]). No retries by default.
pub struct HttpConnection {
    endpoint: String,
    headers: HashMap<String, String>,
    header_hook: Option<HeaderHook>,
    timeout: Duration,
    retries: u32,
    backoff: Duration,
}

impl HttpConnection {
    /// A connection to `endpoint` with a 30 second timeout and no retries.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            headers: HashMap::new(),
            header_hook: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            retries: 0,
            backoff: Duration::from_secs(DEFAULT_BACKOFF_SECS),
        }
    }

    /// Sends `name: value` with every request.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Sends every pair of `headers` with every request.
    #[must_use]
    pub fn with_headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (name, value) in headers {
            self.headers.insert(name.into(), value.into());
        }
        self
    }

    /// Computes extra headers from each request's [`ExecutionContext`].
    ///
    /// They take precedence over headers set with [`with_header`](Self::with_header).
    #[must_use]
    pub fn with_header_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(&ExecutionContext) -> HashMap<String, String> + Send + Sync + 'static,
    {
        self.header_hook = Some(Box::new(hook));
        self
    }

    /// Limits how long a single attempt may take.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Retries transient failures up to `retries` times.
    #[must_use]
    pub const fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    /// Sets the delay before the first retry.
    #[must_use]
    pub const fn with_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }

    fn send_once(
        &self,
        client: &Client,
        headers: &HeaderMap,
        body: &Value,
    ) -> Result<Value, ConnectionError> {
        let response = client
            .post(&self.endpoint)
            .headers(headers.clone())
            .json(body)
            .send()
            .map_err(|e| ConnectionError::Network(e.to_string()))?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "received response");

        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            tracing::error!(status = status.as_u16(), body = %body, "HTTP error response");
            return Err(ConnectionError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let text = response
            .text()
            .map_err(|e| ConnectionError::Network(e.to_string()))?;
        serde_json::from_str(&text).map_err(|e| ConnectionError::Parse(e.to_string()))
    }
}

impl Connection for HttpConnection {
    #[tracing::instrument(skip_all, fields(endpoint = %self.endpoint, operation_name = ?operation_name))]
    fn execute(
        &self,
        document: &str,
        operation_name: Option<&str>,
        variables: &Map<String, Value>,
        context: &ExecutionContext,
    ) -> Result<Value, ConnectionError> {
        let derived = self.header_hook.as_ref().map(|hook| hook(context));
        let headers = headers::build(std::iter::once(&self.headers).chain(derived.as_ref()))?;
        let body = json!({
            "query": document,
            "operationName": operation_name,
            "variables": variables,
        });

        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| ConnectionError::Network(format!("failed to create HTTP client: {e}")))?;

        let backoff = ExponentialBuilder::default()
            .with_min_delay(self.backoff)
            .with_max_times(self.retries as usize);

        (|| self.send_once(&client, &headers, &body))
            .retry(backoff)
            .sleep(thread::sleep)
            .when(ConnectionError::is_retryable)
            .notify(|e, delay| {
                tracing::warn!(error = %e, delay_ms = delay.as_millis() as u64, "request failed, retrying");
            })
            .call()
            .inspect_err(|e| tracing::warn!(error = %e, "request failed"))
    }
}

impl fmt::Debug for HttpConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpConnection")
            .field("endpoint", &self.endpoint)
            .field("headers", &self.headers.keys().collect::<Vec<_>>())
            .field("header_hook", &self.header_hook.is_some())
            .field("timeout", &self.timeout)
            .field("retries", &self.retries)
            .field("backoff", &self.backoff)
            .finish()
    }
}
