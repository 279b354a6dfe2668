//! The network seam between the gateway and the completion endpoint.

use std::time::Duration;

use crate::wire::ChatRequest;

/// Everything needed to send one completion request.
#[derive(Debug, Clone, Copy)]
pub struct CompletionCall<'a> {
    pub endpoint: &'a str,
    pub api_key: &'a str,
    /// Sent as `X-Title` when non-empty.
    pub app_title: &'a str,
    pub body: &'a ChatRequest,
}

/// Sends a completion request and hands back the raw HTTP response.
///
/// Status handling and body decoding stay in the gateway, so an
/// implementation only performs the exchange.
pub trait Transport: Send + Sync {
    fn send(
        &self,
        call: CompletionCall<'_>,
    ) -> impl Future<Output = Result<reqwest::Response, reqwest::Error>> + Send;
}

/// [`Transport`] backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    /// Build the client. `timeout` of `None` keeps reqwest's default.
    ///
    /// # Errors
    ///
    /// Returns the `reqwest::Error` if the TLS backend cannot be initialised.
    pub fn new(timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder =
            reqwest::Client::builder().user_agent(concat!("venture/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
        })
    }
}

impl Transport for HttpTransport {
    fn send(
        &self,
        call: CompletionCall<'_>,
    ) -> impl Future<Output = Result<reqwest::Response, reqwest::Error>> + Send {
        let mut request = self
            .http
            .post(call.endpoint)
            .bearer_auth(call.api_key)
            .json(call.body);
        if !call.app_title.is_empty() {
            request = request.header("X-Title", call.app_title);
        }
        request.send()
    }
}
