//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. The
//! library builds `HttpRequest` values and parses `HttpResponse` values
//! without ever touching the network — the embedding application supplies a
//! [`Transport`] that executes the actual I/O. This separation keeps the
//! client and store deterministic and easy to test: unit tests script
//! responses, integration tests plug in a real HTTP agent.

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by `TodoClient::build_*` methods and handed to a [`Transport`]
/// for execution.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Produced by a [`Transport`] after executing an `HttpRequest`, then passed
/// to `TodoClient::parse_*` methods for status checking and deserialization.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

/// Executes an `HttpRequest` against the network and returns the response.
///
/// Implementations must return `Ok` for any response the server produced,
/// 4xx/5xx included — status interpretation belongs to the client. `Err` is
/// reserved for failures where no response exists at all (connection refused,
/// DNS failure, broken pipe).
pub trait Transport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// A transport-level failure: the request never produced an HTTP response.
#[derive(Debug, Clone)]
pub struct TransportError(pub String);

impl std::fmt::Display for TransportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for TransportError {}
