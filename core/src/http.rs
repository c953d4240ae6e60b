//! HTTP transport types and the blocking transport used by the client.
//!
//! # Design
//! `HttpRequest` and `HttpResponse` describe the round-trip as plain data, so
//! URL building and body decoding stay free of I/O and can be tested without
//! a network. The `Transport` trait is the single seam where bytes actually
//! move; `UreqTransport` is the production implementation.
//!
//! Every call carries a `RequestContext`. Its deadline belongs to the caller,
//! not to the client, so one client can serve callers with different time
//! budgets.

use std::time::{Duration, Instant};

use crate::error::ApiError;

/// A GET request described as plain data.
///
/// Built by `UrlBuilder::build_*` methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// Name of the vendor operation, used for logging.
    pub operation: &'static str,
    pub url: String,
}

impl HttpRequest {
    /// The URL without its query string.
    ///
    /// Queries carry access tokens and app secrets, so this is the form that
    /// goes into logs and error messages.
    pub fn endpoint(&self) -> &str {
        self.url.split('?').next().unwrap_or(&self.url)
    }
}

/// An HTTP response described as plain data.
///
/// The body is kept as raw bytes. The vendor does not always answer in
/// UTF-8, and an undecodable body is a decode failure rather than a
/// transport one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// The body as text, with invalid UTF-8 replaced.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Per-call deadline supplied by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestContext {
    deadline: Option<Instant>,
}

impl RequestContext {
    /// A context with no deadline. Requests run until the transport's own
    /// timeout.
    pub fn background() -> Self {
        Self::default()
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            deadline: Some(Instant::now() + timeout),
        }
    }

    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            deadline: Some(deadline),
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Time left before the deadline. `None` when there is no deadline.
    /// Returns `Some(Duration::ZERO)` once the deadline has passed.
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }

    pub fn is_expired(&self) -> bool {
        self.remaining().is_some_and(|left| left.is_zero())
    }
}

/// Executes a single GET round-trip.
///
/// Implementations must be safe to share between threads: the client holds
/// no per-call state, so concurrent calls all go through the same transport.
pub trait Transport: Send + Sync {
    fn execute(&self, ctx: &RequestContext, request: &HttpRequest) -> Result<HttpResponse, ApiError>;
}

/// Blocking transport backed by a shared `ureq::Agent`.
///
/// HTTP status codes are returned as data rather than errors. The vendor
/// reports failures inside the body, so the body is decoded whatever the
/// status.
///
/// The configured timeout is a ceiling. A caller's deadline can shorten a
/// request but never lengthen it past that bound.
#[derive(Debug, Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
    timeout: Duration,
}

impl UreqTransport {
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(timeout))
            .build()
            .new_agent();
        Self { agent, timeout }
    }

    /// Timeout for one request under `ctx`.
    pub fn effective_timeout(&self, ctx: &RequestContext) -> Duration {
        match ctx.remaining() {
            Some(left) => left.min(self.timeout),
            None => self.timeout,
        }
    }
}

impl Transport for UreqTransport {
    fn execute(&self, ctx: &RequestContext, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut response = self
            .agent
            .get(&request.url)
            .config()
            .timeout_global(Some(self.effective_timeout(ctx)))
            .build()
            .call()
            .map_err(|e| ApiError::transport(request.endpoint(), e))?;

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_vec()
            .map_err(|e| ApiError::transport(request.endpoint(), e))?;

        Ok(HttpResponse { status, body })
    }
}
