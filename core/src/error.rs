//! Error types for the Banggood API client.
//!
//! # Design
//! Failures are split by where they happen: the request never produced a
//! response (`Transport`), the response body did not match the expected shape
//! (`Decode`), or the operation has no send path at all (`NotImplemented`).
//! `PaginationStalled` is raised only by the page aggregators.
//!
//! The vendor's in-body `code` / `errMsg` fields are not errors at this level.
//! They are decoded into the response types and left to the caller.

use thiserror::Error;

/// Errors returned by `BanggoodClient` operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be built or sent, or the caller's deadline
    /// expired before a response was read.
    #[error("request to {endpoint} failed: {message}")]
    Transport { endpoint: String, message: String },

    /// The response body is not JSON or does not fit the expected shape.
    ///
    /// `body` holds the raw payload so callers can still look at what the
    /// vendor sent.
    #[error("failed to decode response body: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        body: String,
    },

    /// The operation is declared but has no send path.
    #[error("{operation} is not implemented")]
    NotImplemented { operation: &'static str },

    /// A paginated listing reported a page number that did not advance.
    #[error("{operation} stalled at page {page} of {page_total}")]
    PaginationStalled {
        operation: &'static str,
        page: u32,
        page_total: u32,
    },
}

impl ApiError {
    pub(crate) fn transport(endpoint: &str, message: impl ToString) -> Self {
        ApiError::Transport {
            endpoint: endpoint.to_string(),
            message: message.to_string(),
        }
    }
}
