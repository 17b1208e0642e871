//! Storefront error types.

use basket_commerce::CommerceError;
use basket_data::FetchError;
use thiserror::Error;

/// Errors surfaced by storefront operations.
///
/// Every variant is recoverable: the step that issued the request stays
/// where it is, the form remains editable, and retry is simply re-invoking
/// the submission. Nothing is retried automatically.
#[derive(Error, Debug)]
pub enum StorefrontError {
    /// The request never completed (no response from the server).
    #[error("Network failure: {0}")]
    Network(String),

    /// The server answered with a non-2xx status. `message` is the
    /// server's own wording, passed through verbatim.
    #[error("Server rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },

    /// Client-side validation failed; no request was sent.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A submission is already in flight; no duplicate request was sent.
    #[error("A submission is already in flight")]
    SubmissionInFlight,

    /// The checkout has no address on file yet.
    #[error("No address on file for this checkout")]
    MissingAddress,

    /// Domain error from the commerce core.
    #[error("Commerce error: {0}")]
    Commerce(CommerceError),
}

impl From<FetchError> for StorefrontError {
    fn from(e: FetchError) -> Self {
        match e {
            FetchError::RequestError(msg) => StorefrontError::Network(msg),
            FetchError::HttpError { status, message } => {
                StorefrontError::Rejected { status, message }
            }
            FetchError::ParseError(msg) | FetchError::JsonError(msg) => {
                StorefrontError::Network(msg)
            }
        }
    }
}

impl From<CommerceError> for StorefrontError {
    fn from(e: CommerceError) -> Self {
        match e {
            CommerceError::ValidationError(msg) => StorefrontError::Validation(msg),
            CommerceError::SubmissionInFlight => StorefrontError::SubmissionInFlight,
            other => StorefrontError::Commerce(other),
        }
    }
}
