//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in commerce operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Invalid quantity (must be a positive integer).
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Invalid checkout state transition.
    #[error("Invalid checkout transition from {from} to {to}")]
    InvalidCheckoutTransition { from: String, to: String },

    /// A submission is already in flight.
    #[error("A submission is already in flight")]
    SubmissionInFlight,

    /// Cart is empty where at least one line is required.
    #[error("Cart is empty")]
    EmptyCart,

    /// Client-side validation failed.
    #[error("Validation error: {0}")]
    ValidationError(String),
}
