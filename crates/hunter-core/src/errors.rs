//! Validation errors raised before any request leaves the client.

use thiserror::Error;

/// Rejected analysis input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Nothing but whitespace was submitted.
    #[error("Please enter some text to analyze")]
    Empty,

    /// The text exceeds the input bound.
    #[error("Text is too long ({chars} / {max} characters)")]
    TooLong { chars: usize, max: usize },
}

/// Rejected login or signup form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please fill in all fields")]
    MissingFields,

    #[error("Passwords do not match")]
    PasswordMismatch,
}
