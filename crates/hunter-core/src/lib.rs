//! # hunter-core
//!
//! Core types shared by every Claim Hunter crate:
//! - [`User`] and the login/signup forms with their validation rules
//! - [`AnalysisRequest`] and the input bound applied before submission
//! - [`AnalysisResult`] in its canonical shape, plus the legacy shape it
//!   replaces
//! - [`HistoryEntry`] records returned by the history endpoints
//! - Validation error types
//!
//! Nothing here performs I/O.

pub mod analysis;
pub mod errors;
pub mod history;
pub mod ids;
pub mod input;
pub mod user;

pub use analysis::{AnalysisResult, Claim, Fallacy, LegacyAnalysisResult, RiskBand};
pub use errors::{FormError, InputError};
pub use history::HistoryEntry;
pub use ids::RecordId;
pub use input::{AnalysisRequest, InputBuffer, MAX_INPUT_CHARS};
pub use user::{Credentials, Registration, SignupForm, User};
