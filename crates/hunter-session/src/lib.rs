//! # hunter-session
//!
//! Who is logged in, for the lifetime of the process.
//!
//! [`SessionStore`] owns a [`Backend`] and a watch channel holding the
//! current [`SessionState`]. Readers take snapshots or subscribe; only the
//! store's own operations write. There is no global instance: construct one
//! and pass it to whatever needs it.
//!
//! [`submit_analysis`] runs the analysis flow on top of a store, turning
//! backend failures into an [`AnalysisFailure`] with a user-facing message.

pub mod backend;
pub mod error;
pub mod flow;
pub mod store;

pub use backend::Backend;
pub use error::SessionError;
pub use flow::{AnalysisFailure, submit_analysis};
pub use store::{SessionState, SessionStore};
