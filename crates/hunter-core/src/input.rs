//! The analysis input boundary.
//!
//! Text is bounded to [`MAX_INPUT_CHARS`] characters before it can become an
//! [`AnalysisRequest`]. The backend is not relied on to enforce the bound.

use serde::{Deserialize, Serialize};

use crate::errors::InputError;

/// Maximum number of characters accepted for analysis.
pub const MAX_INPUT_CHARS: usize = 5000;

/// Body of `POST /analyze/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub text: String,
}

impl AnalysisRequest {
    /// Build a request from user text.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Empty`] for blank text and
    /// [`InputError::TooLong`] when the text exceeds [`MAX_INPUT_CHARS`].
    pub fn new(text: impl Into<String>) -> Result<Self, InputError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(InputError::Empty);
        }
        let chars = text.chars().count();
        if chars > MAX_INPUT_CHARS {
            return Err(InputError::TooLong {
                chars,
                max: MAX_INPUT_CHARS,
            });
        }
        Ok(Self { text })
    }
}

/// Editable input that refuses edits past the bound.
///
/// An edit that would exceed the bound is not applied; the previous text stays.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffer {
    text: String,
}

impl InputBuffer {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    /// Replace the buffer contents. Returns `false` if the edit was rejected.
    pub fn set(&mut self, text: impl Into<String>) -> bool {
        let text = text.into();
        if text.chars().count() > MAX_INPUT_CHARS {
            return false;
        }
        self.text = text;
        true
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        MAX_INPUT_CHARS.saturating_sub(self.char_count())
    }

    /// Whether the submit action is enabled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.text.trim().is_empty()
    }

    /// Turn the current contents into a request.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Empty`] when the buffer is blank.
    pub fn to_request(&self) -> Result<AnalysisRequest, InputError> {
        AnalysisRequest::new(self.text.clone())
    }
}
