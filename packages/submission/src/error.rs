//! Failure classification for the submission workflow.
//!
//! A failed attempt is classified by the step that failed, because the two
//! steps leave the system in different states: a moderation failure means
//! nothing was created, a creation failure means the content cleared
//! moderation but was never published.

use thiserror::Error;

/// What went wrong during a submission attempt.
///
/// Carries owned messages rather than source errors so workflow state stays
/// `Clone` for UI signals.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmissionError {
    /// The moderation check could not be completed. No verdict means no
    /// publication.
    #[error("moderation unavailable: {0}")]
    ModerationUnavailable(String),

    /// Moderation approved the content but the creation call failed. The
    /// content is not published.
    #[error("content creation failed: {0}")]
    ContentCreationFailed(String),
}

impl SubmissionError {
    /// User-facing message for the failure banner.
    pub fn message(&self) -> &str {
        match self {
            SubmissionError::ModerationUnavailable(msg) => msg,
            SubmissionError::ContentCreationFailed(msg) => msg,
        }
    }
}
