//! Wire types for the Dugout API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of user-generated content a draft carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Post,
    Comment,
    Profile,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Post => "post",
            ContentType::Comment => "comment",
            ContentType::Profile => "profile",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContentType::Post => "Post",
            ContentType::Comment => "Comment",
            ContentType::Profile => "Profile",
        }
    }

    pub fn variants() -> &'static [ContentType] {
        &[ContentType::Post, ContentType::Comment, ContentType::Profile]
    }

    pub fn from_value(value: &str) -> Option<ContentType> {
        ContentType::variants()
            .iter()
            .copied()
            .find(|t| t.as_str() == value)
    }
}

/// User-authored content pending a moderation decision.
///
/// Transient: one draft backs exactly one submission attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentDraft {
    pub content_type: ContentType,
    /// Present for posts only.
    pub title: Option<String>,
    pub body: String,
}

impl ContentDraft {
    pub fn post(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            content_type: ContentType::Post,
            title: Some(title.into()),
            body: body.into(),
        }
    }

    pub fn comment(body: impl Into<String>) -> Self {
        Self {
            content_type: ContentType::Comment,
            title: None,
            body: body.into(),
        }
    }

    pub fn profile(body: impl Into<String>) -> Self {
        Self {
            content_type: ContentType::Profile,
            title: None,
            body: body.into(),
        }
    }

    /// True when the body is empty or whitespace-only. Blank drafts are never
    /// submitted for moderation.
    pub fn is_blank(&self) -> bool {
        self.body.trim().is_empty()
    }
}

/// Outcome of a moderation check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerdictResult {
    Approved,
    Rejected,
    /// Catch-all for wire values this client does not recognize. The
    /// submission workflow blocks on anything that is not `Approved`, so an
    /// unknown value can never publish content.
    #[serde(other)]
    Unknown,
}

impl VerdictResult {
    pub fn is_approved(&self) -> bool {
        matches!(self, VerdictResult::Approved)
    }
}

/// The moderation service's decision on one draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModerationVerdict {
    /// Opaque correlation identifier, unique per check.
    pub moderation_id: String,
    pub result: VerdictResult,
    /// Human-readable explanation of the decision.
    pub reason: String,
    /// Confidence score, conventionally in [0, 1]. Not enforced client-side.
    pub score: f64,
}

/// One entry of the caller's moderation history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerdictRecord {
    pub moderation_id: String,
    /// The text that was checked.
    pub content: String,
    pub result: VerdictResult,
    pub reason: String,
    pub score: f64,
    /// Unix epoch seconds.
    pub created_at: i64,
}

impl VerdictRecord {
    pub fn created_at_utc(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.created_at, 0).unwrap_or(DateTime::UNIX_EPOCH)
    }
}

/// Aggregate moderation statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModerationStats {
    pub total_count: i64,
    pub approved_count: i64,
    pub rejected_count: i64,
    /// Fraction of checks approved, in [0, 1].
    pub approval_rate: f64,
}

/// A discussion board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub board_id: String,
    pub name: String,
    pub description: String,
    /// Unix epoch seconds.
    pub created_at: i64,
}

/// Payload for creating a post on a board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
}

/// A persisted post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub post_id: String,
    pub board_id: String,
    pub title: String,
    pub content: String,
    /// Unix epoch seconds.
    pub created_at: i64,
}

impl Post {
    pub fn created_at_utc(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.created_at, 0).unwrap_or(DateTime::UNIX_EPOCH)
    }
}

/// Uniform wrapper around every Dugout API response body.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub status: String,
    pub data: T,
}
