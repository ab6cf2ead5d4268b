//! Moderation gateway: verdict checks plus history and statistics reads.

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::transport::ApiClient;
use crate::types::{ContentDraft, ContentType, ModerationStats, ModerationVerdict, VerdictRecord};

/// Wire body for a moderation check.
#[derive(Debug, Serialize)]
struct CheckRequest<'a> {
    content: &'a str,
    content_type: ContentType,
}

/// Thin gateway translating moderation operations into transport calls.
///
/// Holds no state between calls.
#[derive(Debug, Clone)]
pub struct ModerationApi {
    api: ApiClient,
}

impl ModerationApi {
    pub(crate) fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Submit a draft for a verdict.
    ///
    /// Has no side effects server-side and is safe to retry. A failure here
    /// means "no verdict", never "approved" — callers must withhold
    /// publication.
    pub async fn check(&self, draft: &ContentDraft) -> Result<ModerationVerdict> {
        let request = CheckRequest {
            content: &draft.body,
            content_type: draft.content_type,
        };
        let verdict: ModerationVerdict = self.api.post("/moderation/check", &request).await?;
        debug!(
            moderation_id = %verdict.moderation_id,
            result = ?verdict.result,
            score = verdict.score,
            "moderation check completed"
        );
        Ok(verdict)
    }

    /// The caller's verdict history, in the order the server returns it.
    pub async fn history(&self) -> Result<Vec<VerdictRecord>> {
        self.api.get("/moderation/history").await
    }

    /// Aggregate moderation statistics.
    pub async fn stats(&self) -> Result<ModerationStats> {
        self.api.get("/moderation/stats").await
    }
}
