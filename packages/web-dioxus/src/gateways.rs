//! Bridges between the submission workflow and the Dugout API.
//!
//! The workflow's gateway traits are implemented over this app's server
//! functions, so the browser never talks to the Dugout API directly.

use anyhow::Result;
use async_trait::async_trait;
use dioxus::prelude::*;
use dugout_client::{ContentDraft, ModerationVerdict, NewPost, Post};
use submission::{ModerationGate, PostWriter};
use tracing::warn;

/// Workflow gateways backed by this app's server functions.
#[derive(Clone, Copy, Default)]
pub struct ServerGateways;

#[async_trait(?Send)]
impl ModerationGate for ServerGateways {
    async fn check_content(&self, draft: &ContentDraft) -> Result<ModerationVerdict> {
        run_moderation_check(draft.clone()).await.map_err(|e| {
            warn!(error = %e, "moderation check server call failed");
            anyhow::anyhow!("{}", e)
        })
    }
}

#[async_trait(?Send)]
impl PostWriter for ServerGateways {
    async fn create_post(&self, board_id: &str, post: &NewPost) -> Result<Post> {
        publish_post(board_id.to_string(), post.clone())
            .await
            .map_err(|e| {
                warn!(error = %e, board_id, "publish server call failed");
                anyhow::anyhow!("{}", e)
            })
    }
}

/// Run a moderation check on a draft.
#[server]
pub async fn run_moderation_check(draft: ContentDraft) -> Result<ModerationVerdict, ServerFnError> {
    let client = dugout_client::DugoutClient::from_env();
    client
        .moderation()
        .check(&draft)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

/// Publish a post to a board.
#[server]
pub async fn publish_post(board_id: String, post: NewPost) -> Result<Post, ServerFnError> {
    let client = dugout_client::DugoutClient::from_env();
    client
        .boards()
        .create_post(&board_id, &post)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}
