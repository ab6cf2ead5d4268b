//! Boards gateway: board listings and post creation.

use tracing::debug;

use crate::error::Result;
use crate::transport::ApiClient;
use crate::types::{Board, NewPost, Post};

/// Gateway for boards and the posts that live on them.
#[derive(Debug, Clone)]
pub struct BoardsApi {
    api: ApiClient,
}

impl BoardsApi {
    pub(crate) fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Every board, in the server's display order.
    pub async fn list_boards(&self) -> Result<Vec<Board>> {
        self.api.get("/boards").await
    }

    /// A single board by id.
    pub async fn get_board(&self, board_id: &str) -> Result<Board> {
        self.api.get(&format!("/boards/{board_id}")).await
    }

    /// Posts on a board, newest first.
    pub async fn list_posts(&self, board_id: &str) -> Result<Vec<Post>> {
        self.api.get(&format!("/boards/{board_id}/posts")).await
    }

    /// Publish a post to a board.
    ///
    /// Not idempotent: retrying a timed-out call can publish twice. Callers
    /// that cannot tolerate duplicates must surface the failure instead of
    /// retrying.
    pub async fn create_post(&self, board_id: &str, post: &NewPost) -> Result<Post> {
        let created: Post = self
            .api
            .post(&format!("/boards/{board_id}/posts"), post)
            .await?;
        debug!(post_id = %created.post_id, board_id = %created.board_id, "post created");
        Ok(created)
    }
}
