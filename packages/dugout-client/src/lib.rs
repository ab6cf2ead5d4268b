//! Pure Dugout REST API client.
//!
//! A minimal client for the Dugout forum API. Covers the moderation pipeline
//! (verdict checks, history, statistics) and the boards surface (board
//! listings, post creation).
//!
//! # Example
//!
//! ```rust,ignore
//! use dugout_client::{ContentDraft, DugoutClient};
//!
//! let client = DugoutClient::from_env();
//!
//! let draft = ContentDraft::post("Trade rumors", "Who says no?");
//! let verdict = client.moderation().check(&draft).await?;
//! if verdict.result.is_approved() {
//!     println!("cleared for publication: {}", verdict.moderation_id);
//! }
//! ```

pub mod boards;
pub mod error;
pub mod moderation;
pub mod transport;
pub mod types;

pub use boards::BoardsApi;
pub use error::{ApiError, Result};
pub use moderation::ModerationApi;
pub use transport::{ApiClient, ApiConfig};
pub use types::{
    Board, ContentDraft, ContentType, ModerationStats, ModerationVerdict, NewPost, Post,
    VerdictRecord, VerdictResult,
};

/// Entry point bundling the per-surface gateways over one shared transport.
#[derive(Debug, Clone)]
pub struct DugoutClient {
    api: ApiClient,
}

impl DugoutClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            api: ApiClient::new(config),
        }
    }

    /// Build from `API_URL` and `API_TOKEN`, falling back to the local
    /// development server.
    pub fn from_env() -> Self {
        Self::new(ApiConfig::from_env())
    }

    pub fn moderation(&self) -> ModerationApi {
        ModerationApi::new(self.api.clone())
    }

    pub fn boards(&self) -> BoardsApi {
        BoardsApi::new(self.api.clone())
    }
}
