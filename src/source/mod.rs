use crate::blog::{Comment, PostID, PostRecord};
use async_trait::async_trait;

#[cfg(test)]
pub mod fake;
pub mod http;

/// Anything that failed while pulling posts or comments from upstream.
/// No caller recovers differently per variant; they exist for the logs.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} responded with {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("couldn't decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

#[async_trait]
pub trait PostSource: std::fmt::Debug + Send + Sync {
    async fn posts(&self) -> Result<Vec<PostRecord>, FetchError>;
    async fn post(&self, post_id: PostID) -> Result<PostRecord, FetchError>;
    /// Comments filtered upstream by `postId`
    async fn comments_for(&self, post_id: PostID) -> Result<Vec<Comment>, FetchError>;
}
