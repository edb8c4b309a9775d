use super::{FetchError, PostSource};
use crate::blog::{Comment, PostID, PostRecord};
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

const USER_AGENT: &str = concat!("postview/", env!("CARGO_PKG_VERSION"));

/// Reads posts and comments from a JSONPlaceholder-style REST API
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    base: String,
}

impl HttpSource {
    /// `timeout` of `None` leaves reqwest's default (no overall timeout) in place
    pub fn new(base: Url, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            // `Url::join` would drop a path prefix like `/api`
            base: base.as_str().trim_end_matches('/').to_owned(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: String,
        query: &[(&str, String)],
    ) -> Result<T, FetchError> {
        tracing::debug!("GET {url} {query:?}");

        let response = match self.client.get(&url).query(query).send().await {
            Ok(it) => it,
            Err(source) => return Err(FetchError::Transport { url, source }),
        };

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status { url, status });
        }

        let body = match response.bytes().await {
            Ok(it) => it,
            Err(source) => return Err(FetchError::Transport { url, source }),
        };

        serde_json::from_slice(&body).map_err(|source| FetchError::Decode { url, source })
    }
}

#[async_trait]
impl PostSource for HttpSource {
    async fn posts(&self) -> Result<Vec<PostRecord>, FetchError> {
        self.get_json(self.endpoint("posts"), &[]).await
    }

    async fn post(&self, post_id: PostID) -> Result<PostRecord, FetchError> {
        self.get_json(self.endpoint(&format!("posts/{post_id}")), &[])
            .await
    }

    async fn comments_for(&self, post_id: PostID) -> Result<Vec<Comment>, FetchError> {
        self.get_json(
            self.endpoint("comments"),
            &[("postId", post_id.to_string())],
        )
        .await
    }
}
