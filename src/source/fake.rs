use super::{FetchError, PostSource};
use crate::blog::{Comment, PostID, PostRecord};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// In-memory upstream for tests
#[derive(Debug, Default)]
pub struct FakeSource {
    pub posts: Vec<PostRecord>,
    pub comments: Vec<Comment>,
    pub posts_fail: bool,
    pub failing_comments: HashSet<PostID>,
    pub comment_fetches: AtomicUsize,
    /// times `comments_for` yields to the runtime before answering, per post
    pub comment_delays: HashMap<PostID, u32>,
    /// post ids in the order their comment fetches finished
    pub completed: Mutex<Vec<PostID>>,
}

fn failure(url: String) -> FetchError {
    FetchError::Status {
        url,
        status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl FakeSource {
    pub fn new(posts: Vec<PostRecord>, comments: Vec<Comment>) -> Self {
        Self {
            posts,
            comments,
            ..Self::default()
        }
    }

    pub fn comment_fetches(&self) -> usize {
        self.comment_fetches.load(Ordering::SeqCst)
    }

    pub fn completion_order(&self) -> Vec<PostID> {
        self.completed
            .lock()
            .expect("completion log should not be poisoned")
            .clone()
    }
}

#[async_trait]
impl PostSource for FakeSource {
    async fn posts(&self) -> Result<Vec<PostRecord>, FetchError> {
        if self.posts_fail {
            return Err(failure(String::from("fake:/posts")));
        }
        Ok(self.posts.clone())
    }

    async fn post(&self, post_id: PostID) -> Result<PostRecord, FetchError> {
        if self.posts_fail {
            return Err(failure(format!("fake:/posts/{post_id}")));
        }
        self.posts
            .iter()
            .find(|post| post.id == post_id)
            .cloned()
            .ok_or_else(|| FetchError::Status {
                url: format!("fake:/posts/{post_id}"),
                status: reqwest::StatusCode::NOT_FOUND,
            })
    }

    async fn comments_for(&self, post_id: PostID) -> Result<Vec<Comment>, FetchError> {
        self.comment_fetches.fetch_add(1, Ordering::SeqCst);
        for _ in 0..self.comment_delays.get(&post_id).copied().unwrap_or(0) {
            tokio::task::yield_now().await;
        }
        self.completed
            .lock()
            .expect("completion log should not be poisoned")
            .push(post_id);
        if self.failing_comments.contains(&post_id) {
            return Err(failure(format!("fake:/comments?postId={post_id}")));
        }
        Ok(self
            .comments
            .iter()
            .filter(|comment| comment.post_id == post_id)
            .cloned()
            .collect())
    }
}

pub fn record(id: PostID, title: &str) -> PostRecord {
    PostRecord {
        user_id: 1,
        id,
        title: String::from(title),
        body: title.to_lowercase(),
    }
}

pub fn comment(post_id: PostID, id: u64) -> Comment {
    Comment {
        post_id,
        id,
        name: format!("commenter {id}"),
        email: format!("c{id}@example.com"),
        body: format!("comment {id} on post {post_id}"),
    }
}
