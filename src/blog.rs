use serde::{Deserialize, Serialize};

pub type PostID = u64;
pub type UserID = u64;
pub type CommentID = u64;

pub const DEFAULT_API_BASE: &str = "https://jsonplaceholder.typicode.com";

pub const LIST_SKELETON_CARDS: usize = 6;
pub const COMMENT_SKELETON_ROWS: usize = 5;
pub const AVATAR_SIZE: u32 = 80;

/// A post exactly as the upstream `/posts` endpoint returns it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    pub user_id: UserID,
    pub id: PostID,
    pub title: String,
    pub body: String,
}

/// A post joined with the number of comments observed for it at fetch time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub user_id: UserID,
    pub id: PostID,
    pub title: String,
    pub body: String,
    pub comments_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub post_id: PostID,
    pub id: CommentID,
    pub name: String,
    pub email: String,
    pub body: String,
}

impl PostRecord {
    pub fn with_comments_count(self, comments_count: usize) -> Post {
        Post {
            user_id: self.user_id,
            id: self.id,
            title: self.title,
            body: self.body,
            comments_count,
        }
    }
}

impl Comment {
    /// Key the comment's identicon is derived from
    pub fn avatar_key(&self) -> String {
        format!("{}{}{}", self.email, self.name, self.id)
    }
}
