use crate::aggregate;
use crate::blog::{Comment, Post, PostID};
use crate::source::FetchError;
use crate::state::SharedState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub(super) struct PostDetail {
    post: Post,
    comments: Vec<Comment>,
}

pub(super) async fn list(State(state): SharedState) -> Result<Json<Vec<Post>>, StatusCode> {
    match aggregate::posts_with_comment_counts(state.source.clone()).await {
        Ok(posts) => Ok(Json(posts)),
        Err(err) => {
            tracing::error!("Error fetching posts: {err}");
            Err(status_for(&err))
        }
    }
}

pub(super) async fn get(
    State(state): SharedState,
    Path(post_id): Path<PostID>,
) -> Result<Json<PostDetail>, StatusCode> {
    match aggregate::post_with_comments(state.source.clone(), post_id).await {
        Ok((post, comments)) => Ok(Json(PostDetail { post, comments })),
        Err(err) => {
            tracing::error!("Error fetching post {post_id}: {err}");
            Err(status_for(&err))
        }
    }
}

fn status_for(err: &FetchError) -> StatusCode {
    match err {
        FetchError::Status { status, .. } if *status == StatusCode::NOT_FOUND => {
            StatusCode::NOT_FOUND
        }
        _ => StatusCode::BAD_GATEWAY,
    }
}
