use crate::aggregate;
use crate::blog::PostID;
use crate::render::{page, post};
use crate::state::SharedState;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};

pub(super) async fn get(State(state): SharedState, Path(post_id): Path<String>) -> Response {
    let Ok(post_id) = post_id.parse::<PostID>() else {
        return super::not_found().await.into_response();
    };
    let source = state.source.clone();

    let shell = format!(
        "{}{}",
        page::open(&format!("Post {post_id}")),
        page::loading(&post::post_view_skeleton())
    );

    super::streamed(shell, async move {
        let content = match aggregate::post_with_comments(source, post_id).await {
            Ok((detail, comments)) => post::post_view(&detail, &comments),
            Err(err) => {
                tracing::error!("Error fetching post {post_id}: {err}");
                post::error_view()
            }
        };
        page::resolve(&content)
    })
}
