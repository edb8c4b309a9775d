use crate::aggregate;
use crate::render::{page, post};
use crate::state::SharedState;
use axum::extract::State;
use axum::response::Response;

const HEADING: &str = "<h1 class=\"page-title\">List of the all Posts</h1>\n";

pub(super) async fn get(State(state): SharedState) -> Response {
    let source = state.source.clone();

    // the heading lives inside the loading wrapper so an error view replaces it too
    let shell = format!(
        "{}{}",
        page::open("Posts"),
        page::loading(&format!("{HEADING}{}", post::post_list_skeleton()))
    );

    super::streamed(shell, async move {
        let content = match aggregate::posts_with_comment_counts(source).await {
            Ok(posts) => {
                tracing::info!("Rendering {} posts", posts.len());
                format!("{HEADING}{}", post::post_list(&posts))
            }
            Err(err) => {
                tracing::error!("Error fetching posts: {err}");
                post::error_view()
            }
        };
        page::resolve(&content)
    })
}
