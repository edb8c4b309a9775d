use crate::render::{page, post};
use crate::state::NestedRouter;
use axum::body::Body;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use futures::StreamExt;

mod home;
mod post_view;

pub fn route() -> NestedRouter {
    axum::Router::new()
        .route("/", get(home::get))
        .route("/post/:id", get(post_view::get))
}

pub async fn not_found() -> (StatusCode, Html<String>) {
    (
        StatusCode::NOT_FOUND,
        Html(page::document("Error", &post::error_view())),
    )
}

/// Sends `shell` immediately and `rest` once it resolves, so the skeleton in
/// `shell` is on screen while upstream data is still loading
fn streamed<F>(shell: String, rest: F) -> Response
where
    F: std::future::Future<Output = String> + Send + 'static,
{
    let chunks = futures::stream::once(futures::future::ready(shell))
        .chain(futures::stream::once(rest))
        .map(Ok::<_, std::convert::Infallible>);

    (
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        Body::from_stream(chunks),
    )
        .into_response()
}
