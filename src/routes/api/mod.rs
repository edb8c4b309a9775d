use crate::state::NestedRouter;
use axum::routing::get;

mod posts;

pub fn route() -> NestedRouter {
    let compression_layer = tower_http::compression::CompressionLayer::new().br(true);

    axum::Router::new()
        .route("/posts", get(posts::list))
        .route("/post/:id", get(posts::get))
        .layer(compression_layer)
}
