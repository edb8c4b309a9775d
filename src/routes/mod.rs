use crate::state::State;
use axum::routing::get;
use std::sync::Arc;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

mod api;
mod avatar;
mod page;

pub fn app(state: Arc<State>) -> NormalizePath<axum::Router> {
    NormalizePathLayer::trim_trailing_slash().layer(
        axum::Router::new()
            .merge(page::route())
            .nest("/api", api::route())
            .route("/avatar/:key", get(avatar::get))
            .fallback(page::not_found)
            .with_state(state),
    )
}
