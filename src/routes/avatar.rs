use crate::avatar;
use crate::blog::AVATAR_SIZE;
use axum::extract::{Path, Query};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(super) struct AvatarOptions {
    #[serde(default = "default_size")]
    size: u32,
}

fn default_size() -> u32 {
    AVATAR_SIZE
}

pub(super) async fn get(
    Path(key): Path<String>,
    Query(options): Query<AvatarOptions>,
) -> Result<Response, StatusCode> {
    let png = match tokio::task::spawn_blocking(move || avatar::render_png(&key, options.size))
        .await
        .expect("task should not panic")
    {
        Ok(it) => it,
        Err(err) => {
            tracing::error!("Error encoding avatar: {err}");
            return Err(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };

    Ok((
        [
            (header::CONTENT_TYPE, "image/png"),
            // a key always renders the same image
            (header::CACHE_CONTROL, "public, max-age=31536000, immutable"),
        ],
        png,
    )
        .into_response())
}
