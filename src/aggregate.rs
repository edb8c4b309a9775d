use crate::blog::{Comment, Post, PostID};
use crate::source::{FetchError, PostSource};
use std::sync::Arc;

/// Every upstream post, in upstream order, with its comment count attached.
///
/// Comment lists are fetched concurrently, one request per post. The join is
/// all-or-nothing: the first failed fetch is returned and the remaining
/// requests are cancelled when the set is dropped.
pub async fn posts_with_comment_counts(
    source: Arc<dyn PostSource>,
) -> Result<Vec<Post>, FetchError> {
    let records = source.posts().await?;

    let mut fetch_set = tokio::task::JoinSet::new();
    for (position, record) in records.iter().enumerate() {
        let source = source.clone();
        let post_id = record.id;
        fetch_set.spawn(async move {
            let comments = source.comments_for(post_id).await?;
            Ok::<_, FetchError>((position, count_for(post_id, &comments)))
        });
    }

    // merged by position, completion order doesn't matter
    let mut counts = vec![0; records.len()];
    while let Some((position, count)) = fetch_set
        .join_next()
        .await
        .transpose()
        .expect("comments_for should not panic")
        .transpose()?
    {
        counts[position] = count;
    }

    tracing::debug!("aggregated comment counts for {} posts", records.len());

    Ok(records
        .into_iter()
        .zip(counts)
        .map(|(record, count)| record.with_comments_count(count))
        .collect())
}

/// One post and its comments, fetched concurrently
pub async fn post_with_comments(
    source: Arc<dyn PostSource>,
    post_id: PostID,
) -> Result<(Post, Vec<Comment>), FetchError> {
    let (record, mut comments) =
        tokio::try_join!(source.post(post_id), source.comments_for(post_id))?;

    comments.retain(|comment| comment.post_id == post_id);
    let count = comments.len();

    Ok((record.with_comments_count(count), comments))
}

fn count_for(post_id: PostID, comments: &[Comment]) -> usize {
    comments
        .iter()
        .filter(|comment| comment.post_id == post_id)
        .count()
}
