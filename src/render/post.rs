use super::comment;
use super::escape;
use crate::blog::{Comment, Post, LIST_SKELETON_CARDS};

/// Target of the detail card's "View Error Page" link. Nothing is routed there.
pub const ERROR_DEMO_PATH: &str = "/fake";

pub fn detail_path(post: &Post) -> String {
    format!("/post/{}", post.id)
}

/// Summary card. Linked cards navigate to the post's detail page, unlinked
/// ones (the detail page's own header) link to the error page instead.
pub fn main_card(post: &Post, is_link: bool) -> String {
    let heading = format!(
        "<h1>{}</h1>\n<p class=\"meta\">Post ID: {} | User ID: {}</p>\n<p class=\"body\">{}</p>\n",
        escape(&post.title),
        post.id,
        post.user_id,
        escape(&post.body),
    );

    if is_link {
        format!(
            "<a class=\"card post-card\" href=\"{}\">\n{heading}\
             <div class=\"card-footer\"><span class=\"meta\">{} comments</span><div class=\"accent\"></div></div>\n</a>\n",
            detail_path(post),
            post.comments_count,
        )
    } else {
        format!(
            "<div class=\"card post-card\">\n{heading}\
             <div class=\"card-footer\"><a href=\"{ERROR_DEMO_PATH}\">View Error Page</a><div class=\"accent\"></div></div>\n</div>\n"
        )
    }
}

pub fn main_card_skeleton() -> String {
    String::from(concat!(
        "<div class=\"card skeleton\">\n",
        "<div class=\"bone title\"></div>\n",
        "<div class=\"bone line\" style=\"width: 50%\"></div>\n",
        "<div class=\"bone line\" style=\"width: 100%\"></div>\n",
        "<div class=\"bone line\" style=\"width: 75%\"></div>\n",
        "<div class=\"bone line\" style=\"width: 50%\"></div>\n",
        "</div>\n",
    ))
}

pub fn post_list(posts: &[Post]) -> String {
    let cards = posts
        .iter()
        .map(|post| main_card(post, true))
        .collect::<String>();
    format!("<div class=\"grid\">\n{cards}</div>\n")
}

pub fn post_list_skeleton() -> String {
    format!(
        "<div class=\"grid\">\n{}</div>\n",
        main_card_skeleton().repeat(LIST_SKELETON_CARDS)
    )
}

pub fn post_view(post: &Post, comments: &[Comment]) -> String {
    format!(
        "<div class=\"detail\">\n{}{}</div>\n",
        main_card(post, false),
        comment::comments(comments)
    )
}

pub fn post_view_skeleton() -> String {
    format!(
        "<div class=\"detail\">\n{}{}</div>\n",
        main_card_skeleton(),
        comment::comments_skeleton()
    )
}

/// Replaces the whole page content when fetching failed
pub fn error_view() -> String {
    String::from(concat!(
        "<div class=\"detail error\">\n",
        "<h1>Error Fetching Data</h1>\n",
        "<p>There was an error fetching the data. Please try again later.</p>\n",
        "</div>\n",
    ))
}
