use super::escape;
use crate::blog::{Comment, AVATAR_SIZE, COMMENT_SKELETON_ROWS};

pub fn avatar_path(comment: &Comment) -> String {
    format!(
        "/avatar/{}?size={AVATAR_SIZE}",
        urlencoding::encode(&comment.avatar_key())
    )
}

pub fn comment_card(comment: &Comment) -> String {
    format!(
        "<div class=\"comment\">\n\
         <div class=\"comment-head\">\
         <img src=\"{}\" width=\"{AVATAR_SIZE}\" height=\"{AVATAR_SIZE}\" alt=\"\">\
         <div><h3>{}</h3><p>{}</p></div>\
         </div>\n<p>{}</p>\n</div>\n",
        escape(&avatar_path(comment)),
        escape(&comment.name),
        escape(&comment.email),
        escape(&comment.body),
    )
}

pub fn comments(comments: &[Comment]) -> String {
    let cards = comments.iter().map(comment_card).collect::<String>();
    format!("<section class=\"comments\">\n<h2>Comments</h2>\n{cards}</section>\n")
}

pub fn comments_skeleton() -> String {
    format!(
        "<div class=\"comments\">\n{}</div>\n",
        "<div class=\"bone row skeleton\"></div>\n".repeat(COMMENT_SKELETON_ROWS)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn comment() -> Comment {
        Comment {
            post_id: 1,
            id: 10,
            name: String::from("X & Y"),
            email: String::from("x@x.com"),
            body: String::from("hi"),
        }
    }

    #[test]
    fn card_shows_identity_and_body() {
        let card = comment_card(&comment());

        assert!(card.contains("src=\"/avatar/x%40x.comX%20%26%20Y10?size=80\""));
        assert!(card.contains("<h3>X &amp; Y</h3>"));
        assert!(card.contains("<p>x@x.com</p>"));
        assert!(card.contains("<p>hi</p>"));
    }

    #[test]
    fn section_lists_every_comment() {
        let mut other = comment();
        other.id = 11;
        let section = comments(&[comment(), other]);

        assert!(section.contains("<h2>Comments</h2>"));
        assert_eq!(section.matches("class=\"comment\"").count(), 2);
    }

    #[test]
    fn skeleton_rows() {
        assert_eq!(
            comments_skeleton().matches("bone row").count(),
            COMMENT_SKELETON_ROWS
        );
    }
}
