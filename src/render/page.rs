use super::escape;

const STYLE: &str = r#"
    body { margin: 0; min-height: 100vh; padding: 2rem; box-sizing: border-box; color: #f3f4f6;
           background: linear-gradient(135deg, #111827, #000, #1f2937); font-family: system-ui, sans-serif; }
    a { color: inherit; text-decoration: none; }
    .page-title { font-size: 3rem; font-weight: 800; text-transform: uppercase; margin: 0 0 1rem;
                  background: linear-gradient(to right, #6366f1, #2dd4bf); -webkit-background-clip: text;
                  background-clip: text; color: transparent; }
    .grid { display: grid; grid-template-columns: repeat(3, minmax(0, 1fr)); gap: 1rem; }
    .detail { max-width: 56rem; margin: 0 auto; display: flex; flex-direction: column; gap: 2rem; }
    .card { display: block; background: rgba(0, 0, 0, 0.5); backdrop-filter: blur(16px); border-radius: 0.75rem;
            padding: 1.5rem; border: 2px solid #374151; transition: border-color 300ms; }
    .card:hover { border-color: #6366f1; }
    .card h1 { font-size: 1.875rem; margin: 0 0 1rem; background: linear-gradient(to right, #60a5fa, #9333ea);
               -webkit-background-clip: text; background-clip: text; color: transparent; }
    .meta { font-size: 0.875rem; color: #9ca3af; margin: 0 0 1rem; }
    .body { color: #d1d5db; white-space: pre-line; margin: 0 0 1.5rem; }
    .card-footer { display: flex; align-items: center; justify-content: space-between; }
    .card-footer a { font-size: 0.875rem; color: #818cf8; }
    .accent { height: 0.25rem; width: 6rem; border-radius: 0.25rem; background: linear-gradient(to right, #3b82f6, #9333ea); }
    .comments { display: flex; flex-direction: column; gap: 1.5rem; }
    .comments h2 { font-size: 1.5rem; margin: 0; background: linear-gradient(to right, #818cf8, #22d3ee);
                   -webkit-background-clip: text; background-clip: text; color: transparent; }
    .comment { background: rgba(0, 0, 0, 0.9); border-radius: 0.75rem; padding: 1rem; border: 2px solid #374151; }
    .comment:hover { border-color: #06b6d4; }
    .comment-head { display: flex; align-items: center; gap: 1rem; margin-bottom: 1rem; }
    .comment-head img { border-radius: 50%; }
    .comment-head h3 { font-size: 0.875rem; color: #cbd5e1; margin: 0; }
    .comment-head p { color: #0ea5e9; margin: 0; }
    .comment > p { color: #d1d5db; margin: 0; }
    .skeleton { animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite; }
    .bone { background: #374151; border-radius: 0.25rem; margin-bottom: 1rem; }
    .bone.title { height: 2rem; width: 75%; }
    .bone.line { height: 1rem; }
    .bone.row { height: 2rem; width: 50%; margin: 0 auto; }
    .error h1 { font-size: 1.875rem; background: linear-gradient(to right, #ef4444, #eab308);
                -webkit-background-clip: text; background-clip: text; color: transparent; }
    .error p { color: #d1d5db; }
    @keyframes pulse { 50% { opacity: 0.5; } }
"#;

/// Id of the element holding the loading skeleton
pub const LOADING_ID: &str = "loading";

/// Start of a document, everything up to and including the opening `<main>`
pub fn open(title: &str) -> String {
    format!(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n<main>\n",
        escape(title)
    )
}

pub const CLOSE: &str = "</main>\n</body>\n</html>\n";

/// Skeleton wrapper that `resolve` later hides
pub fn loading(skeleton: &str) -> String {
    format!("<div id=\"{LOADING_ID}\">{skeleton}</div>\n")
}

/// Final chunk of a streamed page: hides the skeleton, then shows `content`
pub fn resolve(content: &str) -> String {
    format!("<style>#{LOADING_ID} {{ display: none; }}</style>\n{content}\n{CLOSE}")
}

/// A whole document in one piece
pub fn document(title: &str, content: &str) -> String {
    format!("{}{content}\n{CLOSE}", open(title))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn streamed_chunks_form_one_document() {
        let streamed = format!(
            "{}{}{}",
            open("Posts"),
            loading("<p>wait</p>"),
            resolve("<p>done</p>")
        );

        assert!(streamed.starts_with("<!doctype html>"));
        assert!(streamed.contains("<div id=\"loading\"><p>wait</p></div>"));
        assert!(streamed.contains("#loading { display: none; }"));
        assert!(streamed.ends_with("</html>\n"));
        assert!(streamed.find("<p>wait</p>") < streamed.find("<p>done</p>"));
    }

    #[test]
    fn title_is_escaped() {
        assert!(document("<script>", "").contains("<title>&lt;script&gt;</title>"));
    }
}
