use crate::comment::Comment;

/// Renders the markup of a single comment, without its replies
pub trait CommentTemplate {
    fn render(&self, comment: &Comment) -> String;
}

impl<F> CommentTemplate for F
where
    F: Fn(&Comment) -> String,
{
    fn render(&self, comment: &Comment) -> String {
        self(comment)
    }
}

pub const DEFAULT_TEMPLATE: &str =
    r#"<article class="comment-body"><footer class="comment-author">{author}</footer><div class="comment-content">{content}</div></article>"#;

/// Template string with `{id}`, `{author}` and `{content}` placeholders.
/// Author and content are HTML-escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderTemplate {
    source: String,
}

impl PlaceholderTemplate {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

impl Default for PlaceholderTemplate {
    fn default() -> Self {
        Self::new(DEFAULT_TEMPLATE)
    }
}

impl CommentTemplate for PlaceholderTemplate {
    fn render(&self, comment: &Comment) -> String {
        self.source
            .replace("{id}", &comment.id.to_string())
            .replace("{author}", &html_escape::encode_text(&comment.author_name))
            .replace("{content}", &html_escape::encode_text(&comment.content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_template_escapes_values() {
        let template = PlaceholderTemplate::new("<p data-id=\"{id}\">{author}: {content}</p>");
        let comment = Comment::new(12).with_content("Ann & Bo", "<b>hi</b>");

        assert_eq!(
            template.render(&comment),
            "<p data-id=\"12\">Ann &amp; Bo: &lt;b&gt;hi&lt;/b&gt;</p>"
        );
    }

    #[test]
    fn test_closure_template() {
        let template = |comment: &Comment| format!("#{}", comment.id);
        assert_eq!(template.render(&Comment::new(5)), "#5");
    }
}
