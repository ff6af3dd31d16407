use crate::comment::Comment;

/// Alternation counters for one top-level render.
///
/// `alt` advances on every comment in traversal order, `thread_alt` only on
/// comments rendered at depth 1. Sibling classes therefore depend on how
/// many comments were classed before them, including nested replies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommentClassState {
    pub alt: usize,
    pub thread_alt: usize,
}

/// Compute the classes for a comment and advance the counters
pub fn comment_classes(comment: &Comment, depth: u32, state: &mut CommentClassState) -> Vec<String> {
    let mut classes = Vec::new();

    if comment.comment_type.is_empty() {
        classes.push("comment".to_string());
    } else {
        classes.push(comment.comment_type.clone());
    }

    if let Some(author) = comment.author.as_ref().filter(|author| author.user_id > 0) {
        classes.push("byuser".to_string());

        let nicename = match sanitize_html_class(&author.nicename) {
            name if name.is_empty() => author.user_id.to_string(),
            name => name,
        };
        classes.push(format!("comment-author-{}", nicename));

        if author.is_post_author {
            classes.push("bypostauthor".to_string());
        }
    }

    if state.alt % 2 == 1 {
        classes.push("odd".to_string());
        classes.push("alt".to_string());
    } else {
        classes.push("even".to_string());
    }
    state.alt += 1;

    if depth == 1 {
        if state.thread_alt % 2 == 1 {
            classes.push("thread-odd".to_string());
            classes.push("thread-alt".to_string());
        } else {
            classes.push("thread-even".to_string());
        }
        state.thread_alt += 1;
    }

    classes.push(format!("depth-{}", depth));

    classes
}

/// `class="..."` attribute for a comment; advances the counters
pub fn comment_class_attribute(comment: &Comment, depth: u32, state: &mut CommentClassState) -> String {
    let classes = comment_classes(comment, depth, state)
        .iter()
        .map(|class| html_escape::encode_double_quoted_attribute(class).into_owned())
        .collect::<Vec<_>>();

    format!("class=\"{}\"", classes.join(" "))
}

/// Keep only `A-Za-z0-9_-`, after dropping percent-encoded octets
pub fn sanitize_html_class(class: &str) -> String {
    let bytes = class.as_bytes();
    let mut sanitized = String::with_capacity(class.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%'
            && i + 2 < bytes.len()
            && bytes[i + 1].is_ascii_hexdigit()
            && bytes[i + 2].is_ascii_hexdigit()
        {
            i += 3;
            continue;
        }

        let c = bytes[i];
        if c.is_ascii_alphanumeric() || c == b'_' || c == b'-' {
            sanitized.push(c as char);
        }
        i += 1;
    }

    sanitized
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comment::CommentAuthor;

    #[test]
    fn test_sanitize_html_class() {
        assert_eq!(sanitize_html_class("jane-doe"), "jane-doe");
        assert_eq!(sanitize_html_class("jane doe!"), "janedoe");
        assert_eq!(sanitize_html_class("caf%C3%A9"), "caf");
        assert_eq!(sanitize_html_class("ünïcode"), "ncode");
        assert_eq!(sanitize_html_class("100%"), "100");
    }

    #[test]
    fn test_alternating_classes_advance_state() {
        let mut state = CommentClassState::default();
        let comment = Comment::new(1);

        assert_eq!(
            comment_classes(&comment, 1, &mut state),
            vec!["comment", "even", "thread-even", "depth-1"]
        );
        assert_eq!(
            comment_classes(&comment, 2, &mut state),
            vec!["comment", "odd", "alt", "depth-2"]
        );
        assert_eq!(
            comment_classes(&comment, 1, &mut state),
            vec!["comment", "even", "thread-odd", "thread-alt", "depth-1"]
        );
        assert_eq!(state, CommentClassState { alt: 3, thread_alt: 2 });
    }

    #[test]
    fn test_author_classes() {
        let mut state = CommentClassState::default();
        let comment = Comment::new(7).with_author(CommentAuthor {
            user_id: 3,
            nicename: "site admin".to_string(),
            is_post_author: true,
        });

        assert_eq!(
            comment_classes(&comment, 1, &mut state),
            vec![
                "comment",
                "byuser",
                "comment-author-siteadmin",
                "bypostauthor",
                "even",
                "thread-even",
                "depth-1"
            ]
        );
    }

    #[test]
    fn test_author_without_usable_nicename_falls_back_to_id() {
        let mut state = CommentClassState::default();
        let comment = Comment::new(7).with_author(CommentAuthor {
            user_id: 42,
            nicename: "ü".to_string(),
            is_post_author: false,
        });

        let classes = comment_classes(&comment, 3, &mut state);
        assert!(classes.contains(&"comment-author-42".to_string()));
        assert!(!classes.contains(&"bypostauthor".to_string()));
    }

    #[test]
    fn test_anonymous_author_and_custom_type() {
        let mut state = CommentClassState::default();
        let mut comment = Comment::new(9).with_author(CommentAuthor::default());
        comment.comment_type = "pingback".to_string();

        assert_eq!(
            comment_class_attribute(&comment, 1, &mut state),
            r#"class="pingback even thread-even depth-1""#
        );
    }
}
