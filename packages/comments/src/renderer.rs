use crate::classes::{comment_class_attribute, CommentClassState};
use crate::comment::Comment;
use crate::template::CommentTemplate;
use blockprint_common::{CommentOrder, DiscussionSettings};
use tracing::{debug, instrument};

/// Threading configuration for one render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreadSettings {
    /// Nest replies at all
    pub enabled: bool,
    /// Replies deeper than this are flattened into their parent's list
    pub max_depth: u32,
}

impl Default for ThreadSettings {
    fn default() -> Self {
        Self::from(&DiscussionSettings::default())
    }
}

impl From<&DiscussionSettings> for ThreadSettings {
    fn from(settings: &DiscussionSettings) -> Self {
        Self {
            enabled: settings.thread_comments,
            max_depth: settings.thread_comments_depth,
        }
    }
}

/// Renders a comment tree into `<li>` items with nested `<ol>` reply lists
pub struct NestedCommentRenderer<'t, T: CommentTemplate + ?Sized> {
    template: &'t T,
    settings: ThreadSettings,
}

impl<'t, T: CommentTemplate + ?Sized> NestedCommentRenderer<'t, T> {
    pub fn new(template: &'t T, settings: ThreadSettings) -> Self {
        Self { template, settings }
    }

    /// Render top-level comments starting at depth 1
    pub fn render(&self, comments: &[Comment]) -> String {
        self.render_from_depth(comments, 1)
    }

    /// Render comments as if they sat at `depth` (values below 1 count as 1).
    /// Alternation counters start fresh for every call.
    #[instrument(skip(self, comments), fields(count = comments.len(), max_depth = self.settings.max_depth))]
    pub fn render_from_depth(&self, comments: &[Comment], depth: u32) -> String {
        let mut state = CommentClassState::default();
        let content = self.render_level(comments, depth.max(1), &mut state);
        debug!(rendered = state.alt, "Rendered comment tree");
        content
    }

    fn render_level<'c, I>(&self, comments: I, depth: u32, state: &mut CommentClassState) -> String
    where
        I: IntoIterator<Item = &'c Comment>,
    {
        let mut content = String::new();

        for comment in comments {
            let mut block_content = self.template.render(comment);

            // Classes consume the alternation counters, so they must be taken
            // before any reply is rendered.
            let classes = comment_class_attribute(comment, depth, state);

            if comment.has_children() && self.settings.enabled {
                if depth < self.settings.max_depth {
                    let inner = self.render_level(&comment.children, depth + 1, state);
                    block_content.push_str(&format!("<ol>{}</ol>", inner));
                } else {
                    debug!(comment_id = comment.id, depth, "Flattening replies beyond thread depth");
                    let inner = self.render_level(&comment.children, depth, state);
                    block_content.push_str(&inner);
                }
            }

            content.push_str(&format!(
                "<li id=\"comment-{}\" {}>{}</li>",
                comment.id, classes, block_content
            ));
        }

        content
    }
}

/// Render a top-level comment list
pub fn render_comments<T: CommentTemplate + ?Sized>(
    comments: &[Comment],
    template: &T,
    settings: ThreadSettings,
) -> String {
    NestedCommentRenderer::new(template, settings).render(comments)
}

pub const DEFAULT_WRAPPER_ATTRIBUTES: &str = r#"class="wp-block-comment-template""#;

/// The post a comment template block is rendered for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentTemplateContext {
    pub post_id: Option<u64>,
    pub password_required: bool,
    pub wrapper_attributes: String,
}

impl CommentTemplateContext {
    pub fn for_post(post_id: u64) -> Self {
        Self {
            post_id: Some(post_id),
            password_required: false,
            wrapper_attributes: DEFAULT_WRAPPER_ATTRIBUTES.to_string(),
        }
    }
}

impl Default for CommentTemplateContext {
    fn default() -> Self {
        Self {
            post_id: None,
            password_required: false,
            wrapper_attributes: DEFAULT_WRAPPER_ATTRIBUTES.to_string(),
        }
    }
}

/// Render the whole comment template block for a post.
///
/// Empty when there is no post (or post id `0`), the post is password protected, or it has
/// no comments. Top-level order follows `comment_order`.
pub fn render_comment_template<T: CommentTemplate + ?Sized>(
    context: &CommentTemplateContext,
    comments: &[Comment],
    settings: &DiscussionSettings,
    template: &T,
) -> String {
    if matches!(context.post_id, None | Some(0)) {
        debug!("No post id in context, skipping comment template");
        return String::new();
    }
    if context.password_required || comments.is_empty() {
        return String::new();
    }

    let renderer = NestedCommentRenderer::new(template, ThreadSettings::from(settings));
    let mut state = CommentClassState::default();

    let items = match settings.comment_order {
        CommentOrder::Asc => renderer.render_level(comments, 1, &mut state),
        CommentOrder::Desc => renderer.render_level(comments.iter().rev(), 1, &mut state),
    };

    format!("<ol {}>{}</ol>", context.wrapper_attributes, items)
}
