pub mod classes;
pub mod comment;
pub mod renderer;
pub mod template;

pub use classes::{comment_class_attribute, comment_classes, sanitize_html_class, CommentClassState};
pub use comment::{comments_from_json, Comment, CommentAuthor};
pub use renderer::{
    render_comment_template, render_comments, CommentTemplateContext, NestedCommentRenderer,
    ThreadSettings, DEFAULT_WRAPPER_ATTRIBUTES,
};
pub use template::{CommentTemplate, PlaceholderTemplate, DEFAULT_TEMPLATE};

#[cfg(test)]
mod tests;
