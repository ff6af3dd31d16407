use serde::{Deserialize, Serialize};

/// A comment and the replies it owns
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: u64,

    #[serde(default)]
    pub post_id: u64,

    /// Empty for regular comments; `pingback`, `trackback`, ... otherwise
    #[serde(default, rename = "type")]
    pub comment_type: String,

    /// Registered user who wrote the comment, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<CommentAuthor>,

    #[serde(default)]
    pub author_name: String,

    #[serde(default)]
    pub content: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Comment>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentAuthor {
    pub user_id: u64,

    #[serde(default)]
    pub nicename: String,

    /// Whether this user wrote the post being commented on
    #[serde(default)]
    pub is_post_author: bool,
}

impl Comment {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    pub fn with_children(mut self, children: Vec<Comment>) -> Self {
        self.children = children;
        self
    }

    pub fn with_author(mut self, author: CommentAuthor) -> Self {
        self.author = Some(author);
        self
    }

    pub fn with_content(mut self, author_name: &str, content: &str) -> Self {
        self.author_name = author_name.to_string();
        self.content = content.to_string();
        self
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Number of comments in this subtree, including this one
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(Comment::count).sum::<usize>()
    }
}

/// Parse a JSON array of top-level comments
pub fn comments_from_json(json: &str) -> serde_json::Result<Vec<Comment>> {
    serde_json::from_str(json)
}
