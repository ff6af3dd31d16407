use crate::config::load_settings;
use anyhow::{Context, Result};
use blockprint_common::CommentOrder;
use blockprint_comments::{
    comments_from_json, render_comment_template, CommentTemplateContext, PlaceholderTemplate,
    DEFAULT_TEMPLATE,
};
use clap::Args;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Args)]
pub struct CommentsArgs {
    /// JSON file with the top-level comments of a post
    pub path: PathBuf,

    /// Per-comment template; supports {id}, {author} and {content}
    #[arg(short, long, default_value = DEFAULT_TEMPLATE)]
    pub template: String,

    /// Post the comments belong to
    #[arg(long, default_value_t = 1)]
    pub post_id: u64,

    /// Maximum thread depth (overrides settings)
    #[arg(short, long)]
    pub depth: Option<u32>,

    /// Do not nest replies (overrides settings)
    #[arg(long)]
    pub no_threads: bool,

    /// Top-level order: asc or desc (overrides settings)
    #[arg(long)]
    pub order: Option<CommentOrder>,

    /// Settings file (defaults to blockprint.config.json)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

pub fn comments(args: CommentsArgs, cwd: &str) -> Result<()> {
    let settings = load_settings(cwd, args.config.as_deref())?;

    let mut discussion = settings.discussion;
    if let Some(depth) = args.depth {
        discussion.thread_comments_depth = depth;
    }
    if args.no_threads {
        discussion.thread_comments = false;
    }
    if let Some(order) = args.order {
        discussion.comment_order = order;
    }

    let path = Path::new(cwd).join(&args.path);
    let source = fs::read_to_string(&path)
        .with_context(|| format!("Cannot read comments from {}", path.display()))?;
    let comments = comments_from_json(&source)
        .with_context(|| format!("Invalid comment tree in {}", path.display()))?;

    info!(
        comments = comments.iter().map(|c| c.count()).sum::<usize>(),
        depth = discussion.thread_comments_depth,
        "Rendering comment thread"
    );

    let template = PlaceholderTemplate::new(args.template);
    let html = render_comment_template(
        &CommentTemplateContext::for_post(args.post_id),
        &comments,
        &discussion,
        &template,
    );

    println!("{}", html);
    Ok(())
}
