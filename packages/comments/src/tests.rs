use crate::*;
use blockprint_common::{CommentOrder, DiscussionSettings};

fn id_template(comment: &Comment) -> String {
    format!("<p>{}</p>", comment.id)
}

/// 1 -> 2 -> 3, then 4
fn sample_tree() -> Vec<Comment> {
    vec![
        Comment::new(1).with_children(vec![Comment::new(2).with_children(vec![Comment::new(3)])]),
        Comment::new(4),
    ]
}

fn threads(max_depth: u32) -> ThreadSettings {
    ThreadSettings {
        enabled: true,
        max_depth,
    }
}

#[test]
fn test_nested_replies_within_thread_depth() {
    let html = render_comments(&sample_tree(), &id_template, threads(5));

    assert_eq!(
        html,
        concat!(
            r#"<li id="comment-1" class="comment even thread-even depth-1"><p>1</p>"#,
            r#"<ol><li id="comment-2" class="comment odd alt depth-2"><p>2</p>"#,
            r#"<ol><li id="comment-3" class="comment even depth-3"><p>3</p></li></ol>"#,
            r#"</li></ol></li>"#,
            r#"<li id="comment-4" class="comment odd alt thread-odd thread-alt depth-1"><p>4</p></li>"#,
        )
    );
}

#[test]
fn test_replies_beyond_thread_depth_are_flattened() {
    let html = render_comments(&sample_tree(), &id_template, threads(2));

    assert_eq!(
        html,
        concat!(
            r#"<li id="comment-1" class="comment even thread-even depth-1"><p>1</p>"#,
            r#"<ol><li id="comment-2" class="comment odd alt depth-2"><p>2</p>"#,
            r#"<li id="comment-3" class="comment even depth-2"><p>3</p></li>"#,
            r#"</li></ol></li>"#,
            r#"<li id="comment-4" class="comment odd alt thread-odd thread-alt depth-1"><p>4</p></li>"#,
        )
    );
}

#[test]
fn test_depth_one_flattens_everything_into_top_level() {
    let html = render_comments(&sample_tree(), &id_template, threads(1));

    assert!(!html.contains("<ol>"));
    assert!(html.contains(r#"<li id="comment-2" class="comment odd alt thread-odd thread-alt depth-1">"#));
    assert!(html.contains(r#"<li id="comment-3" class="comment even thread-even depth-1">"#));
    assert!(html.contains(r#"<li id="comment-4" class="comment odd alt thread-odd thread-alt depth-1">"#));
}

#[test]
fn test_disabled_threading_skips_replies() {
    let settings = ThreadSettings {
        enabled: false,
        max_depth: 5,
    };
    let html = render_comments(&sample_tree(), &id_template, settings);

    assert_eq!(
        html,
        concat!(
            r#"<li id="comment-1" class="comment even thread-even depth-1"><p>1</p></li>"#,
            r#"<li id="comment-4" class="comment odd alt thread-odd thread-alt depth-1"><p>4</p></li>"#,
        )
    );
}

#[test]
fn test_sibling_depth_is_restored_after_recursion() {
    let tree = vec![Comment::new(1).with_children(vec![
        Comment::new(2).with_children(vec![Comment::new(3)]),
        Comment::new(5),
    ])];
    let html = render_comments(&tree, &id_template, threads(5));

    assert!(html.contains(r#"<li id="comment-5" class="comment odd alt depth-2">"#));
}

#[test]
fn test_each_render_starts_with_fresh_counters() {
    let renderer = NestedCommentRenderer::new(&id_template, threads(5));
    let first = renderer.render(&sample_tree());
    let second = renderer.render(&sample_tree());

    assert_eq!(first, second);
}

#[test]
fn test_render_from_deeper_depth() {
    let renderer = NestedCommentRenderer::new(&id_template, threads(3));
    let html = renderer.render_from_depth(&[Comment::new(8)], 3);
    assert_eq!(html, r#"<li id="comment-8" class="comment even depth-3"><p>8</p></li>"#);

    let html = renderer.render_from_depth(&[Comment::new(8)], 0);
    assert_eq!(
        html,
        r#"<li id="comment-8" class="comment even thread-even depth-1"><p>8</p></li>"#
    );
}

#[test]
fn test_template_renders_each_comment_once() {
    use std::cell::RefCell;

    let seen = RefCell::new(Vec::new());
    let template = |comment: &Comment| {
        seen.borrow_mut().push(comment.id);
        String::new()
    };

    render_comments(&sample_tree(), &template, threads(2));
    assert_eq!(*seen.borrow(), vec![1, 2, 3, 4]);
}

#[test]
fn test_comment_template_wraps_list() {
    let context = CommentTemplateContext::for_post(10);
    let html = render_comment_template(
        &context,
        &[Comment::new(1)],
        &DiscussionSettings::default(),
        &id_template,
    );

    assert_eq!(
        html,
        r#"<ol class="wp-block-comment-template"><li id="comment-1" class="comment even thread-even depth-1"><p>1</p></li></ol>"#
    );
}

#[test]
fn test_comment_template_desc_order_reverses_top_level() {
    let settings = DiscussionSettings {
        comment_order: CommentOrder::Desc,
        ..Default::default()
    };
    let html = render_comment_template(
        &CommentTemplateContext::for_post(10),
        &sample_tree(),
        &settings,
        &id_template,
    );

    let four = html.find(r#"id="comment-4" class="comment even thread-even depth-1""#);
    let one = html.find(r#"id="comment-1" class="comment odd alt thread-odd thread-alt depth-1""#);
    assert!(four.is_some() && one.is_some());
    assert!(four < one);
    // replies keep their order under their parent
    assert!(html.find("comment-2") < html.find("comment-3"));
}

#[test]
fn test_comment_template_empty_cases() {
    let settings = DiscussionSettings::default();

    let no_post = CommentTemplateContext::default();
    assert_eq!(render_comment_template(&no_post, &sample_tree(), &settings, &id_template), "");

    let zero_post = CommentTemplateContext::for_post(0);
    assert_eq!(render_comment_template(&zero_post, &sample_tree(), &settings, &id_template), "");

    let mut protected = CommentTemplateContext::for_post(3);
    protected.password_required = true;
    assert_eq!(render_comment_template(&protected, &sample_tree(), &settings, &id_template), "");

    let open = CommentTemplateContext::for_post(3);
    assert_eq!(render_comment_template(&open, &[], &settings, &id_template), "");
}

#[test]
fn test_thread_settings_from_discussion_settings() {
    let discussion = DiscussionSettings {
        thread_comments: false,
        thread_comments_depth: 2,
        comment_order: CommentOrder::Asc,
    };

    assert_eq!(
        ThreadSettings::from(&discussion),
        ThreadSettings {
            enabled: false,
            max_depth: 2
        }
    );
    assert_eq!(ThreadSettings::default(), threads(5));
}

#[test]
fn test_comments_from_json() {
    let json = r#"[
        {
            "id": 1,
            "postId": 10,
            "authorName": "Ann",
            "content": "First!",
            "author": { "userId": 3, "nicename": "ann", "isPostAuthor": true },
            "children": [ { "id": 2, "type": "pingback" } ]
        }
    ]"#;

    let comments = comments_from_json(json).unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].count(), 2);
    assert_eq!(comments[0].children[0].comment_type, "pingback");
    assert!(comments[0].author.as_ref().unwrap().is_post_author);
}
