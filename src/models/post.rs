use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    // Older backend data may lack the field entirely.
    #[serde(default)]
    pub comments: Vec<String>,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct PostUpdate {
    pub title: String,
    pub content: String,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct CommentPayload {
    pub comment: String,
}

/// Trims a comment draft, rejecting empty and whitespace-only input before
/// any request is made.
pub fn normalize_comment(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Swaps in the server-returned comments for one post, leaving the rest of
/// the list untouched.
pub fn replace_comments(posts: &[Post], id: i64, comments: &[String]) -> Vec<Post> {
    posts
        .iter()
        .cloned()
        .map(|mut post| {
            if post.id == id {
                post.comments = comments.to_vec();
            }
            post
        })
        .collect()
}

/// Appends a fetched page to the current list, dropping posts already
/// present. Returns the merged list and how many posts were actually added.
pub fn merge_pages(existing: Vec<Post>, incoming: Vec<Post>) -> (Vec<Post>, usize) {
    use std::collections::HashSet;

    let mut merged = existing;
    let mut seen: HashSet<i64> = merged.iter().map(|p| p.id).collect();
    let mut added = 0;
    for post in incoming {
        if seen.insert(post.id) {
            merged.push(post);
            added += 1;
        }
    }
    (merged, added)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: i64, title: &str) -> Post {
        Post {
            id,
            title: title.to_string(),
            content: format!("content of {title}"),
            comments: Vec::new(),
        }
    }

    #[test]
    fn post_without_comments_field_deserializes_empty() {
        let post: Post =
            serde_json::from_str(r#"{"id": 3, "title": "Hello", "content": "World"}"#).unwrap();
        assert_eq!(post.id, 3);
        assert_eq!(post.title, "Hello");
        assert_eq!(post.content, "World");
        assert!(post.comments.is_empty());
    }

    #[test]
    fn post_comments_keep_server_order() {
        let post: Post = serde_json::from_str(
            r#"{"id": 1, "title": "t", "content": "c", "comments": ["first", "second", "third"]}"#,
        )
        .unwrap();
        assert_eq!(post.comments, vec!["first", "second", "third"]);
    }

    #[test]
    fn normalize_comment_rejects_whitespace_only() {
        assert_eq!(normalize_comment(""), None);
        assert_eq!(normalize_comment("   \t  "), None);
        assert_eq!(normalize_comment("  nice post  "), Some("nice post".to_string()));
    }

    #[test]
    fn replace_comments_touches_only_the_target_post() {
        let posts = vec![post(1, "a"), post(2, "b")];
        let updated = replace_comments(&posts, 2, &["hi".to_string()]);
        assert!(updated[0].comments.is_empty());
        assert_eq!(updated[1].comments, vec!["hi"]);
        assert_eq!(updated[0], posts[0]);
    }

    #[test]
    fn replace_comments_with_unknown_id_is_a_no_op() {
        let posts = vec![post(1, "a")];
        let updated = replace_comments(&posts, 99, &["hi".to_string()]);
        assert_eq!(updated, posts);
    }

    #[test]
    fn merge_pages_deduplicates_by_id() {
        let existing = vec![post(1, "a"), post(2, "b")];
        let incoming = vec![post(2, "b"), post(3, "c")];
        let (merged, added) = merge_pages(existing, incoming);
        assert_eq!(added, 1);
        assert_eq!(
            merged.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn merge_pages_reports_zero_for_exhausted_feed() {
        let existing = vec![post(1, "a")];
        let (merged, added) = merge_pages(existing.clone(), vec![post(1, "a")]);
        assert_eq!(added, 0);
        assert_eq!(merged, existing);
    }
}
