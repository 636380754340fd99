//! The post entity.

use serde::{Deserialize, Serialize};

/// A single blog post.
///
/// `id` is assigned by the store on creation and is immutable afterwards;
/// `update` may only touch `title` and `content`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub content: String,
}

impl Post {
    pub fn new(id: u64, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_json_shape() {
        let post = Post::new(1, "First Post", "This is the first post.");
        let json = serde_json::to_value(&post).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["title"], "First Post");
        assert_eq!(json["content"], "This is the first post.");
        assert_eq!(json.as_object().unwrap().len(), 3);
    }

    #[test]
    fn test_post_deserializes_from_wire_shape() {
        let post: Post =
            serde_json::from_str(r#"{"id": 7, "title": "T", "content": "C"}"#).unwrap();
        assert_eq!(post, Post::new(7, "T", "C"));
    }
}
