use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A published blog post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Store-assigned identifier, monotonically increasing.
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// A comment attached to a post.
///
/// Content is stored exactly as submitted — rendering (and escaping) is the
/// dashboard's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Request body for `POST /api/posts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPost {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// Request body for `POST /api/comments/{post_id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewComment {
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_serializes_with_snake_case_keys() {
        let post = Post {
            id: 1,
            title: "Hello".into(),
            content: "World".into(),
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["title"], "Hello");
        assert!(json.get("created_at").is_some());
    }

    #[test]
    fn comment_round_trips_through_json() {
        let comment = Comment {
            id: 5,
            post_id: 2,
            author: "Alice".into(),
            content: "<script>alert('XSS')</script>".into(),
            created_at: Utc::now(),
        };
        let json = serde_json::to_string(&comment).unwrap();
        let back: Comment = serde_json::from_str(&json).unwrap();
        assert_eq!(back.post_id, 2);
        // Stored verbatim, markup included
        assert_eq!(back.content, comment.content);
    }

    #[test]
    fn new_post_missing_fields_default_to_empty() {
        let body: NewPost = serde_json::from_str("{}").unwrap();
        assert!(body.title.is_empty());
        assert!(body.content.is_empty());
    }
}
