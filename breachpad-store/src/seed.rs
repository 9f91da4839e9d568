use serde::{Deserialize, Serialize};

/// A post to create when the store starts empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedPost {
    pub title: String,
    pub content: String,
}

/// A comment to attach to a seeded post. `post_id` refers to the id the
/// post receives during seeding (ids start at 1, in seed order).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedComment {
    pub post_id: i64,
    pub author: String,
    pub content: String,
}

/// Seed definitions injected into [`crate::BlogStore::init`].
///
/// Seeding is explicit: the store never decides on its own to create
/// content, and the seed is applied only when the store is empty after
/// loading any persisted state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub posts: Vec<SeedPost>,
    #[serde(default)]
    pub comments: Vec<SeedComment>,
}

impl Default for SeedData {
    fn default() -> Self {
        Self {
            posts: vec![
                SeedPost {
                    title: "Getting Started with Web Security".into(),
                    content: "Web security is crucial for protecting user data and maintaining \
                              trust. In this article, we explore the basics of common \
                              vulnerabilities including SQL injection, cross-site scripting (XSS), \
                              and cross-site request forgery (CSRF). Understanding these threats \
                              is the first step in building secure web applications."
                        .into(),
                },
                SeedPost {
                    title: "Understanding SQL Injection".into(),
                    content: "SQL injection is one of the most common web application \
                              vulnerabilities. It occurs when user input is not properly sanitized \
                              before being used in SQL queries. Attackers can manipulate queries \
                              to access, modify, or delete data. The best defense is to use \
                              parameterized queries and never concatenate user input directly \
                              into SQL statements."
                        .into(),
                },
            ],
            comments: vec![
                SeedComment {
                    post_id: 1,
                    author: "Alice".into(),
                    content: "Great introduction to web security!".into(),
                },
                SeedComment {
                    post_id: 2,
                    author: "Bob".into(),
                    content: "Very informative article on SQLi.".into(),
                },
            ],
        }
    }
}

impl SeedData {
    /// An empty seed — init with this to start from a blank store.
    pub fn none() -> Self {
        Self {
            posts: Vec::new(),
            comments: Vec::new(),
        }
    }
}
