use crate::persist;
use crate::seed::SeedData;
use breachpad_core::{BreachpadError, Comment, Post};
use chrono::Utc;
use dashmap::DashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use tracing::{info, warn};

/// In-memory blog store with JSON state-file persistence.
///
/// Initialized once at process startup via [`BlogStore::init`] with explicit
/// seed definitions — there is no lazy schema creation and no module-load
/// side effects. Reads never touch the disk; every mutation saves the full
/// state atomically.
#[derive(Clone)]
pub struct BlogStore {
    pub posts: Arc<DashMap<i64, Post>>,
    pub comments: Arc<DashMap<i64, Comment>>,
    next_post_id: Arc<AtomicI64>,
    next_comment_id: Arc<AtomicI64>,
    state_file: Option<PathBuf>,
}

impl BlogStore {
    /// Empty store. Prefer [`BlogStore::init`] in the server path.
    pub fn new(state_file: Option<PathBuf>) -> Self {
        Self {
            posts: Arc::new(DashMap::new()),
            comments: Arc::new(DashMap::new()),
            next_post_id: Arc::new(AtomicI64::new(1)),
            next_comment_id: Arc::new(AtomicI64::new(1)),
            state_file,
        }
    }

    /// Build the store for this process: load persisted state if present,
    /// then apply `seed` only when the store is still empty.
    pub fn init(state_file: Option<PathBuf>, seed: &SeedData) -> Self {
        let store = Self::new(state_file.clone());

        if let Some(path) = &state_file {
            persist::load_state(path, &store);
        }

        if store.posts.is_empty() && !seed.posts.is_empty() {
            info!(posts = seed.posts.len(), comments = seed.comments.len(), "Seeding blog store");
            store.apply_seed(seed);
        }

        store
    }

    fn apply_seed(&self, seed: &SeedData) {
        for post in &seed.posts {
            self.create_post(post.title.clone(), post.content.clone());
        }
        for comment in &seed.comments {
            if let Err(e) =
                self.create_comment(comment.post_id, comment.author.clone(), comment.content.clone())
            {
                warn!(post_id = comment.post_id, error = %e, "Seed comment references unknown post");
            }
        }
    }

    // ── Posts ─────────────────────────────────────────────────────

    pub fn create_post(&self, title: String, content: String) -> Post {
        let id = self.next_post_id.fetch_add(1, Ordering::SeqCst);
        let post = Post {
            id,
            title,
            content,
            created_at: Utc::now(),
        };
        self.posts.insert(id, post.clone());
        self.save();
        post
    }

    pub fn get_post(&self, id: i64) -> Option<Post> {
        self.posts.get(&id).map(|p| p.value().clone())
    }

    /// All posts, newest first.
    pub fn all_posts(&self) -> Vec<Post> {
        let mut posts: Vec<Post> = self.posts.iter().map(|p| p.value().clone()).collect();
        posts.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        posts
    }

    /// Posts whose title or content contains `query`, case-insensitive,
    /// newest first. An empty query matches everything.
    pub fn search_posts(&self, query: &str) -> Vec<Post> {
        let needle = query.to_lowercase();
        self.all_posts()
            .into_iter()
            .filter(|p| {
                p.title.to_lowercase().contains(&needle)
                    || p.content.to_lowercase().contains(&needle)
            })
            .collect()
    }

    // ── Comments ──────────────────────────────────────────────────

    /// Store a comment against an existing post. Content is kept verbatim.
    pub fn create_comment(
        &self,
        post_id: i64,
        author: String,
        content: String,
    ) -> Result<Comment, BreachpadError> {
        if !self.posts.contains_key(&post_id) {
            return Err(BreachpadError::PostNotFound(post_id));
        }
        let id = self.next_comment_id.fetch_add(1, Ordering::SeqCst);
        let comment = Comment {
            id,
            post_id,
            author,
            content,
            created_at: Utc::now(),
        };
        self.comments.insert(id, comment.clone());
        self.save();
        Ok(comment)
    }

    /// Comments for one post, newest first.
    pub fn comments_for_post(&self, post_id: i64) -> Vec<Comment> {
        let mut comments: Vec<Comment> = self
            .comments
            .iter()
            .filter(|c| c.value().post_id == post_id)
            .map(|c| c.value().clone())
            .collect();
        comments.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        comments
    }

    /// Returns `false` when no comment with `id` exists.
    pub fn delete_comment(&self, id: i64) -> bool {
        let removed = self.comments.remove(&id).is_some();
        if removed {
            self.save();
        }
        removed
    }

    // ── Persistence plumbing ──────────────────────────────────────

    fn save(&self) {
        if self.state_file.is_some() {
            persist::save_state(self);
        }
    }

    pub(crate) fn state_file(&self) -> Option<&PathBuf> {
        self.state_file.as_ref()
    }

    /// Advance the id counters past every loaded id. Called after the
    /// persisted state has been inserted into the maps.
    pub(crate) fn sync_id_counters(&self) {
        let max_post = self.posts.iter().map(|p| *p.key()).max().unwrap_or(0);
        let max_comment = self.comments.iter().map(|c| *c.key()).max().unwrap_or(0);
        self.next_post_id.store(max_post + 1, Ordering::SeqCst);
        self.next_comment_id.store(max_comment + 1, Ordering::SeqCst);
    }

    /// Get store statistics.
    pub fn stats(&self) -> StoreStats {
        StoreStats {
            posts: self.posts.len(),
            comments: self.comments.len(),
        }
    }
}

#[derive(Debug)]
pub struct StoreStats {
    pub posts: usize,
    pub comments: usize,
}

impl std::fmt::Display for StoreStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "posts={}, comments={}", self.posts, self.comments)
    }
}

// ─────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────
