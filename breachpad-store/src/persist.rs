//! File-based persistence for the blog store.
//!
//! On every write (create post, create/delete comment) the current in-memory
//! state is serialized to a JSON file. On startup the file is loaded back so
//! data survives restarts.
//!
//! The file is written atomically: first to a `.tmp` sibling, then renamed
//! over the final path, so a crash mid-write never corrupts the stored state.
//!
//! The implementation is a no-op when the store has no state file configured
//! (e.g. unit tests running fully in memory).

use crate::store::BlogStore;
use breachpad_core::{Comment, Post};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The shape serialized to / deserialized from the state file.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PersistedState {
    #[serde(default)]
    pub posts: Vec<Post>,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// Save the current store contents to its configured state file.
///
/// Returns immediately (no-op) when no state file is configured.
/// Logs a warning rather than panicking on I/O errors.
pub fn save_state(store: &BlogStore) {
    let path = match store.state_file() {
        Some(p) => p.clone(),
        None => return,
    };

    let persisted = PersistedState {
        posts: store.posts.iter().map(|e| e.value().clone()).collect(),
        comments: store.comments.iter().map(|e| e.value().clone()).collect(),
    };

    let json = match serde_json::to_string_pretty(&persisted) {
        Ok(s) => s,
        Err(e) => {
            tracing::warn!(error = %e, "persist: failed to serialize state");
            return;
        }
    };

    // Ensure parent directory exists
    if let Some(parent) = path.parent()
        && let Err(e) = std::fs::create_dir_all(parent)
    {
        tracing::warn!(error = %e, dir = %parent.display(), "persist: failed to create state dir");
        return;
    }

    // Atomic write: tmp file → rename
    let tmp = path.with_extension("json.tmp");
    if let Err(e) = std::fs::write(&tmp, &json) {
        tracing::warn!(error = %e, path = %tmp.display(), "persist: failed to write tmp file");
        return;
    }
    if let Err(e) = std::fs::rename(&tmp, &path) {
        tracing::warn!(error = %e, "persist: failed to rename tmp → state file");
        return;
    }

    tracing::debug!(path = %path.display(), "persist: state saved");
}

/// Load a previously saved state file into `store`.
///
/// * If the file does not exist            → silently returns (first run).
/// * If the file exists but is malformed   → logs a warning and returns.
/// * On success                            → maps are populated and the id
///   counters advanced past every loaded id.
pub fn load_state(path: &Path, store: &BlogStore) {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "persist: no state file found, starting fresh");
        return;
    }

    let data = match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            tracing::warn!(error = %e, path = %path.display(), "persist: failed to read state file");
            return;
        }
    };

    let persisted: PersistedState = match serde_json::from_str(&data) {
        Ok(p) => p,
        Err(e) => {
            tracing::warn!(error = %e, path = %path.display(), "persist: malformed state file, starting fresh");
            return;
        }
    };

    let (posts, comments) = (persisted.posts.len(), persisted.comments.len());
    for post in persisted.posts {
        store.posts.insert(post.id, post);
    }
    for comment in persisted.comments {
        store.comments.insert(comment.id, comment);
    }
    store.sync_id_counters();

    tracing::info!(posts, comments, path = %path.display(), "persist: state restored");
}
