//! Feed store: the in-memory owner of posts and their interaction flags.
//!
//! All mutations are synchronous and run to completion on the UI task.
//! Sharing is split in two so the clipboard write can run in a spawned task
//! without borrowing the store: [`FeedStore::share_target`] resolves the link,
//! [`ShareRequest::deliver`] awaits the clipboard.

use std::time::Duration;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::FeedError;
use crate::models::{Comment, Post};
use crate::traits::{ClipboardError, ClipboardSink};

/// Author label used for comments written in this session.
pub const LOCAL_AUTHOR: &str = "You";

/// Link shared when the post id cannot be resolved.
pub const DEFAULT_SHARE_FALLBACK: &str = "https://carbon-tracker.app/feed";

/// A resolved share: the post (if any) and the text handed to the clipboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareRequest {
    pub post_id: String,
    pub url: String,
}

/// Result of a share attempt. Both variants carry the link so the UI can
/// fall back to presenting it for manual copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    Copied { url: String },
    Failed { url: String },
}

impl ShareOutcome {
    pub fn url(&self) -> &str {
        match self {
            ShareOutcome::Copied { url } | ShareOutcome::Failed { url } => url,
        }
    }

    pub fn is_copied(&self) -> bool {
        matches!(self, ShareOutcome::Copied { .. })
    }

    /// Toast text for this outcome.
    pub fn notification(&self) -> String {
        match self {
            ShareOutcome::Copied { .. } => "Image URL copied to clipboard".to_string(),
            ShareOutcome::Failed { url } => format!("Share link (copy): {}", url),
        }
    }
}

impl ShareRequest {
    /// Write the link to the clipboard, giving up after `timeout`.
    ///
    /// Never fails: clipboard errors and timeouts become `ShareOutcome::Failed`.
    pub async fn deliver<C>(self, clipboard: &C, timeout: Duration) -> ShareOutcome
    where
        C: ClipboardSink + ?Sized,
    {
        let result = match tokio::time::timeout(timeout, clipboard.write(&self.url)).await {
            Ok(result) => result,
            Err(_) => Err(ClipboardError::TimedOut {
                millis: timeout.as_millis() as u64,
            }),
        };

        match result {
            Ok(()) => {
                info!(post_id = %self.post_id, "Share link copied to clipboard");
                ShareOutcome::Copied { url: self.url }
            }
            Err(e) => {
                warn!(post_id = %self.post_id, error = %e, "Clipboard write failed, falling back to manual copy");
                ShareOutcome::Failed { url: self.url }
            }
        }
    }
}

/// Owns the post collection for the lifetime of the session.
#[derive(Debug, Clone)]
pub struct FeedStore {
    posts: Vec<Post>,
    share_fallback: String,
}

impl Default for FeedStore {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl FeedStore {
    pub fn new(posts: Vec<Post>) -> Self {
        Self {
            posts,
            share_fallback: DEFAULT_SHARE_FALLBACK.to_string(),
        }
    }

    /// Store populated with the built-in dataset.
    pub fn seeded() -> Self {
        Self::new(super::seed::posts())
    }

    /// Override the link used when sharing an unknown post.
    pub fn with_share_fallback(mut self, url: impl Into<String>) -> Self {
        self.share_fallback = url.into();
        self
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn get(&self, post_id: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == post_id)
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    fn get_mut(&mut self, post_id: &str) -> Result<&mut Post, FeedError> {
        self.posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or_else(|| FeedError::not_found(post_id))
    }

    /// Flip `liked` and adjust the like count, never going below zero.
    pub fn toggle_like(&mut self, post_id: &str) -> Result<&Post, FeedError> {
        let post = self.get_mut(post_id)?;
        if post.liked {
            post.liked = false;
            post.like_count = post.like_count.saturating_sub(1);
        } else {
            post.liked = true;
            post.like_count = post.like_count.saturating_add(1);
        }
        debug!(post_id, liked = post.liked, likes = post.like_count, "Toggled like");
        Ok(post)
    }

    /// Flip `saved`. Returns the new value.
    pub fn toggle_save(&mut self, post_id: &str) -> Result<bool, FeedError> {
        let post = self.get_mut(post_id)?;
        post.saved = !post.saved;
        debug!(post_id, saved = post.saved, "Toggled save");
        Ok(post.saved)
    }

    /// Append a comment with the trimmed text.
    ///
    /// Blank text is rejected before the post is looked up.
    pub fn add_comment(&mut self, post_id: &str, text: &str) -> Result<&Comment, FeedError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(FeedError::invalid_input("comment text is empty"));
        }

        let post = self.get_mut(post_id)?;
        let comment = Comment::new(
            format!("c-{}", Uuid::new_v4().simple()),
            LOCAL_AUTHOR,
            text,
        );
        post.comments.push(comment);
        debug!(post_id, comments = post.comments.len(), "Comment added");

        // Just pushed
        Ok(&post.comments[post.comments.len() - 1])
    }

    /// Resolve the link to share for a post.
    ///
    /// Unknown ids resolve to the app's own feed link rather than failing.
    pub fn share_target(&self, post_id: &str) -> ShareRequest {
        let url = match self.get(post_id) {
            Some(post) => post.image_url.clone(),
            None => {
                debug!(post_id, "Sharing unknown post, using fallback link");
                self.share_fallback.clone()
            }
        };
        ShareRequest {
            post_id: post_id.to_string(),
            url,
        }
    }

    /// Resolve and deliver a share in one call.
    pub async fn share<C>(&self, post_id: &str, clipboard: &C, timeout: Duration) -> ShareOutcome
    where
        C: ClipboardSink + ?Sized,
    {
        self.share_target(post_id).deliver(clipboard, timeout).await
    }
}
