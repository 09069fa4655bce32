//! Social feed post and comment models.

use serde::{Deserialize, Serialize};

/// A comment attached to a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    /// Display name of the commenter ("You" for local comments)
    pub author_label: String,
    /// Never empty; stored trimmed
    pub text: String,
}

impl Comment {
    pub fn new(
        id: impl Into<String>,
        author_label: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            author_label: author_label.into(),
            text: text.into(),
        }
    }

    /// First character of the author label, used as an avatar.
    pub fn avatar_initial(&self) -> char {
        initial_of(&self.author_label)
    }
}

/// A post in the community feed with its local interaction flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub author: String,
    /// Relative creation label ("2h", "1d")
    pub time_label: String,
    pub image_url: String,
    pub caption: String,
    /// Optimistic local count, not reconciled with any server aggregate
    pub like_count: u32,
    pub liked: bool,
    pub saved: bool,
    /// Display order is append order
    pub comments: Vec<Comment>,
}

impl Post {
    pub fn new(
        id: impl Into<String>,
        author: impl Into<String>,
        time_label: impl Into<String>,
        image_url: impl Into<String>,
        caption: impl Into<String>,
        like_count: u32,
    ) -> Self {
        Self {
            id: id.into(),
            author: author.into(),
            time_label: time_label.into(),
            image_url: image_url.into(),
            caption: caption.into(),
            like_count,
            liked: false,
            saved: false,
            comments: Vec::new(),
        }
    }

    /// Builder-style helper for seeding comments.
    pub fn with_comments(mut self, comments: Vec<Comment>) -> Self {
        self.comments = comments;
        self
    }

    pub fn avatar_initial(&self) -> char {
        initial_of(&self.author)
    }

    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }
}

fn initial_of(name: &str) -> char {
    name.chars()
        .next()
        .map(|c| c.to_ascii_uppercase())
        .unwrap_or('?')
}
