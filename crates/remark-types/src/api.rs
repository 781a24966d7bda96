use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Comment, CommentStatus};

// -- Comments --

/// Body of `POST /services/{service_key}/posts/{post_key}/comments`.
/// Carrying a `comment_id` turns the submission into an edit.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SubmitCommentRequest {
    pub comment_id: Option<i64>,
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub website: String,
    pub comment: String,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateCommentRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub website: String,
    pub comment: String,
}

/// What the embedding page gets to see: no user ids, no status.
#[derive(Debug, Serialize)]
pub struct PublicComment {
    pub id: i64,
    pub author_name: String,
    pub website: String,
    pub comment: String,
    pub edited: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for PublicComment {
    fn from(c: Comment) -> Self {
        Self {
            id: c.id,
            author_name: c.author_name,
            website: c.website,
            comment: c.body,
            edited: c.edited,
            created_at: c.created_at,
        }
    }
}

/// A comment as shown to its own author.
#[derive(Debug, Serialize)]
pub struct OwnComment {
    pub id: i64,
    pub status: CommentStatus,
    pub service_key: String,
    pub post_key: String,
    pub author_name: String,
    pub website: String,
    pub comment: String,
    pub edited: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Comment> for OwnComment {
    fn from(c: Comment) -> Self {
        Self {
            id: c.id,
            status: c.status,
            service_key: c.service_key,
            post_key: c.post_key,
            author_name: c.author_name,
            website: c.website,
            comment: c.body,
            edited: c.edited,
            created_at: c.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ConfirmResponse {
    pub confirmed: bool,
    pub status: CommentStatus,
}

// -- User authentication --

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TokenRequest {
    pub email: String,
}

#[derive(Debug, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum TokenRequestResponse {
    /// The email was queued; it is expected to arrive within `delay_seconds`.
    Queued { delay_seconds: i64 },
    /// The mail queue refused the email, try again later.
    Unavailable,
    /// Too many emails for this address, try again after `retry_after_seconds`.
    Throttled { retry_after_seconds: i64 },
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub user_id: i64,
    pub email: String,
    pub token: String,
}
