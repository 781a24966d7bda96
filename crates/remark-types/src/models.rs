use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A registered embedding site. Created by the admin CLI, immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: i64,
    pub service_key: String,
    pub origin: String,
}

/// A commenter, identified by email address.
///
/// `auth_token` is empty when no token has been issued yet. The token fields
/// are only written by the authentication workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub auth_token: String,
    pub auth_token_created_at: DateTime<Utc>,
    pub auth_token_sent_to_client: u32,
}

/// Moderation state of a comment. The discriminants are the on-disk codes
/// and must never be renumbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CommentStatus {
    PendingAuthentication = 1,
    PendingApproval = 2,
    Approved = 3,
    Rejected = 4,
}

impl CommentStatus {
    pub const ALL: [CommentStatus; 4] = [
        Self::PendingAuthentication,
        Self::PendingApproval,
        Self::Approved,
        Self::Rejected,
    ];

    pub fn code(self) -> i64 {
        self as i64
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::PendingAuthentication),
            2 => Some(Self::PendingApproval),
            3 => Some(Self::Approved),
            4 => Some(Self::Rejected),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::PendingAuthentication => "pending-authentication",
            Self::PendingApproval => "pending-approval",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }

    /// Status a freshly submitted comment starts in.
    pub fn initial(author_authenticated: bool) -> Self {
        if author_authenticated {
            Self::PendingApproval
        } else {
            Self::PendingAuthentication
        }
    }

    /// Target of a self-service confirmation, or `None` when there is nothing
    /// to confirm.
    pub fn confirmed(self) -> Option<Self> {
        match self {
            Self::PendingAuthentication => Some(Self::PendingApproval),
            _ => None,
        }
    }

    /// Status after the author edits the content. Returning to edit proves
    /// ownership of the address, so an unauthenticated comment is promoted.
    pub fn after_edit(self) -> Self {
        self.confirmed().unwrap_or(self)
    }
}

impl fmt::Display for CommentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid comment status: {0}")]
pub struct ParseStatusError(pub String);

impl FromStr for CommentStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ParseStatusError(s.to_string()))
    }
}

/// A comment with its content already decrypted. Only the store produces these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comment {
    pub id: i64,
    pub status: CommentStatus,
    pub service_id: i64,
    pub service_key: String,
    pub user_id: i64,
    pub post_key: String,
    pub body: String,
    pub author_name: String,
    pub website: String,
    pub edited: bool,
    pub created_at: DateTime<Utc>,
}

/// The user-editable part of a comment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommentContent {
    pub body: String,
    pub author_name: String,
    pub website: String,
}

/// Payload handed to the mail dispatcher. Never persisted.
#[derive(Clone, PartialEq, Eq)]
pub struct AuthenticationCodeEmail {
    pub email_address: String,
    pub code: String,
}

// The code is a live credential, keep it out of log output.
impl fmt::Debug for AuthenticationCodeEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthenticationCodeEmail")
            .field("email_address", &self.email_address)
            .field("code", &"<redacted>")
            .finish()
    }
}
