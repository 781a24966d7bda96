//! Database row types: these map directly to SQLite rows.
//! Distinct from remark-types models so ciphertext never leaves this crate.

pub struct CommentRow {
    pub id: i64,
    pub status: i64,
    pub service_id: i64,
    pub service_key: String,
    pub user_id: i64,
    pub post_key: String,
    pub body_encrypted: Vec<u8>,
    pub name_encrypted: Vec<u8>,
    pub website_encrypted: Vec<u8>,
    pub edited: bool,
    pub created_at: i64,
}

pub struct UserRow {
    pub id: i64,
    pub email: String,
    pub auth_token: Option<String>,
    pub auth_token_created_at: i64,
    pub auth_token_sent_to_client: i64,
}
