use rusqlite::Connection;
use tracing::info;

use crate::Result;

pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch("CREATE TABLE IF NOT EXISTS schema_version (version INTEGER NOT NULL);")?;

    let version: i64 = conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |r| r.get(0),
    )?;

    if version < 1 {
        info!("Running migration v1 (initial schema)");
        conn.execute_batch(
            "
            BEGIN;

            CREATE TABLE services (
                id          INTEGER PRIMARY KEY AUTOINCREMENT,
                service_key TEXT NOT NULL UNIQUE,
                origin      TEXT NOT NULL
            );

            CREATE TABLE users (
                id                        INTEGER PRIMARY KEY AUTOINCREMENT,
                email                     TEXT NOT NULL UNIQUE,
                auth_token                TEXT,
                auth_token_created_at     INTEGER NOT NULL DEFAULT 0,
                auth_token_sent_to_client INTEGER NOT NULL DEFAULT 0
            );

            CREATE UNIQUE INDEX idx_users_auth_token ON users(auth_token);

            -- status: 1 pending-authentication, 2 pending-approval, 3 approved, 4 rejected
            CREATE TABLE comments (
                id                INTEGER PRIMARY KEY AUTOINCREMENT,
                status            INTEGER NOT NULL,
                service_id        INTEGER NOT NULL REFERENCES services(id) ON DELETE CASCADE,
                user_id           INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
                post_key          TEXT NOT NULL,
                body_encrypted    BLOB NOT NULL,
                name_encrypted    BLOB NOT NULL,
                website_encrypted BLOB NOT NULL,
                edited            INTEGER NOT NULL DEFAULT 0,
                created_at        INTEGER NOT NULL
            );

            CREATE INDEX idx_comments_post ON comments(service_id, post_key, created_at);
            CREATE INDEX idx_comments_user ON comments(user_id);
            CREATE INDEX idx_comments_status ON comments(status, created_at);

            INSERT INTO schema_version (version) VALUES (1);

            COMMIT;
            ",
        )?;
    }

    Ok(())
}
