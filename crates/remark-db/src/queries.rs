use chrono::{DateTime, Utc};
use rusqlite::types::Value;
use rusqlite::{Connection, Row, TransactionBehavior, params, params_from_iter};

use remark_types::models::{Comment, CommentContent, CommentStatus, Service, User};

use crate::models::{CommentRow, UserRow};
use crate::{Result, Store, StoreError};

const COMMENT_SELECT: &str = "SELECT c.id, c.status, c.service_id, s.service_key, c.user_id, c.post_key,
            c.body_encrypted, c.name_encrypted, c.website_encrypted, c.edited, c.created_at
     FROM comments c
     JOIN services s ON s.id = c.service_id";

const USER_SELECT: &str = "SELECT id, email, auth_token, auth_token_created_at, auth_token_sent_to_client
     FROM users";

impl Store {
    // -- Services --

    pub fn create_service(&self, service_key: &str, origin: &str) -> Result<Service> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO services (service_key, origin) VALUES (?1, ?2)",
                (service_key, origin),
            )?;
            Ok(Service {
                id: conn.last_insert_rowid(),
                service_key: service_key.to_string(),
                origin: origin.to_string(),
            })
        })
    }

    pub fn service_by_key(&self, service_key: &str) -> Result<Service> {
        self.with_conn(|conn| {
            conn.query_row(
                "SELECT id, service_key, origin FROM services WHERE service_key = ?1",
                [service_key],
                map_service,
            )
            .optional()?
            .ok_or(StoreError::NotFound("service"))
        })
    }

    pub fn service_by_id(&self, id: i64) -> Result<Service> {
        self.with_conn(|conn| {
            conn.query_row(
                "SELECT id, service_key, origin FROM services WHERE id = ?1",
                [id],
                map_service,
            )
            .optional()?
            .ok_or(StoreError::NotFound("service"))
        })
    }

    // -- Users --

    pub fn create_user_by_email(&self, email: &str) -> Result<User> {
        self.with_conn(|conn| {
            conn.execute("INSERT INTO users (email) VALUES (?1)", [email])?;
            query_user(conn, "id", conn.last_insert_rowid())
        })
    }

    /// Find the user for `email`, creating the row on first use. Safe against
    /// two submissions racing to create the same address.
    pub fn find_or_create_user_by_email(&self, email: &str) -> Result<User> {
        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO users (email) VALUES (?1) ON CONFLICT(email) DO NOTHING",
                [email],
            )?;
            query_user(conn, "email", email)
        })
    }

    pub fn user_by_email(&self, email: &str) -> Result<User> {
        self.with_conn(|conn| query_user(conn, "email", email))
    }

    pub fn user_by_id(&self, id: i64) -> Result<User> {
        self.with_conn(|conn| query_user(conn, "id", id))
    }

    pub fn user_by_auth_token(&self, token: &str) -> Result<User> {
        self.with_conn(|conn| query_user(conn, "auth_token", token))
    }

    /// Read-modify-write of one user row inside an immediate transaction.
    ///
    /// `f` sees the current row and may change it; the row is written back
    /// only if it actually changed. `f` runs under the store lock and must not
    /// block.
    pub fn modify_user_by_email<F, R>(&self, email: &str, f: F) -> Result<R>
    where
        F: FnOnce(&mut User) -> R,
    {
        self.with_conn_mut(|conn| {
            let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

            let mut user = query_user(&tx, "email", email)?;
            let before = user.clone();
            let result = f(&mut user);
            if user != before {
                write_user(&tx, &user)?;
            }

            tx.commit()?;
            Ok(result)
        })
    }

    // -- Comments --

    pub fn create_comment(
        &self,
        status: CommentStatus,
        service_id: i64,
        user_id: i64,
        post_key: &str,
        content: &CommentContent,
    ) -> Result<i64> {
        let [body, name, website] = self.encrypt_content(content)?;
        let created_at = Utc::now().timestamp();

        self.with_conn(|conn| {
            conn.execute(
                "INSERT INTO comments
                    (status, service_id, user_id, post_key, body_encrypted, name_encrypted, website_encrypted, edited, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, 0, ?8)",
                params![status.code(), service_id, user_id, post_key, body, name, website, created_at],
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    pub fn comment(&self, id: i64) -> Result<Comment> {
        let row = self.with_conn(|conn| {
            conn.query_row(&format!("{COMMENT_SELECT} WHERE c.id = ?1"), [id], map_comment)
                .optional()?
                .ok_or(StoreError::NotFound("comment"))
        })?;
        self.decrypt_comment(row)
    }

    /// Replace the content of a comment and mark it edited. Returns the
    /// resulting status, which is promoted out of pending-authentication.
    pub fn update_comment_content(&self, id: i64, content: &CommentContent) -> Result<CommentStatus> {
        let [body, name, website] = self.encrypt_content(content)?;

        self.with_conn_mut(|conn| {
            let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

            let code: i64 = tx
                .query_row("SELECT status FROM comments WHERE id = ?1", [id], |r| r.get(0))
                .optional()?
                .ok_or(StoreError::NotFound("comment"))?;
            let status = CommentStatus::from_code(code)
                .ok_or(StoreError::UnknownStatus(code))?
                .after_edit();

            tx.execute(
                "UPDATE comments
                 SET status = ?2, body_encrypted = ?3, name_encrypted = ?4, website_encrypted = ?5, edited = 1
                 WHERE id = ?1",
                params![id, status.code(), body, name, website],
            )?;

            tx.commit()?;
            Ok(status)
        })
    }

    /// Move a comment from pending-authentication to pending-approval.
    /// Returns `false` when the comment is in any other status.
    pub fn confirm_comment(&self, id: i64) -> Result<bool> {
        self.with_conn(|conn| {
            let updated = conn.execute(
                "UPDATE comments SET status = ?2 WHERE id = ?1 AND status = ?3",
                params![
                    id,
                    CommentStatus::PendingApproval.code(),
                    CommentStatus::PendingAuthentication.code()
                ],
            )?;
            if updated > 0 {
                return Ok(true);
            }

            let exists: Option<i64> = conn
                .query_row("SELECT id FROM comments WHERE id = ?1", [id], |r| r.get(0))
                .optional()?;
            match exists {
                Some(_) => Ok(false),
                None => Err(StoreError::NotFound("comment")),
            }
        })
    }

    /// Overwrite the status, leaving content untouched.
    pub fn set_comment_status(&self, id: i64, status: CommentStatus) -> Result<()> {
        self.with_conn(|conn| {
            let updated = conn.execute(
                "UPDATE comments SET status = ?2 WHERE id = ?1",
                params![id, status.code()],
            )?;
            if updated == 0 {
                return Err(StoreError::NotFound("comment"));
            }
            Ok(())
        })
    }

    pub fn delete_comment(&self, id: i64) -> Result<()> {
        self.with_conn(|conn| {
            match conn.execute("DELETE FROM comments WHERE id = ?1", [id])? {
                0 => Err(StoreError::NotFound("comment")),
                1 => Ok(()),
                affected => Err(StoreError::IntegrityViolation { affected }),
            }
        })
    }

    /// Comments for one post restricted to `statuses`, oldest first.
    /// An empty status list matches nothing.
    pub fn comments_for_post(
        &self,
        service_id: i64,
        post_key: &str,
        statuses: &[CommentStatus],
    ) -> Result<Vec<Comment>> {
        if statuses.is_empty() {
            return Ok(vec![]);
        }

        let sql = format!(
            "{COMMENT_SELECT} WHERE c.service_id = ?1 AND c.post_key = ?2 AND c.status IN ({})
             ORDER BY c.created_at, c.id",
            placeholders(3, statuses.len())
        );
        let mut values = vec![Value::Integer(service_id), Value::Text(post_key.to_string())];
        values.extend(statuses.iter().map(|s| Value::Integer(s.code())));

        let rows = self.with_conn(|conn| query_comments(conn, &sql, values))?;
        self.decrypt_comments(rows)
    }

    /// Every comment written by `user_id`, in any status, oldest first.
    pub fn comments_for_user(&self, user_id: i64) -> Result<Vec<Comment>> {
        let sql = format!("{COMMENT_SELECT} WHERE c.user_id = ?1 ORDER BY c.created_at, c.id");
        let rows = self.with_conn(|conn| query_comments(conn, &sql, vec![Value::Integer(user_id)]))?;
        self.decrypt_comments(rows)
    }

    /// Comments across all services in the given statuses, newest first.
    /// An empty status list means every status.
    pub fn comments_by_status(&self, statuses: &[CommentStatus]) -> Result<Vec<Comment>> {
        let mut sql = COMMENT_SELECT.to_string();
        if !statuses.is_empty() {
            sql.push_str(&format!(" WHERE c.status IN ({})", placeholders(1, statuses.len())));
        }
        sql.push_str(" ORDER BY c.created_at DESC, c.id DESC");
        let values = statuses.iter().map(|s| Value::Integer(s.code())).collect();

        let rows = self.with_conn(|conn| query_comments(conn, &sql, values))?;
        self.decrypt_comments(rows)
    }

    // -- Encryption boundary --

    fn encrypt_content(&self, content: &CommentContent) -> Result<[Vec<u8>; 3]> {
        Ok([
            self.cipher.encrypt(&content.body)?,
            self.cipher.encrypt(&content.author_name)?,
            self.cipher.encrypt(&content.website)?,
        ])
    }

    fn decrypt_comment(&self, row: CommentRow) -> Result<Comment> {
        Ok(Comment {
            id: row.id,
            status: CommentStatus::from_code(row.status).ok_or(StoreError::UnknownStatus(row.status))?,
            service_id: row.service_id,
            service_key: row.service_key,
            user_id: row.user_id,
            post_key: row.post_key,
            body: self.cipher.decrypt(&row.body_encrypted)?,
            author_name: self.cipher.decrypt(&row.name_encrypted)?,
            website: self.cipher.decrypt(&row.website_encrypted)?,
            edited: row.edited,
            created_at: timestamp(row.created_at),
        })
    }

    /// All-or-nothing: one undecryptable row fails the whole listing.
    fn decrypt_comments(&self, rows: Vec<CommentRow>) -> Result<Vec<Comment>> {
        rows.into_iter().map(|row| self.decrypt_comment(row)).collect()
    }
}

fn query_user<P: rusqlite::ToSql>(conn: &Connection, column: &str, value: P) -> Result<User> {
    let row = conn
        .query_row(&format!("{USER_SELECT} WHERE {column} = ?1"), [value], |row| {
            Ok(UserRow {
                id: row.get(0)?,
                email: row.get(1)?,
                auth_token: row.get(2)?,
                auth_token_created_at: row.get(3)?,
                auth_token_sent_to_client: row.get(4)?,
            })
        })
        .optional()?
        .ok_or(StoreError::NotFound("user"))?;

    Ok(User {
        id: row.id,
        email: row.email,
        auth_token: row.auth_token.unwrap_or_default(),
        auth_token_created_at: timestamp(row.auth_token_created_at),
        // Out of range counts stay locked out rather than wrapping back to zero.
        auth_token_sent_to_client: u32::try_from(row.auth_token_sent_to_client).unwrap_or(u32::MAX),
    })
}

fn write_user(conn: &Connection, user: &User) -> Result<()> {
    // Empty tokens are stored as NULL so the unique index ignores them.
    let token = (!user.auth_token.is_empty()).then_some(user.auth_token.as_str());
    let updated = conn.execute(
        "UPDATE users SET auth_token = ?2, auth_token_created_at = ?3, auth_token_sent_to_client = ?4
         WHERE id = ?1",
        params![
            user.id,
            token,
            user.auth_token_created_at.timestamp(),
            user.auth_token_sent_to_client
        ],
    )?;
    if updated == 0 {
        return Err(StoreError::NotFound("user"));
    }
    Ok(())
}

fn query_comments(conn: &Connection, sql: &str, values: Vec<Value>) -> Result<Vec<CommentRow>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params_from_iter(values), map_comment)?
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(rows)
}

fn map_comment(row: &Row<'_>) -> rusqlite::Result<CommentRow> {
    Ok(CommentRow {
        id: row.get(0)?,
        status: row.get(1)?,
        service_id: row.get(2)?,
        service_key: row.get(3)?,
        user_id: row.get(4)?,
        post_key: row.get(5)?,
        body_encrypted: row.get(6)?,
        name_encrypted: row.get(7)?,
        website_encrypted: row.get(8)?,
        edited: row.get(9)?,
        created_at: row.get(10)?,
    })
}

fn map_service(row: &Row<'_>) -> rusqlite::Result<Service> {
    Ok(Service {
        id: row.get(0)?,
        service_key: row.get(1)?,
        origin: row.get(2)?,
    })
}

/// `?start, ?start+1, ...` for `n` bound parameters.
fn placeholders(start: usize, n: usize) -> String {
    (start..start + n)
        .map(|i| format!("?{}", i))
        .collect::<Vec<_>>()
        .join(", ")
}

fn timestamp(secs: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(secs, 0).unwrap_or_default()
}

/// Extension trait for optional query results
trait OptionalExt<T> {
    fn optional(self) -> Result<Option<T>>;
}

impl<T> OptionalExt<T> for std::result::Result<T, rusqlite::Error> {
    fn optional(self) -> Result<Option<T>> {
        match self {
            Ok(val) => Ok(Some(val)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use remark_crypto::CryptoError;
    use remark_crypto::keys::generate_key;

    fn store() -> Store {
        Store::open_in_memory(&generate_key()).unwrap()
    }

    fn content(body: &str) -> CommentContent {
        CommentContent {
            body: body.to_string(),
            author_name: "Foo".to_string(),
            website: "https://foo.example.com".to_string(),
        }
    }

    fn seed(store: &Store) -> (Service, User) {
        let service = store.create_service("TESTSERVICE", "example.com").unwrap();
        let user = store.create_user_by_email("foo@example.com").unwrap();
        (service, user)
    }

    #[test]
    fn services_resolve_by_key_and_id() {
        let store = store();
        let created = store.create_service("TESTSERVICE", "example.com").unwrap();

        assert_eq!(store.service_by_key("TESTSERVICE").unwrap(), created);
        assert_eq!(store.service_by_id(created.id).unwrap(), created);
        assert!(matches!(store.service_by_key("OTHER"), Err(StoreError::NotFound("service"))));
        assert!(store.create_service("TESTSERVICE", "elsewhere.com").is_err());
    }

    #[test]
    fn new_users_have_no_token() {
        let store = store();
        let user = store.create_user_by_email("foo@example.com").unwrap();

        assert_eq!(user.email, "foo@example.com");
        assert!(user.auth_token.is_empty());
        assert_eq!(user.auth_token_sent_to_client, 0);
        assert_eq!(store.user_by_email("foo@example.com").unwrap(), user);
        assert_eq!(store.user_by_id(user.id).unwrap(), user);
        assert!(matches!(store.user_by_email("bar@example.com"), Err(StoreError::NotFound("user"))));
    }

    #[test]
    fn find_or_create_reuses_existing_user() {
        let store = store();
        let first = store.find_or_create_user_by_email("foo@example.com").unwrap();
        let second = store.find_or_create_user_by_email("foo@example.com").unwrap();
        assert_eq!(first.id, second.id);
    }

    #[test]
    fn users_without_tokens_do_not_collide() {
        let store = store();
        let a = store.create_user_by_email("a@example.com").unwrap();
        let b = store.create_user_by_email("b@example.com").unwrap();
        for email in [&a.email, &b.email] {
            store
                .modify_user_by_email(email, |u| u.auth_token_sent_to_client = 1)
                .unwrap();
        }
        assert!(matches!(store.user_by_auth_token(""), Err(StoreError::NotFound(_))));
    }

    #[test]
    fn modify_user_persists_changes() {
        let store = store();
        let user = store.create_user_by_email("foo@example.com").unwrap();
        let now = DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap();

        let count = store
            .modify_user_by_email("foo@example.com", |u| {
                u.auth_token = "token-1".into();
                u.auth_token_created_at = now;
                u.auth_token_sent_to_client += 1;
                u.auth_token_sent_to_client
            })
            .unwrap();
        assert_eq!(count, 1);

        let reloaded = store.user_by_auth_token("token-1").unwrap();
        assert_eq!(reloaded.id, user.id);
        assert_eq!(reloaded.auth_token_created_at, now);
        assert_eq!(reloaded.auth_token_sent_to_client, 1);

        assert!(matches!(
            store.modify_user_by_email("nobody@example.com", |_| ()),
            Err(StoreError::NotFound("user"))
        ));
    }

    #[test]
    fn comment_content_is_encrypted_at_rest() {
        let store = store();
        let (service, user) = seed(&store);
        let id = store
            .create_comment(CommentStatus::PendingAuthentication, service.id, user.id, "POST1", &content("hello"))
            .unwrap();

        let raw: Vec<u8> = store
            .with_conn(|conn| {
                Ok(conn.query_row("SELECT body_encrypted FROM comments WHERE id = ?1", [id], |r| r.get(0))?)
            })
            .unwrap();
        assert!(!raw.windows(5).any(|w| w == b"hello"));

        let comment = store.comment(id).unwrap();
        assert_eq!(comment.body, "hello");
        assert_eq!(comment.author_name, "Foo");
        assert_eq!(comment.service_key, "TESTSERVICE");
        assert_eq!(comment.status, CommentStatus::PendingAuthentication);
        assert!(!comment.edited);
    }

    #[test]
    fn post_listing_filters_by_status() {
        let store = store();
        let (service, user) = seed(&store);
        let pending = store
            .create_comment(CommentStatus::PendingApproval, service.id, user.id, "POST1", &content("one"))
            .unwrap();
        let approved = store
            .create_comment(CommentStatus::Approved, service.id, user.id, "POST1", &content("two"))
            .unwrap();
        store
            .create_comment(CommentStatus::Approved, service.id, user.id, "POST2", &content("three"))
            .unwrap();

        let public = store
            .comments_for_post(service.id, "POST1", &[CommentStatus::Approved])
            .unwrap();
        assert_eq!(public.iter().map(|c| c.id).collect::<Vec<_>>(), vec![approved]);

        let both = store
            .comments_for_post(service.id, "POST1", &[CommentStatus::Approved, CommentStatus::PendingApproval])
            .unwrap();
        assert_eq!(both.iter().map(|c| c.id).collect::<Vec<_>>(), vec![pending, approved]);

        assert!(store.comments_for_post(service.id, "POST1", &[]).unwrap().is_empty());
    }

    #[test]
    fn user_and_status_listings() {
        let store = store();
        let (service, user) = seed(&store);
        let other = store.create_user_by_email("bar@example.com").unwrap();
        store
            .create_comment(CommentStatus::PendingAuthentication, service.id, user.id, "POST1", &content("a"))
            .unwrap();
        store
            .create_comment(CommentStatus::Rejected, service.id, user.id, "POST2", &content("b"))
            .unwrap();
        store
            .create_comment(CommentStatus::Approved, service.id, other.id, "POST1", &content("c"))
            .unwrap();

        assert_eq!(store.comments_for_user(user.id).unwrap().len(), 2);
        assert_eq!(store.comments_by_status(&[]).unwrap().len(), 3);
        let rejected = store.comments_by_status(&[CommentStatus::Rejected]).unwrap();
        assert_eq!(rejected.len(), 1);
        assert_eq!(rejected[0].body, "b");
    }

    #[test]
    fn edit_promotes_pending_authentication() {
        let store = store();
        let (service, user) = seed(&store);
        let id = store
            .create_comment(CommentStatus::PendingAuthentication, service.id, user.id, "POST1", &content("hello"))
            .unwrap();

        let status = store.update_comment_content(id, &content("hello again")).unwrap();
        assert_eq!(status, CommentStatus::PendingApproval);

        let comment = store.comment(id).unwrap();
        assert_eq!(comment.body, "hello again");
        assert!(comment.edited);

        store.set_comment_status(id, CommentStatus::Approved).unwrap();
        let status = store.update_comment_content(id, &content("third")).unwrap();
        assert_eq!(status, CommentStatus::Approved);

        assert!(matches!(
            store.update_comment_content(9999, &content("x")),
            Err(StoreError::NotFound("comment"))
        ));
    }

    #[test]
    fn confirm_only_moves_pending_authentication() {
        let store = store();
        let (service, user) = seed(&store);
        let id = store
            .create_comment(CommentStatus::PendingAuthentication, service.id, user.id, "POST1", &content("hello"))
            .unwrap();

        assert!(store.confirm_comment(id).unwrap());
        assert_eq!(store.comment(id).unwrap().status, CommentStatus::PendingApproval);
        assert!(!store.confirm_comment(id).unwrap());
        assert_eq!(store.comment(id).unwrap().status, CommentStatus::PendingApproval);
        assert!(matches!(store.confirm_comment(9999), Err(StoreError::NotFound(_))));
    }

    #[test]
    fn delete_exactly_once() {
        let store = store();
        let (service, user) = seed(&store);
        let id = store
            .create_comment(CommentStatus::Approved, service.id, user.id, "POST1", &content("hello"))
            .unwrap();

        assert!(matches!(store.delete_comment(9999), Err(StoreError::NotFound(_))));
        store.delete_comment(id).unwrap();
        assert!(matches!(store.delete_comment(id), Err(StoreError::NotFound(_))));
        assert!(matches!(store.set_comment_status(id, CommentStatus::Rejected), Err(StoreError::NotFound(_))));
    }

    #[test]
    fn deleting_owner_cascades_to_comments() {
        let store = store();
        let (service, user) = seed(&store);
        store
            .create_comment(CommentStatus::Approved, service.id, user.id, "POST1", &content("hello"))
            .unwrap();

        store
            .with_conn(|conn| Ok(conn.execute("DELETE FROM users WHERE id = ?1", [user.id])?))
            .unwrap();
        assert!(store.comments_by_status(&[]).unwrap().is_empty());
    }

    #[test]
    fn wrong_key_fails_whole_listing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("remark.db");
        {
            let store = Store::open(&path, &generate_key()).unwrap();
            let (service, user) = seed(&store);
            store
                .create_comment(CommentStatus::Approved, service.id, user.id, "POST1", &content("hello"))
                .unwrap();
        }

        let store = Store::open(&path, &generate_key()).unwrap();
        let service = store.service_by_key("TESTSERVICE").unwrap();
        let result = store.comments_for_post(service.id, "POST1", &[CommentStatus::Approved]);
        assert!(matches!(
            result,
            Err(StoreError::Crypto(CryptoError::AuthenticationFailure))
        ));
    }

    #[test]
    fn truncated_ciphertext_is_an_authentication_failure() {
        let store = store();
        let (service, user) = seed(&store);
        store
            .create_comment(CommentStatus::Approved, service.id, user.id, "POST1", &content("one"))
            .unwrap();
        let id = store
            .create_comment(CommentStatus::Approved, service.id, user.id, "POST1", &content("two"))
            .unwrap();

        store
            .with_conn(|conn| {
                Ok(conn.execute(
                    "UPDATE comments SET body_encrypted = substr(body_encrypted, 1, 5) WHERE id = ?1",
                    [id],
                )?)
            })
            .unwrap();

        assert!(matches!(
            store.comments_for_post(service.id, "POST1", &[CommentStatus::Approved]),
            Err(StoreError::Crypto(CryptoError::AuthenticationFailure))
        ));
        assert!(matches!(
            store.comment(id),
            Err(StoreError::Crypto(CryptoError::AuthenticationFailure))
        ));
    }

    #[test]
    fn out_of_range_send_count_stays_locked_out() {
        let store = store();
        let user = store.create_user_by_email("foo@example.com").unwrap();

        for stored in [-1_i64, i64::from(u32::MAX) + 1] {
            store
                .with_conn(|conn| {
                    Ok(conn.execute(
                        "UPDATE users SET auth_token_sent_to_client = ?2 WHERE id = ?1",
                        params![user.id, stored],
                    )?)
                })
                .unwrap();
            assert_eq!(store.user_by_id(user.id).unwrap().auth_token_sent_to_client, u32::MAX);
        }
    }
}
