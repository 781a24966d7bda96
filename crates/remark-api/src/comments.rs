use axum::{
    Extension, Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
};
use tracing::info;

use remark_types::api::{
    ConfirmResponse, OwnComment, PublicComment, SubmitCommentRequest, UpdateCommentRequest,
};
use remark_types::models::{Comment, CommentContent, CommentStatus, Service};

use crate::error::ApiError;
use crate::middleware::{Claims, optional_session};
use crate::state::{AppState, AppStateInner, run_blocking};

/// A comment form as submitted by a visitor.
#[derive(Debug, Clone)]
pub struct CommentSubmission {
    /// Set when the author edits an existing comment.
    pub comment_id: Option<i64>,
    pub email: String,
    pub content: CommentContent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmOutcome {
    Confirmed,
    /// The comment was not pending authentication, typically a second click
    /// on the same link. Not an error for the user.
    NothingToConfirm,
}

impl AppStateInner {
    /// Create a comment, or edit one when `comment_id` is set.
    ///
    /// Anonymous submissions resolve (or create) the user by email and start
    /// pending authentication; submissions with a session start pending
    /// approval under the session user.
    pub fn submit_comment(
        &self,
        service_key: &str,
        post_key: &str,
        session_user: Option<i64>,
        submission: CommentSubmission,
    ) -> Result<Comment, ApiError> {
        if service_key.is_empty() || post_key.is_empty() {
            return Err(ApiError::IllegalArgument("service key and post key are required".into()));
        }
        let email = submission.email.trim();
        if email.is_empty() {
            return Err(ApiError::IllegalArgument("email address is required".into()));
        }
        if submission.content.body.trim().is_empty() {
            return Err(ApiError::IllegalArgument("comment must not be empty".into()));
        }

        if let Some(comment_id) = submission.comment_id {
            let user_id = session_user.ok_or(ApiError::Unauthorized)?;
            return self.edit_comment(user_id, comment_id, &submission.content);
        }

        let service = self.store.service_by_key(service_key)?;
        let (user_id, status) = match session_user {
            Some(user_id) => (user_id, CommentStatus::initial(true)),
            None => (
                self.store.find_or_create_user_by_email(email)?.id,
                CommentStatus::initial(false),
            ),
        };

        let id = self
            .store
            .create_comment(status, service.id, user_id, post_key, &submission.content)?;
        info!(comment_id = id, user_id, %status, "Comment created");

        Ok(self.store.comment(id)?)
    }

    /// Load a comment that must belong to `user_id`.
    pub fn own_comment(&self, user_id: i64, comment_id: i64) -> Result<Comment, ApiError> {
        let comment = self.store.comment(comment_id)?;
        if comment.user_id != user_id {
            return Err(ApiError::Forbidden { user_id, comment_id });
        }
        Ok(comment)
    }

    /// Rewrite an own comment. Promotes it out of pending authentication.
    pub fn edit_comment(
        &self,
        user_id: i64,
        comment_id: i64,
        content: &CommentContent,
    ) -> Result<Comment, ApiError> {
        self.own_comment(user_id, comment_id)?;
        let status = self.store.update_comment_content(comment_id, content)?;
        info!(comment_id, %status, "Comment edited");

        Ok(self.store.comment(comment_id)?)
    }

    pub fn confirm_comment(&self, user_id: i64, comment_id: i64) -> Result<ConfirmOutcome, ApiError> {
        self.own_comment(user_id, comment_id)?;

        if self.store.confirm_comment(comment_id)? {
            info!(comment_id, "Comment confirmed");
            Ok(ConfirmOutcome::Confirmed)
        } else {
            Ok(ConfirmOutcome::NothingToConfirm)
        }
    }

    pub fn delete_own_comment(&self, user_id: i64, comment_id: i64) -> Result<(), ApiError> {
        self.own_comment(user_id, comment_id)?;
        self.delete_comment(comment_id)
    }

    // -- Moderation. Callers are responsible for authorizing the moderator. --

    pub fn approve_comment(&self, comment_id: i64) -> Result<(), ApiError> {
        self.store.set_comment_status(comment_id, CommentStatus::Approved)?;
        info!(comment_id, "Comment approved");
        Ok(())
    }

    pub fn reject_comment(&self, comment_id: i64) -> Result<(), ApiError> {
        self.store.set_comment_status(comment_id, CommentStatus::Rejected)?;
        info!(comment_id, "Comment rejected");
        Ok(())
    }

    pub fn delete_comment(&self, comment_id: i64) -> Result<(), ApiError> {
        self.store.delete_comment(comment_id)?;
        info!(comment_id, "Comment deleted");
        Ok(())
    }

    // -- Listings --

    /// The public view of a post: approved comments only.
    pub fn post_comments(
        &self,
        service_key: &str,
        post_key: &str,
    ) -> Result<(Service, Vec<Comment>), ApiError> {
        let service = self.store.service_by_key(service_key)?;
        let comments = self
            .store
            .comments_for_post(service.id, post_key, &[CommentStatus::Approved])?;
        Ok((service, comments))
    }

    /// Everything a user wrote, in every status.
    pub fn user_comments(&self, user_id: i64) -> Result<Vec<Comment>, ApiError> {
        Ok(self.store.comments_for_user(user_id)?)
    }

    /// Moderation queue across all services. Empty `statuses` shows everything.
    pub fn dashboard_comments(&self, statuses: &[CommentStatus]) -> Result<Vec<Comment>, ApiError> {
        Ok(self.store.comments_by_status(statuses)?)
    }
}

/// Parse a comma separated status filter such as `pending-approval,approved`.
pub fn parse_status_filter(raw: &str) -> Result<Vec<CommentStatus>, ApiError> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<CommentStatus>()
                .map_err(|e| ApiError::IllegalArgument(e.to_string()))
        })
        .collect()
}

pub fn parse_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::IllegalArgument(format!("malformed id: {}", raw)))
}

// -- Handlers --

/// GET /services/{service_key}/posts/{post_key}/comments
pub async fn get_post_comments(
    State(state): State<AppState>,
    Path((service_key, post_key)): Path<(String, String)>,
) -> Result<impl IntoResponse, ApiError> {
    let (service, comments) =
        run_blocking(&state, move |s| s.post_comments(&service_key, &post_key)).await?;

    let comments: Vec<PublicComment> = comments.into_iter().map(PublicComment::from).collect();
    Ok((
        [(
            header::CONTENT_SECURITY_POLICY,
            format!("frame-ancestors {}", service.origin),
        )],
        Json(comments),
    ))
}

/// POST /services/{service_key}/posts/{post_key}/comments
pub async fn post_comment(
    State(state): State<AppState>,
    Path((service_key, post_key)): Path<(String, String)>,
    headers: HeaderMap,
    Json(req): Json<SubmitCommentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let session_user = optional_session(&headers, &state.session.secret)?.map(|c| c.sub);
    let submission = CommentSubmission {
        comment_id: req.comment_id,
        email: req.email,
        content: CommentContent {
            body: req.comment,
            author_name: req.name,
            website: req.website,
        },
    };

    let comment = run_blocking(&state, move |s| {
        s.submit_comment(&service_key, &post_key, session_user, submission)
    })
    .await?;

    Ok((StatusCode::CREATED, Json(OwnComment::from(comment))))
}

/// GET /users/me/comments
pub async fn get_my_comments(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
) -> Result<impl IntoResponse, ApiError> {
    let comments = run_blocking(&state, move |s| s.user_comments(claims.sub)).await?;
    Ok(Json(comments.into_iter().map(OwnComment::from).collect::<Vec<_>>()))
}

/// GET /users/me/comments/{comment_id}
pub async fn get_my_comment(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(comment_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let comment_id = parse_id(&comment_id)?;
    let comment = run_blocking(&state, move |s| s.own_comment(claims.sub, comment_id)).await?;
    Ok(Json(OwnComment::from(comment)))
}

/// PUT /users/me/comments/{comment_id}
pub async fn update_my_comment(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(comment_id): Path<String>,
    Json(req): Json<UpdateCommentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let comment_id = parse_id(&comment_id)?;
    if req.comment.trim().is_empty() {
        return Err(ApiError::IllegalArgument("comment must not be empty".into()));
    }
    let content = CommentContent {
        body: req.comment,
        author_name: req.name,
        website: req.website,
    };

    let comment =
        run_blocking(&state, move |s| s.edit_comment(claims.sub, comment_id, &content)).await?;
    Ok(Json(OwnComment::from(comment)))
}

/// POST /users/me/comments/{comment_id}/confirm
pub async fn confirm_my_comment(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(comment_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let comment_id = parse_id(&comment_id)?;
    let (outcome, comment) = run_blocking(&state, move |s| {
        let outcome = s.confirm_comment(claims.sub, comment_id)?;
        Ok((outcome, s.own_comment(claims.sub, comment_id)?))
    })
    .await?;

    Ok(Json(ConfirmResponse {
        confirmed: outcome == ConfirmOutcome::Confirmed,
        status: comment.status,
    }))
}

/// DELETE /users/me/comments/{comment_id}
pub async fn delete_my_comment(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(comment_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let comment_id = parse_id(&comment_id)?;
    run_blocking(&state, move |s| s.delete_own_comment(claims.sub, comment_id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use remark_crypto::keys::generate_key;
    use remark_db::Store;
    use remark_mail::{Dispatcher, DispatcherConfig, MockEmailSender};

    use super::*;
    use crate::state::SessionConfig;

    fn state() -> AppStateInner {
        let state = AppStateInner {
            store: Store::open_in_memory(&generate_key()).unwrap(),
            mailer: Dispatcher::start(Arc::new(MockEmailSender::new()), DispatcherConfig::default()),
            session: SessionConfig {
                secret: "test-secret".into(),
                max_age_days: 30,
            },
        };
        state.store.create_service("TESTSERVICE", "example.com").unwrap();
        state
    }

    fn submission(email: &str, body: &str) -> CommentSubmission {
        CommentSubmission {
            comment_id: None,
            email: email.to_string(),
            content: CommentContent {
                body: body.to_string(),
                author_name: "Foo".to_string(),
                website: String::new(),
            },
        }
    }

    #[tokio::test]
    async fn anonymous_and_session_submissions_start_differently() {
        let state = state();

        let anonymous = state
            .submit_comment("TESTSERVICE", "POST1", None, submission("foo@example.com", "hello"))
            .unwrap();
        assert_eq!(anonymous.status, CommentStatus::PendingAuthentication);

        let user = state.store.user_by_email("foo@example.com").unwrap();
        assert_eq!(anonymous.user_id, user.id);

        let authenticated = state
            .submit_comment("TESTSERVICE", "POST1", Some(user.id), submission("foo@example.com", "again"))
            .unwrap();
        assert_eq!(authenticated.status, CommentStatus::PendingApproval);
        assert_eq!(authenticated.user_id, user.id);
    }

    #[tokio::test]
    async fn submission_validation() {
        let state = state();

        assert!(matches!(
            state.submit_comment("TESTSERVICE", "POST1", None, submission("", "hello")),
            Err(ApiError::IllegalArgument(_))
        ));
        assert!(matches!(
            state.submit_comment("TESTSERVICE", "POST1", None, submission("foo@example.com", "  ")),
            Err(ApiError::IllegalArgument(_))
        ));
        assert!(matches!(
            state.submit_comment("NOPE", "POST1", None, submission("foo@example.com", "hello")),
            Err(ApiError::NotFound("service"))
        ));

        let mut edit = submission("foo@example.com", "hello");
        edit.comment_id = Some(1);
        assert!(matches!(
            state.submit_comment("TESTSERVICE", "POST1", None, edit),
            Err(ApiError::Unauthorized)
        ));
    }

    #[tokio::test]
    async fn editing_through_submission_promotes() {
        let state = state();
        let comment = state
            .submit_comment("TESTSERVICE", "POST1", None, submission("foo@example.com", "hello"))
            .unwrap();

        let mut edit = submission("foo@example.com", "hello, edited");
        edit.comment_id = Some(comment.id);
        let edited = state
            .submit_comment("TESTSERVICE", "POST1", Some(comment.user_id), edit)
            .unwrap();

        assert_eq!(edited.id, comment.id);
        assert_eq!(edited.body, "hello, edited");
        assert!(edited.edited);
        assert_eq!(edited.status, CommentStatus::PendingApproval);
    }

    #[tokio::test]
    async fn confirm_twice_is_a_no_op() {
        let state = state();
        let comment = state
            .submit_comment("TESTSERVICE", "POST1", None, submission("foo@example.com", "hello"))
            .unwrap();

        assert_eq!(
            state.confirm_comment(comment.user_id, comment.id).unwrap(),
            ConfirmOutcome::Confirmed
        );
        assert_eq!(
            state.confirm_comment(comment.user_id, comment.id).unwrap(),
            ConfirmOutcome::NothingToConfirm
        );
        assert_eq!(
            state.store.comment(comment.id).unwrap().status,
            CommentStatus::PendingApproval
        );
    }

    #[tokio::test]
    async fn strangers_cannot_touch_comments() {
        let state = state();
        let comment = state
            .submit_comment("TESTSERVICE", "POST1", None, submission("foo@example.com", "hello"))
            .unwrap();
        let stranger = state.store.create_user_by_email("bar@example.com").unwrap();

        assert!(matches!(
            state.confirm_comment(stranger.id, comment.id),
            Err(ApiError::Forbidden { .. })
        ));
        assert!(matches!(
            state.delete_own_comment(stranger.id, comment.id),
            Err(ApiError::Forbidden { .. })
        ));
        assert_eq!(
            state.store.comment(comment.id).unwrap().status,
            CommentStatus::PendingAuthentication
        );
    }

    #[tokio::test]
    async fn moderation_controls_public_listing() {
        let state = state();
        let first = state
            .submit_comment("TESTSERVICE", "POST1", None, submission("foo@example.com", "one"))
            .unwrap();
        let second = state
            .submit_comment("TESTSERVICE", "POST1", None, submission("bar@example.com", "two"))
            .unwrap();

        state.approve_comment(first.id).unwrap();
        state.reject_comment(second.id).unwrap();

        let (service, public) = state.post_comments("TESTSERVICE", "POST1").unwrap();
        assert_eq!(service.origin, "example.com");
        assert_eq!(public.len(), 1);
        assert_eq!(public[0].body, "one");

        assert_eq!(state.dashboard_comments(&[CommentStatus::Rejected]).unwrap().len(), 1);
        assert_eq!(state.dashboard_comments(&[]).unwrap().len(), 2);
        assert_eq!(state.user_comments(second.user_id).unwrap().len(), 1);

        assert!(matches!(state.approve_comment(9999), Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn delete_then_delete_again() {
        let state = state();
        let comment = state
            .submit_comment("TESTSERVICE", "POST1", None, submission("foo@example.com", "hello"))
            .unwrap();

        state.delete_own_comment(comment.user_id, comment.id).unwrap();
        assert!(matches!(
            state.delete_comment(comment.id),
            Err(ApiError::NotFound("comment"))
        ));
    }

    #[tokio::test]
    async fn corrupted_comment_surfaces_as_authentication_failure() {
        let state = state();
        let comment = state
            .submit_comment("TESTSERVICE", "POST1", None, submission("foo@example.com", "hello"))
            .unwrap();
        state.approve_comment(comment.id).unwrap();

        state
            .store
            .with_conn(|conn| {
                Ok(conn.execute(
                    "UPDATE comments SET website_encrypted = substr(website_encrypted, 1, 5) WHERE id = ?1",
                    [comment.id],
                )?)
            })
            .unwrap();

        assert!(matches!(
            state.post_comments("TESTSERVICE", "POST1"),
            Err(ApiError::AuthenticationFailure)
        ));
    }

    #[test]
    fn status_filter_parsing() {
        assert_eq!(
            parse_status_filter("pending-approval, approved").unwrap(),
            vec![CommentStatus::PendingApproval, CommentStatus::Approved]
        );
        assert!(parse_status_filter("").unwrap().is_empty());
        assert!(matches!(parse_status_filter("approved,bogus"), Err(ApiError::IllegalArgument(_))));
    }

    #[test]
    fn malformed_ids_are_illegal_arguments() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert!(matches!(parse_id("4x2"), Err(ApiError::IllegalArgument(_))));
    }
}
