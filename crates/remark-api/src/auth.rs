use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use chrono::{DateTime, Duration, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use remark_types::api::{SessionResponse, TokenRequest, TokenRequestResponse};
use remark_types::models::{AuthenticationCodeEmail, User};

use crate::error::ApiError;
use crate::middleware::create_session_token;
use crate::state::{AppState, AppStateInner, run_blocking};

/// How long an issued token stays valid. Also the lockout window once
/// [`MAX_TOKEN_SENDS`] emails went out for the same token.
pub const TOKEN_LIFETIME_MINUTES: i64 = 15;

/// Emails one address may trigger per token lifetime.
pub const MAX_TOKEN_SENDS: u32 = 3;

pub fn token_lifetime() -> Duration {
    Duration::minutes(TOKEN_LIFETIME_MINUTES)
}

pub fn token_is_valid(user: &User, now: DateTime<Utc>) -> bool {
    !user.auth_token.is_empty() && now - user.auth_token_created_at <= token_lifetime()
}

/// Expected wait communicated to the user after the `sent`-th email.
pub fn delay_hint(sent: u32) -> Duration {
    match sent {
        1 => Duration::minutes(1),
        2 => Duration::minutes(5),
        _ => Duration::zero(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenRequestOutcome {
    /// Email queued; expect it within `delay`.
    Queued { delay: Duration },
    /// The dispatcher refused the email (cap reached or queue full).
    Unavailable,
    /// Too many emails for this token; nothing was sent or changed.
    Throttled { retry_after: Duration },
}

impl From<TokenRequestOutcome> for TokenRequestResponse {
    fn from(outcome: TokenRequestOutcome) -> Self {
        match outcome {
            TokenRequestOutcome::Queued { delay } => TokenRequestResponse::Queued {
                delay_seconds: delay.num_seconds(),
            },
            TokenRequestOutcome::Unavailable => TokenRequestResponse::Unavailable,
            TokenRequestOutcome::Throttled { retry_after } => TokenRequestResponse::Throttled {
                retry_after_seconds: retry_after.num_seconds(),
            },
        }
    }
}

impl AppStateInner {
    /// Email a login token to an existing user.
    ///
    /// Reuses the current token while it is valid, mints a new one otherwise,
    /// and refuses after [`MAX_TOKEN_SENDS`] sends of the same token. Unknown
    /// addresses are `NotFound`; no user is created here.
    pub fn request_token(&self, email: &str) -> Result<TokenRequestOutcome, ApiError> {
        self.request_token_at(email, Utc::now())
    }

    pub fn request_token_at(
        &self,
        email: &str,
        now: DateTime<Utc>,
    ) -> Result<TokenRequestOutcome, ApiError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(ApiError::IllegalArgument("email address is required".into()));
        }

        let issued = self.store.modify_user_by_email(email, |user| {
            if !token_is_valid(user, now) {
                user.auth_token = Uuid::new_v4().to_string();
                user.auth_token_sent_to_client = 0;
                user.auth_token_created_at = now;
            }
            if user.auth_token_sent_to_client >= MAX_TOKEN_SENDS {
                return None;
            }
            user.auth_token_sent_to_client += 1;
            user.auth_token_created_at = now;
            Some((user.id, user.auth_token.clone(), user.auth_token_sent_to_client))
        })?;

        let Some((user_id, code, sent)) = issued else {
            warn!(to = %email, "Token requests exhausted, refusing");
            return Ok(TokenRequestOutcome::Throttled {
                retry_after: token_lifetime(),
            });
        };

        info!(user_id, sent, "Issuing authentication token");
        let queued = self.mailer.send_email(AuthenticationCodeEmail {
            email_address: email.to_string(),
            code,
        });

        if queued {
            Ok(TokenRequestOutcome::Queued { delay: delay_hint(sent) })
        } else {
            Ok(TokenRequestOutcome::Unavailable)
        }
    }

    /// Resolve a token to its user. Unknown and expired tokens fail the same way.
    ///
    /// The token is not consumed: the same link keeps working until it expires.
    pub fn validate_token(&self, token: &str) -> Result<User, ApiError> {
        self.validate_token_at(token, Utc::now())
    }

    pub fn validate_token_at(&self, token: &str, now: DateTime<Utc>) -> Result<User, ApiError> {
        if token.is_empty() {
            return Err(ApiError::InvalidToken);
        }

        let user = self.store.user_by_auth_token(token).map_err(|e| match ApiError::from(e) {
            ApiError::NotFound(_) => ApiError::InvalidToken,
            other => other,
        })?;

        if !token_is_valid(&user, now) {
            return Err(ApiError::InvalidToken);
        }
        Ok(user)
    }
}

// -- Handlers --

/// POST /userauthentication
pub async fn request_link(
    State(state): State<AppState>,
    Json(req): Json<TokenRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let outcome = run_blocking(&state, move |s| s.request_token(&req.email)).await?;
    Ok(Json(TokenRequestResponse::from(outcome)))
}

/// GET /userauthentication/{token}
pub async fn authenticate(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let user = run_blocking(&state, move |s| s.validate_token(&token)).await?;

    let token = create_session_token(&state.session.secret, &user, state.session.max_age_days)?;
    info!(user_id = user.id, "User authenticated");

    Ok(Json(SessionResponse {
        user_id: user.id,
        email: user.email,
        token,
    }))
}
