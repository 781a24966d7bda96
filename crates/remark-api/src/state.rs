use std::sync::Arc;

use tracing::error;

use remark_db::Store;
use remark_mail::Dispatcher;

use crate::error::ApiError;

pub type AppState = Arc<AppStateInner>;

/// Everything the comment lifecycle needs, built once at start-up and shared
/// by every request.
pub struct AppStateInner {
    pub store: Store,
    pub mailer: Dispatcher,
    pub session: SessionConfig,
}

pub struct SessionConfig {
    pub secret: String,
    pub max_age_days: i64,
}

/// Run a store-bound operation off the async runtime.
pub(crate) async fn run_blocking<F, T>(state: &AppState, f: F) -> Result<T, ApiError>
where
    F: FnOnce(&AppStateInner) -> Result<T, ApiError> + Send + 'static,
    T: Send + 'static,
{
    let state = state.clone();
    tokio::task::spawn_blocking(move || f(&state))
        .await
        .map_err(|e| {
            error!("spawn_blocking join error: {}", e);
            ApiError::Internal(e.to_string())
        })?
}
