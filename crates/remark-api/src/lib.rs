pub mod auth;
pub mod comments;
pub mod error;
pub mod middleware;
pub mod state;

pub use error::ApiError;
pub use state::{AppState, AppStateInner, SessionConfig};
