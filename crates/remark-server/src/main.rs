use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use remark_api::middleware::require_auth;
use remark_api::{AppState, AppStateInner, SessionConfig, auth, comments};
use remark_db::Store;
use remark_mail::{Dispatcher, EmailSender, LogEmailSender, SendgridEmailSender};

mod config;

use config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "remark=debug,tower_http=debug".into()),
        )
        .init();

    let config = Config::from_env()?;

    let store = Store::open(&PathBuf::from(&config.db_path), &config.encryption_key)?;
    info!("Store opened at {}", config.db_path);

    let sender: Arc<dyn EmailSender> = match &config.sendgrid {
        Some(sg) => Arc::new(SendgridEmailSender::new(
            sg.api_key.clone(),
            sg.from_name.clone(),
            sg.from_address.clone(),
            sg.subject.clone(),
            config.base_url.clone(),
        )),
        None => {
            info!("No SendGrid key configured, authentication emails will only be logged");
            Arc::new(LogEmailSender::new(config.base_url.clone()))
        }
    };
    let mailer = Dispatcher::start(sender, config.mail);

    let state: AppState = Arc::new(AppStateInner {
        store,
        mailer,
        session: SessionConfig {
            secret: config.session_secret.clone(),
            max_age_days: config.session_max_age_days,
        },
    });

    let app = router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Remark server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/status", get(|| async { "OK" }))
        .route(
            "/services/{service_key}/posts/{post_key}/comments",
            get(comments::get_post_comments).post(comments::post_comment),
        )
        .route("/userauthentication", post(auth::request_link))
        .route("/userauthentication/{token}", get(auth::authenticate))
        .with_state(state.clone());

    let protected_routes = Router::new()
        .route("/users/me/comments", get(comments::get_my_comments))
        .route(
            "/users/me/comments/{comment_id}",
            get(comments::get_my_comment)
                .put(comments::update_my_comment)
                .delete(comments::delete_my_comment),
        )
        .route(
            "/users/me/comments/{comment_id}/confirm",
            post(comments::confirm_my_comment),
        )
        .layer(middleware::from_fn_with_state(state.clone(), require_auth))
        .with_state(state);

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
