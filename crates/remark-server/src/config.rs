use anyhow::{Context, bail};

use remark_mail::DispatcherConfig;

/// Placeholder secrets shipped in sample env files. Refused at start-up.
const PLACEHOLDER_SECRETS: &[&str] = &["change-me", "dev-secret-change-me", "secret", "changeme"];

#[derive(Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub db_path: String,
    pub encryption_key: [u8; 32],
    pub session_secret: String,
    pub session_max_age_days: i64,
    pub base_url: String,
    pub sendgrid: Option<SendgridConfig>,
    pub mail: DispatcherConfig,
}

#[derive(Clone)]
pub struct SendgridConfig {
    pub api_key: String,
    pub from_name: String,
    pub from_address: String,
    pub subject: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let or = |name: &str, default: &str| var(name).unwrap_or_else(|| default.to_string());

        let key_hex = var("REMARK_ENCRYPTION_KEY")
            .context("REMARK_ENCRYPTION_KEY is required (generate one with `remark-admin create-encryption-key`)")?;
        let encryption_key = remark_crypto::keys::key_from_hex(&key_hex)
            .context("REMARK_ENCRYPTION_KEY must be 64 hex characters")?;

        let session_secret = var("REMARK_SESSION_SECRET").context("REMARK_SESSION_SECRET is required")?;
        if session_secret.trim().is_empty() || PLACEHOLDER_SECRETS.contains(&session_secret.as_str()) {
            bail!("REMARK_SESSION_SECRET is empty or a placeholder, set a real secret");
        }

        let sendgrid = var("REMARK_SENDGRID_API_KEY")
            .filter(|k| !k.trim().is_empty())
            .map(|api_key| SendgridConfig {
                api_key,
                from_name: or("REMARK_EMAIL_FROM_NAME", "Remark"),
                from_address: or("REMARK_EMAIL_FROM_ADDRESS", "noreply@localhost"),
                subject: or("REMARK_EMAIL_SUBJECT", "Your authentication code"),
            });

        let defaults = DispatcherConfig::default();

        Ok(Self {
            host: or("REMARK_HOST", "0.0.0.0"),
            port: or("REMARK_PORT", "8080").parse().context("REMARK_PORT must be a port number")?,
            db_path: or("REMARK_DB_PATH", "remark.db"),
            encryption_key,
            session_secret,
            session_max_age_days: or("REMARK_SESSION_MAX_AGE_DAYS", "30")
                .parse()
                .context("REMARK_SESSION_MAX_AGE_DAYS must be a number")?,
            base_url: or("REMARK_BASE_URL", "http://localhost:8080"),
            sendgrid,
            mail: DispatcherConfig {
                capacity: or("REMARK_MAIL_QUEUE_CAPACITY", &defaults.capacity.to_string())
                    .parse()
                    .context("REMARK_MAIL_QUEUE_CAPACITY must be a number")?,
                send_cap: or("REMARK_MAIL_SEND_CAP", &defaults.send_cap.to_string())
                    .parse()
                    .context("REMARK_MAIL_SEND_CAP must be a number")?,
            },
        })
    }
}
