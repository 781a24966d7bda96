// Operator tooling: provisioning and moderation against the comment store.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use remark_api::comments::parse_status_filter;
use remark_crypto::keys::{generate_key, key_from_hex, key_to_hex};
use remark_db::Store;
use remark_types::models::CommentStatus;

#[derive(Parser)]
#[command(name = "remark-admin")]
#[command(about = "Remark - comment store administration", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// SQLite database path
    #[arg(long, global = true, env = "REMARK_DB_PATH", default_value = "remark.db")]
    db: PathBuf,

    /// 64 hex character encryption key
    #[arg(long, global = true, env = "REMARK_ENCRYPTION_KEY", hide_env_values = true)]
    encryption_key: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a fresh encryption key
    CreateEncryptionKey,

    /// Register a site that may embed comments
    CreateService {
        #[arg(long)]
        service_key: String,

        /// Origin allowed to frame the comments, e.g. https://blog.example.com
        #[arg(long)]
        origin: String,
    },

    /// List comments across all services, newest first
    List {
        /// Comma separated statuses (pending-authentication, pending-approval, approved, rejected)
        #[arg(long, default_value = "")]
        status: String,
    },

    /// Make a comment public
    Approve { id: i64 },

    /// Hide a comment permanently
    Reject { id: i64 },

    /// Delete a comment
    Delete { id: i64 },
}

fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "remark=info".into()),
        )
        .init();

    let cli = Cli::parse();

    if let Commands::CreateEncryptionKey = cli.command {
        println!("{}", key_to_hex(&generate_key()));
        return Ok(());
    }

    let key = cli
        .encryption_key
        .as_deref()
        .context("--encryption-key or REMARK_ENCRYPTION_KEY is required")?;
    let store = Store::open(&cli.db, &key_from_hex(key)?)
        .with_context(|| format!("opening {}", cli.db.display()))?;

    match cli.command {
        Commands::CreateEncryptionKey => {}
        Commands::CreateService { service_key, origin } => {
            let service = store.create_service(&service_key, &origin)?;
            println!("created service {} ({}) for {}", service.service_key, service.id, service.origin);
        }
        Commands::List { status } => {
            let statuses = parse_status_filter(&status)?;
            for c in store.comments_by_status(&statuses)? {
                println!(
                    "{:>6}  {:<22}  {}/{}  {}  {}",
                    c.id,
                    c.status.as_str(),
                    c.service_key,
                    c.post_key,
                    c.created_at.format("%Y-%m-%d %H:%M"),
                    c.author_name,
                );
                println!("        {}", c.body.replace('\n', "\n        "));
            }
        }
        Commands::Approve { id } => {
            store.set_comment_status(id, CommentStatus::Approved)?;
            println!("approved {}", id);
        }
        Commands::Reject { id } => {
            store.set_comment_status(id, CommentStatus::Rejected)?;
            println!("rejected {}", id);
        }
        Commands::Delete { id } => {
            store.delete_comment(id)?;
            println!("deleted {}", id);
        }
    }

    Ok(())
}
