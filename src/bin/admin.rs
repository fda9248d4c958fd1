//! CLI administration tool for golf-practice.
//!
//! Manages accounts, prints a user's per-club statistics and runs database
//! maintenance without going through the web dashboard.
//!
//! # Usage
//!
//! ```bash
//! # Create an account (prompts for the username, generates a password)
//! cargo run --bin admin -- user create
//!
//! # List and delete accounts
//! cargo run --bin admin -- user list
//! cargo run --bin admin -- user delete alice
//!
//! # Per-club statistics in bag order
//! cargo run --bin admin -- stats alice --from 2025-06-01
//!
//! # Maintenance
//! cargo run --bin admin -- session purge
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_PATH`: same database the server uses
//! - `SESSION_SECRET`: required by `user` and `session` commands; must match
//!   the server, otherwise created passwords will not verify

use golf_practice::config::Config;
use golf_practice::domain::analysis::MissBucket;
use golf_practice::domain::entities::CurrentUser;
use golf_practice::state::AppState;
use golf_practice::utils::dates::resolve_range;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;
use std::sync::Arc;

/// CLI tool for managing golf-practice.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage user accounts
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Show a user's per-club statistics in bag order
    Stats {
        /// Account name
        username: String,

        /// First day, inclusive (YYYY-MM-DD)
        #[arg(long)]
        from: Option<NaiveDate>,

        /// Last day, inclusive (YYYY-MM-DD)
        #[arg(long)]
        to: Option<NaiveDate>,
    },

    /// Manage login sessions
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum UserAction {
    /// Create an account
    Create {
        #[arg(short, long)]
        username: Option<String>,

        /// Password (generated if not provided)
        #[arg(short, long)]
        password: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all accounts
    List,

    /// Delete an account with its clubs, shots and sessions
    Delete { username: String },
}

#[derive(Subcommand)]
enum SessionAction {
    /// Delete expired sessions
    Purge,
}

#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let pool = connect(&Config::load_database_url()).await?;

    match cli.command {
        Commands::User { action } => handle_user_action(action, pool).await?,
        Commands::Stats { username, from, to } => handle_stats(pool, username, from, to).await?,
        Commands::Session { action } => handle_session_action(action, pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

async fn connect(database_url: &str) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)
        .context("Invalid DATABASE_URL")?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .context("Failed to connect to database")?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to migrate")?;

    Ok(pool)
}

/// Services over `pool`. `SESSION_SECRET` keys the password hashes.
fn app_state(pool: SqlitePool) -> Result<AppState> {
    let secret = std::env::var("SESSION_SECRET").context("SESSION_SECRET must be set")?;

    Ok(AppState::new(
        Arc::new(pool),
        secret,
        chrono::Duration::hours(168),
        false,
    ))
}

async fn handle_user_action(action: UserAction, pool: SqlitePool) -> Result<()> {
    let state = app_state(pool)?;

    match action {
        UserAction::Create {
            username,
            password,
            yes,
        } => create_user(&state, username, password, yes).await?,
        UserAction::List => list_users(&state).await?,
        UserAction::Delete { username } => delete_user(&state, username).await?,
    }

    Ok(())
}

/// Creates an account, prompting for whatever was not passed as a flag.
///
/// A generated password is printed once; only its salted hash is stored.
async fn create_user(
    state: &AppState,
    username: Option<String>,
    password: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "👤 Create user".bright_blue().bold());
    println!();

    let username = match username {
        Some(u) => u,
        None => Input::new().with_prompt("Username").interact_text()?,
    };

    let password = match password {
        Some(p) => p,
        None => {
            let generated = generate_password();
            println!("{}", "✨ Generated password".green());
            generated
        }
    };

    println!();
    println!("  Username: {}", username.cyan());
    println!("  Password: {}", password.bright_yellow().bold());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this user?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let user = state
        .auth_service
        .register(&username, &password, &password)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create user: {}", e))?;

    println!(
        "{} {} (id {})",
        "✅ Created".green().bold(),
        user.username.cyan(),
        user.id
    );

    Ok(())
}

async fn list_users(state: &AppState) -> Result<()> {
    println!("{}", "📋 Users".bright_blue().bold());
    println!();

    let users = state
        .auth_service
        .list_users()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list users: {}", e))?;

    if users.is_empty() {
        println!("{}", "  No users found".yellow());
        println!();
        println!(
            "  Create one with: {} admin user create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<5} {:<30} {:<20}",
        "ID".bright_white().bold(),
        "Username".bright_white().bold(),
        "Created".bright_white().bold()
    );
    println!("  {}", "─".repeat(57).bright_black());

    for user in &users {
        println!(
            "  {:<5} {:<30} {}",
            user.id.to_string().bright_black(),
            user.username.cyan(),
            user.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black()
        );
    }

    println!();
    println!("  Total: {}", users.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

async fn delete_user(state: &AppState, username: String) -> Result<()> {
    let user = state
        .auth_service
        .find_user(&username)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    println!("  User: {} (id {})", user.username.cyan(), user.id);
    println!();

    let confirmed = Confirm::new()
        .with_prompt("Delete this user with all clubs and shots?")
        .default(false)
        .interact()?;

    if !confirmed {
        println!("{}", "❌ Cancelled".red());
        return Ok(());
    }

    state
        .auth_service
        .delete_user(&username)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete user: {}", e))?;

    println!("{}", "✅ User deleted".green().bold());

    Ok(())
}

/// Prints the per-club table for one user.
///
/// ```text
///   Club                 Shots  Avg     Left  Center-left ...
///   Driver                  12  231.4   8.3%  16.7%       ...
/// ```
async fn handle_stats(
    pool: SqlitePool,
    username: String,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Result<()> {
    let range = resolve_range(None, from, to).map_err(|e| anyhow::anyhow!("{}", e))?;
    let state = app_state(pool)?;

    let user = state
        .auth_service
        .find_user(&username)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    let report = state
        .stats_service
        .report(CurrentUser { user_id: user.id }, range)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to compute statistics: {}", e))?;

    println!(
        "{} {}",
        "📊 Statistics for".bright_blue().bold(),
        user.username.cyan().bold()
    );
    println!();

    if report.rows.is_empty() {
        println!("{}", "  No clubs in the bag".yellow());
        return Ok(());
    }

    let mut header = format!("  {:<24} {:>6} {:>8}", "Club", "Shots", "Avg");
    for bucket in MissBucket::ALL {
        header.push_str(&format!(" {:>13}", bucket.title()));
    }
    println!("{}", header.bright_white().bold());
    println!("  {}", "─".repeat(40 + 14 * MissBucket::ALL.len()).bright_black());

    for row in &report.rows {
        let avg = row
            .stats
            .average_distance
            .map(|a| format!("{:.1}", a))
            .unwrap_or_else(|| "-".to_string());

        let mut line = format!(
            "  {:<24} {:>6} {:>8}",
            row.club.name, row.stats.shot_count, avg
        );
        for bucket in MissBucket::ALL {
            line.push_str(&format!(" {:>12.1}%", row.stats.bucket_percent(bucket)));
        }
        println!("{}", line);
    }

    println!();
    println!(
        "  Total shots: {}",
        report.total_shots().to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

async fn handle_session_action(action: SessionAction, pool: SqlitePool) -> Result<()> {
    let state = app_state(pool)?;

    match action {
        SessionAction::Purge => {
            let removed = state
                .auth_service
                .purge_expired_sessions()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to purge sessions: {}", e))?;

            println!(
                "{} {} expired sessions",
                "✅ Removed".green().bold(),
                removed.to_string().bright_white().bold()
            );
        }
    }

    Ok(())
}

async fn handle_db_action(action: DbAction, pool: &SqlitePool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT sqlite_version()")
                .fetch_one(pool)
                .await?;
            println!("  SQLite: {}", version.bright_white());

            for table in ["users", "sessions", "clubs", "shots"] {
                let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
                    .fetch_one(pool)
                    .await?;
                println!(
                    "  {:<9} {}",
                    format!("{}:", table),
                    count.to_string().bright_green().bold()
                );
            }
            println!();
        }
    }

    Ok(())
}

/// Generates a 16 character alphanumeric password.
fn generate_password() -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    const PASSWORD_LEN: usize = 16;

    let mut rng = rand::rng();

    (0..PASSWORD_LEN)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
