//! CLI administration tool for bistro-gateway.
//!
//! Provides commands for inspecting user accounts, granting and revoking the
//! admin role, and checking the database, without going through the HTTP API.
//! Role changes have no HTTP route on purpose: the API re-reads roles from
//! the store on every request, so a change made here is effective on the
//! next call, even for tokens issued earlier.
//!
//! # Usage
//!
//! ```bash
//! # List all users
//! cargo run --bin admin -- user list
//!
//! # Grant the admin role
//! cargo run --bin admin -- user promote alice@example.com
//!
//! # Revoke the admin role
//! cargo run --bin admin -- user demote alice@example.com
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use bistro_gateway::domain::entities::Role;
use bistro_gateway::domain::repositories::UserRepository;
use bistro_gateway::infrastructure::persistence::PgUserRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing bistro-gateway.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage user accounts
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// User management subcommands.
#[derive(Subcommand)]
enum UserAction {
    /// List all users
    List,

    /// Grant the admin role to a user
    Promote {
        /// Email of the account to promote
        email: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Revoke the admin role from a user
    Demote {
        /// Email of the account to demote
        email: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Connect to database
    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::User { action } => handle_user_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches user management commands.
async fn handle_user_action(action: UserAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgUserRepository::new(Arc::new(pool.clone())));

    match action {
        UserAction::List => {
            list_users(repo).await?;
        }
        UserAction::Promote { email, yes } => {
            set_role(repo, email, Role::Admin, yes).await?;
        }
        UserAction::Demote { email, yes } => {
            set_role(repo, email, Role::User, yes).await?;
        }
    }

    Ok(())
}

/// Lists all user accounts with their roles.
///
/// # Output Format
///
/// ```text
/// 👥 Users
///
///   #   Email                          Registered           Role
///   ─────────────────────────────────────────────────────────────
///   1   alice@example.com              2026-01-15 10:30     ADMIN
///   2   bob@example.com                2026-01-16 14:20     user
/// ```
async fn list_users(repo: Arc<PgUserRepository>) -> Result<()> {
    println!("{}", "👥 Users".bright_blue().bold());
    println!();

    let users = repo
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list users: {:?}", e))?;

    if users.is_empty() {
        println!("{}", "  No users found".yellow());
        return Ok(());
    }

    println!(
        "  {:<5} {:<30} {:<20} {:<10}",
        "#".bright_white().bold(),
        "Email".bright_white().bold(),
        "Registered".bright_white().bold(),
        "Role".bright_white().bold()
    );
    println!("  {}", "─".repeat(70).bright_black());

    for user in &users {
        let role = match user.role {
            Role::Admin => "ADMIN".green().bold(),
            Role::User => "user".normal(),
        };

        println!(
            "  {:<5} {:<30} {:<20} {}",
            user.sequential_id.to_string().bright_black(),
            user.email.cyan(),
            user.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            role
        );
    }

    println!();
    println!("  Total: {}", users.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Sets a user's role with a confirmation prompt.
///
/// # Safety
///
/// - Requires confirmation unless `--yes` is passed (default: No)
/// - A granted role is live on the user's next request; tokens do not
///   need to be reissued
async fn set_role(
    repo: Arc<PgUserRepository>,
    email: String,
    role: Role,
    skip_confirm: bool,
) -> Result<()> {
    let title = match role {
        Role::Admin => "⬆️  Promote to admin",
        Role::User => "⬇️  Demote to user",
    };
    println!("{}", title.bright_blue().bold());
    println!();

    let user = repo
        .find_by_email(&email)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {:?}", e))?
        .context("User not found")?;

    if user.role == role {
        println!(
            "{}",
            format!("⚠️  {} already has role '{}'", user.email, role).yellow()
        );
        return Ok(());
    }

    println!("  Email: {}", user.email.cyan());
    println!("  Role:  {} → {}", user.role, role.to_string().bold());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Apply this change?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    repo.update_role(&email, role)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to update role: {:?}", e))?;

    println!();
    println!("{}", "✅ Role updated!".green().bold());
    println!();

    Ok(())
}

/// Displays system statistics.
///
/// Shows per-collection record counts.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let users_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await?;

    let admins_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE role = 'admin'")
        .fetch_one(pool)
        .await?;

    let menu_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM menu_items")
        .fetch_one(pool)
        .await?;

    let reviews_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM reviews")
        .fetch_one(pool)
        .await?;

    let carts_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM cart_entries")
        .fetch_one(pool)
        .await?;

    println!(
        "  Users:        {}",
        users_count.to_string().bright_green().bold()
    );
    println!(
        "  Admins:       {}",
        admins_count.to_string().bright_green().bold()
    );
    println!(
        "  Menu items:   {}",
        menu_count.to_string().bright_green().bold()
    );
    println!(
        "  Reviews:      {}",
        reviews_count.to_string().bright_green().bold()
    );
    println!(
        "  Cart entries: {}",
        carts_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
