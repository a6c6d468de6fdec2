//! `alunos` CLI entry-point.
//!
//! Available sub-commands:
//! - `serve`    — start the API server.
//! - `migrate`  — run pending database migrations.
//! - `evaluate` — recompute every student's approval flag.
//! - `check`    — apply the approval rule to ad-hoc values.

mod settings;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::info;
use tracing_subscriber::EnvFilter;

use db::PgStudentStore;
use engine::{approval, StudentRegistry};

use crate::settings::Settings;

#[derive(Parser)]
#[command(
    name = "alunos",
    about = "Student records API: enrolment, grades and approval status",
    version
)]
struct Cli {
    /// Path to a TOML settings file (defaults to ./config.toml when present).
    #[arg(long, global = true, env = "ALUNOS_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the REST API server.
    Serve {
        /// Overrides `server.bind`.
        #[arg(long)]
        bind: Option<SocketAddr>,
    },
    /// Run pending database migrations.
    Migrate,
    /// Recompute and store the approval flag of every student.
    Evaluate,
    /// Print the verdict for the given absences and grades.
    Check {
        #[arg(long)]
        absences: i32,
        #[arg(long)]
        n1: Decimal,
        #[arg(long)]
        n2: Decimal,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Check { absences, n1, n2 } => {
            let verdict = approval::ApprovalStatus::from(approval::is_approved(absences, n1, n2));
            println!("average {} with {absences} absences: {verdict}", approval::average(n1, n2));
        }
        Command::Serve { bind } => {
            let settings = Settings::load(cli.config.as_deref()).context("loading settings")?;
            let registry = connect(&settings, true).await?;

            if settings.database.seed_sample_data {
                registry.seed_if_empty().await.context("seeding sample students")?;
            }

            let addr = bind.unwrap_or(settings.server.bind);
            info!("Starting API server on {addr}");
            api::serve(addr, api::AppState::new(registry)).await?;
        }
        Command::Migrate => {
            let settings = Settings::load(cli.config.as_deref()).context("loading settings")?;
            connect(&settings, true).await?;
            info!("Migrations applied successfully");
        }
        Command::Evaluate => {
            let settings = Settings::load(cli.config.as_deref()).context("loading settings")?;
            let registry = connect(&settings, false).await?;
            let summary = registry.evaluate_all().await?;
            println!(
                "evaluated {} students: {} approved, {} not approved",
                summary.evaluated, summary.approved, summary.rejected
            );
        }
    }

    Ok(())
}

/// Open the pool, optionally migrate, and wrap it in a registry.
async fn connect(settings: &Settings, migrate: bool) -> anyhow::Result<StudentRegistry> {
    let pool = db::pool::create_pool(&settings.database.url, settings.database.max_connections)
        .await
        .context("failed to connect to database")?;

    if migrate {
        db::pool::run_migrations(&pool).await.context("migration failed")?;
    }

    Ok(StudentRegistry::new(Arc::new(PgStudentStore::new(pool))))
}
