//! Database module for SQLite persistence.
//!
//! SQLite is the source of truth for all application data.

mod repository;

pub use repository::*;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;

/// Initialize the database connection pool and run migrations.
pub async fn init_database(db_path: &Path) -> Result<SqlitePool, sqlx::Error> {
    // Ensure the parent directory exists
    if let Some(parent) = db_path.parent() {
        tokio::fs::create_dir_all(parent).await.ok();
    }

    let db_url = format!("sqlite:{}?mode=rwc", db_path.display());

    let options = SqliteConnectOptions::from_str(&db_url)?
        .create_if_missing(true)
        .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
        .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    // Run embedded migrations
    run_migrations(&pool).await?;

    Ok(pool)
}

/// Run database migrations.
async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS clients (
            id TEXT PRIMARY KEY,
            nom TEXT NOT NULL,
            created_at TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS managers (
            id TEXT PRIMARY KEY,
            nom TEXT NOT NULL,
            email TEXT,
            created_at TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS collaborateurs (
            id TEXT PRIMARY KEY,
            nom TEXT NOT NULL,
            email TEXT,
            created_at TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS projets (
            id TEXT PRIMARY KEY,
            nom TEXT NOT NULL,
            client_id TEXT NOT NULL REFERENCES clients(id),
            created_at TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS rdqs (
            id TEXT PRIMARY KEY,
            titre TEXT NOT NULL,
            date_heure TEXT NOT NULL,
            adresse TEXT,
            mode TEXT NOT NULL,
            statut TEXT NOT NULL,
            description TEXT,
            indications TEXT,
            manager_id TEXT NOT NULL REFERENCES managers(id),
            projet_id TEXT NOT NULL REFERENCES projets(id),
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS rdq_collaborateurs (
            rdq_id TEXT NOT NULL REFERENCES rdqs(id) ON DELETE CASCADE,
            collaborateur_id TEXT NOT NULL REFERENCES collaborateurs(id),
            PRIMARY KEY (rdq_id, collaborateur_id)
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS documents (
            id TEXT PRIMARY KEY,
            rdq_id TEXT NOT NULL REFERENCES rdqs(id) ON DELETE CASCADE,
            nom TEXT NOT NULL,
            created_at TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS bilans (
            id TEXT PRIMARY KEY,
            rdq_id TEXT NOT NULL REFERENCES rdqs(id) ON DELETE CASCADE,
            note INTEGER NOT NULL,
            commentaire TEXT,
            auteur TEXT NOT NULL,
            created_at TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes for common search predicates
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_rdqs_date_heure ON rdqs(date_heure);
        CREATE INDEX IF NOT EXISTS idx_rdqs_statut ON rdqs(statut);
        CREATE INDEX IF NOT EXISTS idx_rdqs_manager_id ON rdqs(manager_id);
        CREATE INDEX IF NOT EXISTS idx_rdqs_projet_id ON rdqs(projet_id);
        CREATE INDEX IF NOT EXISTS idx_rdq_collaborateurs_collaborateur
            ON rdq_collaborateurs(collaborateur_id);
        CREATE INDEX IF NOT EXISTS idx_bilans_rdq_id ON bilans(rdq_id);
        CREATE INDEX IF NOT EXISTS idx_documents_rdq_id ON documents(rdq_id);
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
