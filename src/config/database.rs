//! Database configuration module for `FinanceTracker`.
//!
//! This module handles `SQLite` database connection and table creation using `SeaORM`.
//! It provides functions for establishing database connections and creating all necessary
//! tables based on the entity definitions. The module uses `SeaORM`'s
//! `Schema::create_table_from_entity` method to generate SQL statements from the entity
//! models, ensuring that the database schema matches the Rust struct definitions without
//! requiring manual SQL.

use crate::entities::{Account, Transaction};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};
use tracing::debug;

const DEFAULT_DATABASE_URL: &str = "sqlite://data/finance_tracker.sqlite?mode=rwc";

/// Resolves the database URL for this process.
///
/// Resolution order: a `.env` file (loaded if present, non-fatal otherwise) or the
/// process environment's `DATABASE_URL`, then the `database_url` key of an optional
/// `config.toml`, then the default local `SQLite` file.
pub fn get_database_url() -> String {
    dotenvy::dotenv().ok();

    if let Ok(url) = std::env::var("DATABASE_URL") {
        return url;
    }

    if let Ok(settings) = crate::config::settings::load_default_settings() {
        if let Some(url) = settings.database_url {
            return url;
        }
    }

    DEFAULT_DATABASE_URL.to_string()
}

/// Establishes a connection to the `SQLite` database resolved by [`get_database_url`].
///
/// Foreign key enforcement is switched on for the connection, so the
/// `transactions.account_id` reference is checked by the store itself.
pub async fn create_connection() -> Result<DatabaseConnection> {
    let database_url = get_database_url();
    debug!("Connecting to database at {}", database_url);

    let db = Database::connect(&database_url).await?;
    db.execute_unprepared("PRAGMA foreign_keys = ON;").await?;
    Ok(db)
}

/// Creates all necessary database tables using `SeaORM`'s schema generation from entity
/// definitions.
///
/// This function uses the `DeriveEntityModel` macros to generate proper SQL statements
/// for table creation, ensuring the database schema matches the Rust struct definitions.
/// It creates the accounts and transactions tables.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut account_table = schema.create_table_from_entity(Account);
    let mut transaction_table = schema.create_table_from_entity(Transaction);

    db.execute(builder.build(account_table.if_not_exists()))
        .await?;
    db.execute(builder.build(transaction_table.if_not_exists()))
        .await?;

    debug!("Database tables ensured");
    Ok(())
}
