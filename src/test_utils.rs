//! Shared test utilities for `FinanceTracker`.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use crate::{
    core::{account, transaction},
    entities::{self, TransactionKind},
    errors::Result,
};
use chrono::NaiveDate;
use sea_orm::DatabaseConnection;
use tracing_subscriber::EnvFilter;

/// Installs a fmt subscriber for test output. Safe to call from every test.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_test_writer()
        .try_init();
}

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    init_test_tracing();
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// A fixed effective date for tests that don't care about ordering.
#[must_use]
pub fn default_test_date() -> chrono::NaiveDateTime {
    test_date(2026, 1, 15)
}

/// Builds a naive midday timestamp for the given calendar date.
///
/// # Panics
/// Panics if the date is not a valid calendar date.
#[must_use]
pub fn test_date(year: i32, month: u32, day: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(12, 0, 0))
        .expect("valid test date")
}

/// A `TransactionInput` with default category/description/date.
#[must_use]
pub fn test_input(account_id: i64, kind: TransactionKind, amount: f64) -> transaction::TransactionInput {
    transaction::TransactionInput {
        amount,
        kind,
        category: "Misc".to_string(),
        description: "Test transaction".to_string(),
        date: default_test_date(),
        account_id,
    }
}

/// Creates a test account with sensible defaults.
///
/// # Arguments
/// * `db` - Database connection
/// * `name` - Account name
///
/// # Defaults
/// * `initial_balance`: 100.0
/// * `account_type`: "Checking"
/// * `currency`: "USD"
/// * `notes`: None
pub async fn create_test_account(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::account::Model> {
    account::create_account(
        db,
        name.to_string(),
        100.0,
        "Checking".to_string(),
        "USD".to_string(),
        None,
    )
    .await
}

/// Creates a test account with custom parameters.
/// Use this when you need to test specific account configurations.
pub async fn create_custom_account(
    db: &DatabaseConnection,
    name: &str,
    initial_balance: f64,
    account_type: &str,
    currency: &str,
    notes: Option<String>,
) -> Result<entities::account::Model> {
    account::create_account(
        db,
        name.to_string(),
        initial_balance,
        account_type.to_string(),
        currency.to_string(),
        notes,
    )
    .await
}

/// Creates a test transaction with default category, description, and date.
pub async fn create_test_transaction(
    db: &DatabaseConnection,
    account_id: i64,
    kind: TransactionKind,
    amount: f64,
) -> Result<entities::transaction::Model> {
    transaction::create_transaction(db, test_input(account_id, kind, amount)).await
}

/// Creates a test transaction with a custom description and category.
pub async fn create_custom_transaction(
    db: &DatabaseConnection,
    account_id: i64,
    kind: TransactionKind,
    amount: f64,
    description: &str,
    category: &str,
) -> Result<entities::transaction::Model> {
    let mut input = test_input(account_id, kind, amount);
    input.description = description.to_string();
    input.category = category.to_string();
    transaction::create_transaction(db, input).await
}

/// Sets up a complete test environment with an account.
/// Returns (db, account) for common test scenarios.
pub async fn setup_with_account() -> Result<(DatabaseConnection, entities::account::Model)> {
    let db = setup_test_db().await?;
    let account = create_test_account(&db, "Test Account").await?;
    Ok((db, account))
}
