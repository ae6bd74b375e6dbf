//! Account business logic - Handles all account-related operations.
//!
//! Provides functions for creating, retrieving, updating, and deleting accounts,
//! plus the atomic balance-adjustment primitive used by the transaction ledger.
//! Deleting an account cascade-deletes its transactions in the same database
//! transaction, so no orphaned transaction is ever observable.

use crate::{
    entities::{Account, Transaction, account, transaction},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};
use tracing::info;

fn validate_account_fields(name: &str, currency: &str, balance: f64) -> Result<()> {
    if name.trim().is_empty() {
        return Err(Error::Validation {
            message: "Account name cannot be empty".to_string(),
        });
    }

    if currency.trim().is_empty() {
        return Err(Error::Validation {
            message: "Account currency cannot be empty".to_string(),
        });
    }

    if !balance.is_finite() {
        return Err(Error::InvalidAmount { amount: balance });
    }

    Ok(())
}

/// Creates a new account with the given initial balance.
///
/// The name and currency must be non-empty after trimming; the name is stored
/// trimmed. The balance is stored exactly as given since no transactions exist
/// yet for the new account.
pub async fn create_account(
    db: &DatabaseConnection,
    name: String,
    initial_balance: f64,
    account_type: String,
    currency: String,
    notes: Option<String>,
) -> Result<account::Model> {
    validate_account_fields(&name, &currency, initial_balance)?;

    let account = account::ActiveModel {
        name: Set(name.trim().to_string()),
        balance: Set(initial_balance),
        account_type: Set(account_type),
        currency: Set(currency),
        notes: Set(notes),
        ..Default::default()
    };

    let result = account.insert(db).await?;
    info!(
        "Created account {} ({}): initial balance {:.2} {}",
        result.id, result.name, result.balance, result.currency
    );
    Ok(result)
}

/// Finds an account by its unique ID, returning None if it does not exist.
pub async fn get_account_by_id(
    db: &DatabaseConnection,
    account_id: i64,
) -> Result<Option<account::Model>> {
    Account::find_by_id(account_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all accounts in creation order (ascending id).
pub async fn get_all_accounts(db: &DatabaseConnection) -> Result<Vec<account::Model>> {
    Account::find()
        .order_by_asc(account::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Overwrites an existing account's fields.
///
/// The same field validation as [`create_account`] applies. Writing `balance`
/// here bypasses the transaction ledger; reconciliation against posted
/// transactions is the caller's responsibility.
pub async fn update_account(
    db: &DatabaseConnection,
    account_id: i64,
    name: String,
    balance: f64,
    account_type: String,
    currency: String,
    notes: Option<String>,
) -> Result<account::Model> {
    validate_account_fields(&name, &currency, balance)?;

    let existing = Account::find_by_id(account_id)
        .one(db)
        .await?
        .ok_or(Error::AccountNotFound { id: account_id })?;

    let mut active: account::ActiveModel = existing.into();
    active.name = Set(name.trim().to_string());
    active.balance = Set(balance);
    active.account_type = Set(account_type);
    active.currency = Set(currency);
    active.notes = Set(notes);

    let result = active.update(db).await?;
    Ok(result)
}

/// Deletes an account together with every transaction posted to it.
///
/// Both deletions happen in one database transaction; either the account and
/// all of its transactions disappear, or nothing does.
pub async fn delete_account(db: &DatabaseConnection, account_id: i64) -> Result<()> {
    let txn = db.begin().await?;

    let account = Account::find_by_id(account_id)
        .one(&txn)
        .await?
        .ok_or(Error::AccountNotFound { id: account_id })?;

    let cascade = Transaction::delete_many()
        .filter(transaction::Column::AccountId.eq(account_id))
        .exec(&txn)
        .await?;

    account.delete(&txn).await?;

    txn.commit().await?;
    info!(
        "Deleted account {} and {} of its transactions",
        account_id, cascade.rows_affected
    );
    Ok(())
}

/// Updates the balance of an existing account by atomically adding a delta.
///
/// This performs a single database-level `UPDATE accounts SET balance =
/// balance + ?` rather than a read-modify-write, and is generic over
/// `ConnectionTrait` so the transaction ledger can run it inside the same
/// database transaction as the row mutation it belongs to.
///
/// # Arguments
/// * `db` - Database connection or open transaction
/// * `account_id` - ID of the account to adjust
/// * `delta` - Amount to add to the balance (negative to subtract)
///
/// # Returns
/// The updated account model
pub async fn adjust_account_balance_atomic<C>(
    db: &C,
    account_id: i64,
    delta: f64,
) -> Result<account::Model>
where
    C: ConnectionTrait,
{
    use sea_orm::sea_query::Expr;

    // First verify the account exists
    let _account = Account::find_by_id(account_id)
        .one(db)
        .await?
        .ok_or(Error::AccountNotFound { id: account_id })?;

    Account::update_many()
        .col_expr(
            account::Column::Balance,
            Expr::col(account::Column::Balance).add(delta),
        )
        .filter(account::Column::Id.eq(account_id))
        .exec(db)
        .await?;

    Account::find_by_id(account_id)
        .one(db)
        .await?
        .ok_or(Error::AccountNotFound { id: account_id })
}
