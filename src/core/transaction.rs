//! Transaction business logic - Handles all transaction-related operations.
//!
//! This module provides functions for creating, retrieving, updating, and deleting
//! transactions. All transaction mutations automatically adjust the referenced
//! account's balance inside a single database transaction, so a reader never
//! observes a transaction row without its balance effect or vice versa. Lists are
//! ordered by effective date descending; equal dates surface the higher id first,
//! so same-day entries come back newest-inserted first.

use crate::{
    core::account::adjust_account_balance_atomic,
    entities::{Account, TransactionKind, transaction},
    errors::{Error, Result},
};
use chrono::NaiveDateTime;
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};
use tracing::info;

/// Field values for creating a transaction or overwriting an existing row.
#[derive(Debug, Clone)]
pub struct TransactionInput {
    /// Monetary value; must be strictly positive and finite
    pub amount: f64,
    /// Direction of the balance effect
    pub kind: TransactionKind,
    /// Free-text category used for report grouping
    pub category: String,
    /// Human-readable description
    pub description: String,
    /// Effective date of the record
    pub date: NaiveDateTime,
    /// Account the transaction is posted to
    pub account_id: i64,
}

/// A transaction row joined with the owning account's display name.
///
/// The account name is what list and detail screens render next to each
/// entry; it defaults to empty under LEFT JOIN semantics if the relation
/// cannot be resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionWithAccount {
    /// The transaction row itself
    pub transaction: transaction::Model,
    /// Display name of the owning account
    pub account_name: String,
}

fn validate_amount(amount: f64) -> Result<()> {
    if amount <= 0.0 || !amount.is_finite() {
        return Err(Error::InvalidAmount { amount });
    }
    Ok(())
}

/// Creates a new transaction and applies its effect to the account balance.
///
/// Validates that the amount is strictly positive and that the target account
/// exists, then inserts the row and adjusts the balance (`+amount` for income,
/// `-amount` for expense) as one atomic unit.
pub async fn create_transaction(
    db: &DatabaseConnection,
    input: TransactionInput,
) -> Result<transaction::Model> {
    validate_amount(input.amount)?;

    // Use a transaction to ensure atomicity
    let txn = db.begin().await?;

    let _account = Account::find_by_id(input.account_id)
        .one(&txn)
        .await?
        .ok_or(Error::AccountNotFound {
            id: input.account_id,
        })?;

    let transaction_model = transaction::ActiveModel {
        amount: Set(input.amount),
        kind: Set(input.kind),
        category: Set(input.category),
        description: Set(input.description),
        date: Set(input.date),
        account_id: Set(input.account_id),
        ..Default::default()
    };

    let result = transaction_model.insert(&txn).await?;

    let delta = input.kind.signed_amount(input.amount);
    adjust_account_balance_atomic(&txn, input.account_id, delta).await?;

    txn.commit().await?;

    info!(
        "Created transaction {} on account {}: {:?} {:.2}",
        result.id, result.account_id, result.kind, result.amount
    );
    Ok(result)
}

/// Retrieves a specific transaction by its unique ID, joined with the owning
/// account's display name. Returns None if the transaction does not exist.
pub async fn get_transaction_by_id(
    db: &DatabaseConnection,
    transaction_id: i64,
) -> Result<Option<TransactionWithAccount>> {
    let row = crate::entities::Transaction::find_by_id(transaction_id)
        .find_also_related(Account)
        .one(db)
        .await?;

    Ok(row.map(|(transaction, account)| TransactionWithAccount {
        transaction,
        account_name: account.map(|a| a.name).unwrap_or_default(),
    }))
}

/// Retrieves all transactions for a specific account, ordered by effective
/// date descending (ties broken by id descending).
pub async fn get_transactions_for_account(
    db: &DatabaseConnection,
    account_id: i64,
) -> Result<Vec<TransactionWithAccount>> {
    let rows = crate::entities::Transaction::find()
        .filter(transaction::Column::AccountId.eq(account_id))
        .find_also_related(Account)
        .order_by_desc(transaction::Column::Date)
        .order_by_desc(transaction::Column::Id)
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(transaction, account)| TransactionWithAccount {
            transaction,
            account_name: account.map(|a| a.name).unwrap_or_default(),
        })
        .collect())
}

/// Retrieves every transaction across all accounts, with the same ordering
/// rule as [`get_transactions_for_account`].
pub async fn get_all_transactions(db: &DatabaseConnection) -> Result<Vec<TransactionWithAccount>> {
    let rows = crate::entities::Transaction::find()
        .find_also_related(Account)
        .order_by_desc(transaction::Column::Date)
        .order_by_desc(transaction::Column::Id)
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(transaction, account)| TransactionWithAccount {
            transaction,
            account_name: account.map(|a| a.name).unwrap_or_default(),
        })
        .collect())
}

/// Overwrites an existing transaction and rebalances the affected account(s).
///
/// The old row's effect is reversed (`-amount` if it was income, `+amount` if
/// expense) and the new values' effect applied. When the account is unchanged
/// the two deltas collapse into one adjustment; when the transaction moves
/// between accounts, the old account receives the reversal and the new account
/// the forward delta. Row overwrite and every balance adjustment commit as one
/// atomic unit.
pub async fn update_transaction(
    db: &DatabaseConnection,
    transaction_id: i64,
    input: TransactionInput,
) -> Result<transaction::Model> {
    validate_amount(input.amount)?;

    let txn = db.begin().await?;

    let existing = crate::entities::Transaction::find_by_id(transaction_id)
        .one(&txn)
        .await?
        .ok_or(Error::TransactionNotFound { id: transaction_id })?;

    let reversal = -existing.kind.signed_amount(existing.amount);
    let forward = input.kind.signed_amount(input.amount);

    if existing.account_id == input.account_id {
        adjust_account_balance_atomic(&txn, existing.account_id, reversal + forward).await?;
    } else {
        adjust_account_balance_atomic(&txn, existing.account_id, reversal).await?;
        // Also verifies the target account exists before anything commits
        adjust_account_balance_atomic(&txn, input.account_id, forward).await?;
    }

    let mut active: transaction::ActiveModel = existing.into();
    active.amount = Set(input.amount);
    active.kind = Set(input.kind);
    active.category = Set(input.category);
    active.description = Set(input.description);
    active.date = Set(input.date);
    active.account_id = Set(input.account_id);

    let result = active.update(&txn).await?;

    txn.commit().await?;

    info!(
        "Updated transaction {}: {:?} {:.2} on account {}",
        result.id, result.kind, result.amount, result.account_id
    );
    Ok(result)
}

/// Deletes a transaction and reverses its effect on the account balance.
pub async fn delete_transaction(db: &DatabaseConnection, transaction_id: i64) -> Result<()> {
    // Use a transaction to ensure atomicity
    let txn = db.begin().await?;

    let existing = crate::entities::Transaction::find_by_id(transaction_id)
        .one(&txn)
        .await?
        .ok_or(Error::TransactionNotFound { id: transaction_id })?;

    let account_id = existing.account_id;
    let reversal = -existing.kind.signed_amount(existing.amount);

    existing.delete(&txn).await?;

    adjust_account_balance_atomic(&txn, account_id, reversal).await?;

    txn.commit().await?;
    info!("Deleted transaction {} from account {}", transaction_id, account_id);
    Ok(())
}
