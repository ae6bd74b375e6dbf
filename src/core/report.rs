//! Report generation business logic.
//!
//! This module provides the read-only aggregate queries behind the report
//! screens: total income and expense (globally or per account) and
//! per-category breakdowns. All functions are pure reads and return
//! structured data for the presentation layer to format.

use crate::{
    entities::{TransactionKind, transaction},
    errors::Result,
};
use sea_orm::{DatabaseConnection, FromQueryResult, QueryOrder, QuerySelect, prelude::*};

/// Aggregate sum of transaction amounts for one category.
#[derive(Debug, Clone, PartialEq, FromQueryResult)]
pub struct CategorySummary {
    /// The transaction category being summarized
    pub category: String,
    /// Sum of amounts in this category
    pub total: f64,
}

#[derive(Debug, FromQueryResult)]
struct SumRow {
    // SUM() over zero rows is NULL, folded to 0.0 by the callers
    total: Option<f64>,
}

async fn sum_amount_for_kind(
    db: &DatabaseConnection,
    kind: TransactionKind,
    account_id: Option<i64>,
) -> Result<f64> {
    let mut query = crate::entities::Transaction::find()
        .select_only()
        .column_as(transaction::Column::Amount.sum(), "total")
        .filter(transaction::Column::Kind.eq(kind));

    if let Some(id) = account_id {
        query = query.filter(transaction::Column::AccountId.eq(id));
    }

    let row = query.into_model::<SumRow>().one(db).await?;
    Ok(row.and_then(|r| r.total).unwrap_or(0.0))
}

async fn sum_by_category_for_kind(
    db: &DatabaseConnection,
    kind: TransactionKind,
) -> Result<Vec<CategorySummary>> {
    crate::entities::Transaction::find()
        .select_only()
        .column(transaction::Column::Category)
        .column_as(transaction::Column::Amount.sum(), "total")
        .filter(transaction::Column::Kind.eq(kind))
        .group_by(transaction::Column::Category)
        .order_by_desc(transaction::Column::Amount.sum())
        .into_model::<CategorySummary>()
        .all(db)
        .await
        .map_err(Into::into)
}

/// Total income, optionally restricted to one account. 0.0 when no rows match.
pub async fn total_income(db: &DatabaseConnection, account_id: Option<i64>) -> Result<f64> {
    sum_amount_for_kind(db, TransactionKind::Income, account_id).await
}

/// Total expenses, optionally restricted to one account. 0.0 when no rows match.
pub async fn total_expense(db: &DatabaseConnection, account_id: Option<i64>) -> Result<f64> {
    sum_amount_for_kind(db, TransactionKind::Expense, account_id).await
}

/// Expense totals grouped by category, largest first.
pub async fn expenses_by_category(db: &DatabaseConnection) -> Result<Vec<CategorySummary>> {
    sum_by_category_for_kind(db, TransactionKind::Expense).await
}

/// Income totals grouped by category, largest first.
pub async fn income_by_category(db: &DatabaseConnection) -> Result<Vec<CategorySummary>> {
    sum_by_category_for_kind(db, TransactionKind::Income).await
}
