//! Transaction entity - Represents a single income or expense record.
//!
//! Each transaction stores a strictly positive `amount`; the direction of the
//! balance effect is carried by `kind`, persisted in the `type` column as
//! `"INCOME"` or `"EXPENSE"`. The `date` field is the record's effective date,
//! user-settable and independent of creation time.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Direction of a transaction's effect on its account balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum TransactionKind {
    /// Credits the account balance
    #[sea_orm(string_value = "INCOME")]
    Income,
    /// Debits the account balance
    #[sea_orm(string_value = "EXPENSE")]
    Expense,
}

impl TransactionKind {
    /// Returns the balance delta this kind applies for a given positive amount.
    #[must_use]
    pub const fn signed_amount(self, amount: f64) -> f64 {
        match self {
            Self::Income => amount,
            Self::Expense => -amount,
        }
    }
}

/// Transaction database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    /// Unique identifier for the transaction
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Monetary value; always positive, direction carried by `kind`
    pub amount: f64,
    /// Whether this transaction is income or an expense
    #[sea_orm(column_name = "type")]
    pub kind: TransactionKind,
    /// Free-text category used for report grouping (e.g., "Food", "Salary")
    pub category: String,
    /// Human-readable description of the transaction
    pub description: String,
    /// Effective date of the record, user-settable
    pub date: DateTime,
    /// ID of the account this transaction is posted to
    pub account_id: i64,
}

/// Defines relationships between Transaction and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each transaction belongs to one account
    #[sea_orm(
        belongs_to = "super::account::Entity",
        from = "Column::AccountId",
        to = "super::account::Column::Id",
        on_delete = "Cascade"
    )]
    Account,
}

impl Related<super::account::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Account.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
