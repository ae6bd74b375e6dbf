//! Account entity - Represents a financial account owned by the user.
//!
//! Each account has a name, a running balance, a free-text type classification
//! and currency code, and optional notes. The balance is a derived quantity:
//! it always equals the initial balance plus the signed sum of the account's
//! posted transactions, and is maintained by the ledger on every mutation.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Account database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    /// Unique identifier for the account
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Human-readable name of the account (e.g., "Checking", "Cash Wallet")
    pub name: String,
    /// Current balance, denominated in `currency`
    pub balance: f64,
    /// Free-text classification (e.g., "Savings", "Checking", "Cash")
    pub account_type: String,
    /// ISO-4217-like currency code (e.g., "USD"); not validated beyond non-empty
    pub currency: String,
    /// Free-text notes, None when the user left them blank
    pub notes: Option<String>,
}

/// Defines relationships between Account and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One account has many transactions
    #[sea_orm(has_many = "super::transaction::Entity")]
    Transactions,
}

impl Related<super::transaction::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Transactions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
