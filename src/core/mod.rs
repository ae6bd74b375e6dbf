//! Core business logic - framework-agnostic ledger operations.
//!
//! Submodules cover the account repository, the transaction ledger (every
//! compound write runs inside a single database transaction so balances and
//! rows never diverge), and read-only report queries.

/// Account repository - CRUD plus the atomic balance-adjustment primitive
pub mod account;
/// Read-only aggregate report queries
pub mod report;
/// Transaction ledger - mutations that keep account balances consistent
pub mod transaction;
