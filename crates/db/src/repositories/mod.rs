//! Repository abstractions for data access.
//!
//! Repositories implement the core store ports, hiding the `SeaORM`
//! implementation details from the rest of the application.

pub mod account;
pub mod transaction;

pub use account::AccountRepository;
pub use transaction::TransactionRepository;

use sea_orm::{DbErr, SqlErr};
use tillbook_core::StoreError;
use tracing::error;

/// Maps a database error onto the store taxonomy.
///
/// Unique violations keep their own variant so callers can report a
/// conflict; everything else is logged here and surfaced as opaque.
pub(crate) fn map_db_err(err: DbErr) -> StoreError {
    if let Some(SqlErr::UniqueConstraintViolation(detail)) = err.sql_err() {
        return StoreError::UniqueViolation(detail);
    }
    error!(error = %err, "Database error");
    StoreError::Backend(err.to_string())
}
