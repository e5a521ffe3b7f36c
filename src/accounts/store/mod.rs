//! Storage of account records keyed by username.

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use super::Account;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("username {0} already exists")]
    DuplicateUsername(String),
    #[error("account {0} not found")]
    NotFound(String),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Authoritative keeper of accounts.
///
/// Implementations must keep `create` atomic with its uniqueness check and
/// `activate` atomic with its read-modify-write of the status.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Insert a new account with status `InProgress`, whatever status the
    /// caller set. A taken username leaves the store untouched.
    async fn create(&self, account: Account) -> Result<(), StoreError>;

    /// Byte-exact lookup, no case folding or trimming.
    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, StoreError>;

    /// Mark the account `Active`. Succeeds without change if it already is.
    async fn activate(&self, username: &str) -> Result<(), StoreError>;

    /// Check that the backend is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}
