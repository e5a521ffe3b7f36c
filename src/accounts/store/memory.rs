use super::{AccountStore, StoreError};
use crate::accounts::{Account, AccountStatus};
use async_trait::async_trait;
use std::collections::{HashMap, hash_map::Entry};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, instrument};

/// Process-local store. Accounts live as long as the store does.
#[derive(Debug, Default)]
pub struct MemoryStore {
    accounts: Mutex<HashMap<String, Account>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // Mutations are single map operations, a poisoned map is still consistent.
    fn accounts(&self) -> MutexGuard<'_, HashMap<String, Account>> {
        self.accounts.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl AccountStore for MemoryStore {
    #[instrument(skip(self, account), fields(username = %account.username))]
    async fn create(&self, account: Account) -> Result<(), StoreError> {
        match self.accounts().entry(account.username.clone()) {
            Entry::Occupied(_) => Err(StoreError::DuplicateUsername(account.username)),
            Entry::Vacant(slot) => {
                slot.insert(Account {
                    status: AccountStatus::InProgress,
                    ..account
                });
                debug!("account stored");
                Ok(())
            }
        }
    }

    #[instrument(skip(self))]
    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, StoreError> {
        Ok(self.accounts().get(username).cloned())
    }

    #[instrument(skip(self))]
    async fn activate(&self, username: &str) -> Result<(), StoreError> {
        match self.accounts().get_mut(username) {
            Some(account) => {
                account.status = AccountStatus::Active;
                Ok(())
            }
            None => Err(StoreError::NotFound(username.to_string())),
        }
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
