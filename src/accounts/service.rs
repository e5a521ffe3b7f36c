//! Registration and login rules applied against an [`AccountStore`].

use super::{
    Account, AccountStatus, AccountSummary, Credentials, UserProfile,
    store::{AccountStore, StoreError},
};
use serde::{Deserialize, Serialize};
use std::{fmt, sync::Arc};
use thiserror::Error;
use tracing::{debug, info, instrument};
use utoipa::ToSchema;

#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("username {0} is already taken")]
    UsernameTaken(String),
    #[error("account store failure: {0}")]
    Store(#[source] StoreError),
}

#[derive(Debug, Error)]
pub enum LoginError {
    #[error("User {0} Not Found")]
    NotFound(String),
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("account store failure: {0}")]
    Store(#[source] StoreError),
}

#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct LoginResponse {
    /// Greeting addressed to the account's name, e.g. `Hello, Alice!`
    pub message: String,
    pub status: AccountStatus,
}

/// Orchestrates `register` and `login`. Holds no account state of its own.
#[derive(Clone)]
pub struct AccountService {
    store: Arc<dyn AccountStore>,
}

impl fmt::Debug for AccountService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountService").finish_non_exhaustive()
    }
}

impl AccountService {
    #[must_use]
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self { store }
    }

    #[must_use]
    pub fn store(&self) -> &dyn AccountStore {
        self.store.as_ref()
    }

    /// Create an `InProgress` account for `user` under `credentials.username`.
    ///
    /// # Errors
    /// `UsernameTaken` if the username already exists, `Store` on backend failure.
    #[instrument(skip(self, user, credentials), fields(username = %credentials.username))]
    pub async fn register(
        &self,
        user: UserProfile,
        credentials: Credentials,
    ) -> Result<AccountSummary, RegistrationError> {
        let account = Account::new(user, credentials);
        let summary = account.summary();

        match self.store.create(account).await {
            Ok(()) => {
                info!("account registered");
                Ok(summary)
            }
            Err(StoreError::DuplicateUsername(username)) => {
                debug!("username already taken");
                Err(RegistrationError::UsernameTaken(username))
            }
            Err(e) => Err(RegistrationError::Store(e)),
        }
    }

    /// Authenticate `credentials` and activate the account on success.
    ///
    /// # Errors
    /// `NotFound` for an unknown username, `InvalidCredentials` for a wrong
    /// password, `Store` on backend failure or if the account vanishes
    /// between lookup and activation.
    #[instrument(skip(self, credentials), fields(username = %credentials.username))]
    pub async fn login(&self, credentials: Credentials) -> Result<LoginResponse, LoginError> {
        let Some(account) = self
            .store
            .find_by_username(&credentials.username)
            .await
            .map_err(LoginError::Store)?
        else {
            debug!("account not found");
            return Err(LoginError::NotFound(credentials.username));
        };

        if !account.password_matches(&credentials.password) {
            debug!("password mismatch");
            return Err(LoginError::InvalidCredentials);
        }

        self.store
            .activate(&account.username)
            .await
            .map_err(LoginError::Store)?;

        if account.status == AccountStatus::InProgress {
            info!("account activated");
        }

        Ok(LoginResponse {
            message: format!("Hello, {}!", account.name),
            status: AccountStatus::Active,
        })
    }
}
