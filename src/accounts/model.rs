use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;
use utoipa::ToSchema;

/// Lifecycle state of an account. `InProgress` until the first successful
/// login, `Active` afterwards.
#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountStatus {
    #[serde(rename = "In progress")]
    InProgress,
    #[serde(rename = "Active")]
    Active,
}

impl AccountStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InProgress => "In progress",
            Self::Active => "Active",
        }
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("unknown account status: {0}")]
pub struct UnknownStatus(pub String);

impl FromStr for AccountStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "In progress" => Ok(Self::InProgress),
            "Active" => Ok(Self::Active),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// Descriptive fields of a registering user, already structurally valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub surname: String,
    pub age: u8,
}

/// Username and password pair, already structurally valid.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: SecretString,
}

impl Credentials {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: SecretString::from(password.into()),
        }
    }
}

/// Output of the validation stage for a registration request.
#[derive(Debug, Clone)]
pub struct Registration {
    pub user: UserProfile,
    pub credentials: Credentials,
}

#[derive(Debug, Clone)]
pub struct Account {
    pub username: String,
    pub password: SecretString,
    pub name: String,
    pub surname: String,
    pub age: u8,
    pub status: AccountStatus,
}

impl Account {
    /// Build a fresh account; new accounts always start `InProgress`.
    #[must_use]
    pub fn new(user: UserProfile, credentials: Credentials) -> Self {
        Self {
            username: credentials.username,
            password: credentials.password,
            name: user.name,
            surname: user.surname,
            age: user.age,
            status: AccountStatus::InProgress,
        }
    }

    /// Exact, case-sensitive comparison against the stored password.
    #[must_use]
    pub fn password_matches(&self, candidate: &SecretString) -> bool {
        self.password.expose_secret() == candidate.expose_secret()
    }

    #[must_use]
    pub fn summary(&self) -> AccountSummary {
        AccountSummary {
            username: self.username.clone(),
            name: self.name.clone(),
            surname: self.surname.clone(),
            age: self.age,
            status: self.status,
        }
    }
}

/// Public view of an account, never carries the password.
#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AccountSummary {
    pub username: String,
    pub name: String,
    pub surname: String,
    pub age: u8,
    pub status: AccountStatus,
}
