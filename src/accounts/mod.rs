//! Account records, their storage and the register/login rules.

mod model;
pub mod service;
pub mod store;
pub mod validation;

pub use model::{
    Account, AccountStatus, AccountSummary, Credentials, Registration, UnknownStatus, UserProfile,
};
pub use service::{AccountService, LoginError, LoginResponse, RegistrationError};
pub use store::{AccountStore, MemoryStore, SqliteStore, StoreError};
