//! # Registrar
//!
//! `registrar` is a small account registration and login service.
//!
//! ## Accounts
//!
//! An account is created by `POST /register_account` with status
//! `In progress` and becomes `Active` on its first successful
//! `POST /login`. Usernames are unique and matched byte-exact.
//!
//! Requests pass a structural validation stage (see [`accounts::validation`])
//! before [`accounts::AccountService`] applies the stateful rules against an
//! [`accounts::AccountStore`].
//!
//! ## Storage
//!
//! Without a DSN the service keeps accounts in process memory. With a SQLite
//! DSN (`--dsn sqlite://accounts.db?mode=rwc`) they are persisted through `sqlx`.

pub mod accounts;
pub mod api;
pub mod cli;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};
