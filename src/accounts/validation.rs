//! Structural validation of incoming requests.
//!
//! Field shape (character sets, lengths, numeric bounds) is checked here,
//! before any store access. The output types are what
//! [`AccountService`](super::AccountService) accepts, so it never re-validates.

use super::{Credentials, Registration, UserProfile};
use regex::Regex;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

pub const MIN_AGE: i64 = 18;
pub const MAX_AGE: i64 = 120;
pub const MIN_PASSWORD_LENGTH: usize = 10;

#[derive(ToSchema, Serialize, Deserialize, Debug, Clone)]
pub struct UserRequest {
    pub name: String,
    pub surname: String,
    pub age: i64,
}

#[derive(ToSchema, Deserialize, Debug, Clone)]
pub struct LoginRequest {
    pub username: String,
    #[schema(value_type = String)]
    pub password: SecretString,
}

#[derive(ToSchema, Deserialize, Debug, Clone)]
pub struct RegisterRequest {
    pub user: UserRequest,
    pub login: LoginRequest,
}

/// Every rule a request broke, in field order.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("{}", .0.join("; "))]
pub struct ValidationErrors(Vec<String>);

impl ValidationErrors {
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.0
    }
}

pub fn valid_letters(value: &str) -> bool {
    Regex::new(r"^[A-Za-z]+$").is_ok_and(|re| re.is_match(value))
}

pub fn valid_username(username: &str) -> bool {
    Regex::new(r"^[A-Za-z0-9]+$").is_ok_and(|re| re.is_match(username))
}

fn password_errors(password: &str, errors: &mut Vec<String>) {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        errors.push(format!("password must be at least {MIN_PASSWORD_LENGTH} characters long"));
    }

    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push("password must contain at least one capital letter".to_string());
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("password must contain at least one number".to_string());
    }
}

fn credential_errors(login: &LoginRequest, errors: &mut Vec<String>) {
    if !valid_username(&login.username) {
        errors.push("username must contain only letters or digits".to_string());
    }

    password_errors(login.password.expose_secret(), errors);
}

/// Validate a registration payload.
///
/// # Errors
/// Returns all broken rules if any field is malformed.
pub fn registration(request: RegisterRequest) -> Result<Registration, ValidationErrors> {
    let mut errors = Vec::new();
    let RegisterRequest { user, login } = request;

    if !valid_letters(&user.name) {
        errors.push("User.name must contain letters only".to_string());
    }

    if !valid_letters(&user.surname) {
        errors.push("User.surname must contain letters only".to_string());
    }

    let age = u8::try_from(user.age)
        .ok()
        .filter(|age| (MIN_AGE..=MAX_AGE).contains(&i64::from(*age)));
    if age.is_none() {
        errors.push(format!("User.age must be between {MIN_AGE} and {MAX_AGE}"));
    }

    credential_errors(&login, &mut errors);

    match age {
        Some(age) if errors.is_empty() => Ok(Registration {
            user: UserProfile {
                name: user.name,
                surname: user.surname,
                age,
            },
            credentials: Credentials {
                username: login.username,
                password: login.password,
            },
        }),
        _ => Err(ValidationErrors(errors)),
    }
}

/// Validate a login payload with the same username and password rules as
/// registration.
///
/// # Errors
/// Returns all broken rules if any field is malformed.
pub fn credentials(request: LoginRequest) -> Result<Credentials, ValidationErrors> {
    let mut errors = Vec::new();
    credential_errors(&request, &mut errors);

    if errors.is_empty() {
        Ok(Credentials {
            username: request.username,
            password: request.password,
        })
    } else {
        Err(ValidationErrors(errors))
    }
}
