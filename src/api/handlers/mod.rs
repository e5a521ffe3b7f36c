pub mod health;
pub use self::health::health;

pub mod register;
pub use self::register::register;

pub mod login;
pub use self::login::login;

// common responses for the handlers
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::accounts::validation::ValidationErrors;

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct ErrorDetail {
    pub detail: String,
}

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct ValidationDetail {
    pub detail: Vec<String>,
}

pub fn error_response(status: StatusCode, detail: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDetail {
            detail: detail.into(),
        }),
    )
        .into_response()
}

pub fn validation_response(errors: &ValidationErrors) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ValidationDetail {
            detail: errors.messages().to_vec(),
        }),
    )
        .into_response()
}
