use super::{ErrorDetail, ValidationDetail, error_response, validation_response};
use crate::accounts::{
    AccountService, AccountSummary, RegistrationError,
    validation::{self, RegisterRequest},
};
use axum::{
    Json,
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, instrument};
use utoipa::ToSchema;

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct RegisterResponse {
    message: String,
    account: AccountSummary,
}

#[utoipa::path(
    post,
    path= "/register_account",
    request_body = RegisterRequest,
    responses (
        (status = 201, description = "Registration successful", body = RegisterResponse, content_type = "application/json"),
        (status = 400, description = "Missing or malformed payload", body = ErrorDetail),
        (status = 409, description = "Username already exists", body = ErrorDetail),
        (status = 422, description = "Payload failed validation", body = ValidationDetail),
        (status = 500, description = "Error registering account", body = ErrorDetail),
    ),
    tag= "accounts"
)]
// axum handler for account registration
#[instrument(skip(service, payload))]
pub async fn register(
    service: Extension<AccountService>,
    payload: Option<Json<RegisterRequest>>,
) -> Response {
    let request: RegisterRequest = match payload {
        Some(Json(payload)) => payload,
        None => return error_response(StatusCode::BAD_REQUEST, "Missing payload"),
    };

    debug!("request: {:?}", request);

    let registration = match validation::registration(request) {
        Ok(registration) => registration,
        Err(errors) => {
            debug!("Invalid registration: {}", errors);
            return validation_response(&errors);
        }
    };

    match service
        .register(registration.user, registration.credentials)
        .await
    {
        Ok(account) => (
            StatusCode::CREATED,
            Json(RegisterResponse {
                message: "Thank you for registering!".to_string(),
                account,
            }),
        )
            .into_response(),

        Err(RegistrationError::UsernameTaken(username)) => error_response(
            StatusCode::CONFLICT,
            format!("Could not create account: username {username} already exists"),
        ),

        Err(e) => {
            error!("Error registering account: {}", e);
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error registering account",
            )
        }
    }
}
