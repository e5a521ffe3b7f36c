use super::{ErrorDetail, ValidationDetail, error_response, validation_response};
use crate::accounts::{
    AccountService, LoginError, LoginResponse,
    validation::{self, LoginRequest},
};
use axum::{
    Json,
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{debug, error, instrument};

#[utoipa::path(
    post,
    path= "/login",
    request_body = LoginRequest,
    responses (
        (status = 200, description = "Login successful", body = LoginResponse, content_type = "application/json"),
        (status = 400, description = "Missing or malformed payload", body = ErrorDetail),
        (status = 401, description = "Unauthorized", body = ErrorDetail),
        (status = 404, description = "User not found", body = ErrorDetail),
        (status = 422, description = "Payload failed validation", body = ValidationDetail),
        (status = 500, description = "Error during login", body = ErrorDetail),
    ),
    tag= "accounts"
)]
// axum handler for login
#[instrument(skip(service, payload))]
pub async fn login(
    service: Extension<AccountService>,
    payload: Option<Json<LoginRequest>>,
) -> Response {
    let request: LoginRequest = match payload {
        Some(Json(payload)) => payload,
        None => return error_response(StatusCode::BAD_REQUEST, "Missing payload"),
    };

    debug!("request: {:?}", request);

    let credentials = match validation::credentials(request) {
        Ok(credentials) => credentials,
        Err(errors) => {
            debug!("Invalid credentials payload: {}", errors);
            return validation_response(&errors);
        }
    };

    match service.login(credentials).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),

        Err(e @ LoginError::NotFound(_)) => {
            debug!("{}", e);
            error_response(StatusCode::NOT_FOUND, e.to_string())
        }

        Err(LoginError::InvalidCredentials) => {
            debug!("Unauthorized");
            error_response(StatusCode::UNAUTHORIZED, "Unauthorized")
        }

        Err(e) => {
            error!("Error during login: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Error during login")
        }
    }
}
