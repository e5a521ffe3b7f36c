#![allow(clippy::needless_for_each)]

use super::handlers::{
    ErrorDetail, ValidationDetail,
    health::{self, __path_health},
    login::__path_login,
    register::{self, __path_register},
};
use crate::accounts::{
    AccountStatus, AccountSummary, LoginResponse,
    validation::{LoginRequest, RegisterRequest, UserRequest},
};
use utoipa::OpenApi;

pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";
pub const SWAGGER_UI_PATH: &str = "/swagger-ui";

#[derive(OpenApi)]
#[openapi(
    paths(health, register, login),
    components(schemas(
        health::Health,
        register::RegisterResponse,
        RegisterRequest,
        UserRequest,
        LoginRequest,
        LoginResponse,
        AccountSummary,
        AccountStatus,
        ErrorDetail,
        ValidationDetail,
    )),
    tags(
        (name = "accounts", description = "Account registration and login"),
        (name = "health", description = "Service health")
    )
)]
struct ApiDoc;

#[must_use]
pub fn openapi() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn openapi_info_from_cargo() {
        let spec = openapi();
        assert_eq!(spec.info.title, env!("CARGO_PKG_NAME"));
        assert_eq!(spec.info.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn openapi_tags_and_paths() {
        let spec = openapi();
        let tags = spec.tags.clone().unwrap_or_default();
        assert!(tags.iter().any(|tag| tag.name == "accounts"));
        assert!(tags.iter().any(|tag| tag.name == "health"));
        for path in ["/register_account", "/login", "/health"] {
            assert!(spec.paths.paths.contains_key(path), "missing path {path}");
        }
    }

    #[test]
    fn openapi_documents_internal_errors() {
        let spec = openapi();
        for path in ["/register_account", "/login"] {
            let responses = spec
                .paths
                .paths
                .get(path)
                .and_then(|item| item.post.as_ref())
                .map(|operation| operation.responses.responses.clone())
                .unwrap_or_default();
            assert!(responses.contains_key("500"), "{path} lacks a 500 response");
        }
    }

    #[test]
    fn openapi_documents_account_status() {
        let spec = openapi();
        let schemas = spec.components.map(|c| c.schemas).unwrap_or_default();
        assert!(schemas.contains_key("AccountStatus"));
        assert!(schemas.contains_key("RegisterRequest"));
    }
}
