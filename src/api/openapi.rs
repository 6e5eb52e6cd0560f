//! OpenAPI documentation configuration.
//!
//! Paths are documented under the default `/api/v1` base path.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{account_handler, auth_handler, health_handler};
use crate::domain::UserResponse;
use crate::services::TokenPair;

/// OpenAPI documentation for the credential service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Credential Service",
        version = "0.1.0",
        description = "User registration, password login and bearer token issuance",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:10000", description = "Local development server")
    ),
    paths(
        health_handler::health,
        auth_handler::register,
        auth_handler::login,
        auth_handler::refresh,
        auth_handler::me,
        account_handler::get_profile,
        account_handler::update_profile,
    ),
    components(
        schemas(
            UserResponse,
            TokenPair,
            health_handler::HealthResponse,
            auth_handler::RegisterRequest,
            auth_handler::LoginRequest,
            auth_handler::RefreshRequest,
            account_handler::UpdateProfileRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Registration, login and token rotation"),
        (name = "Accounts", description = "Profile of the authenticated user"),
        (name = "Health", description = "Service health")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token obtained from /auth/login"))
                        .build(),
                ),
            );
        }
    }
}
