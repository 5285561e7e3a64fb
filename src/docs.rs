use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use tourist_core::Role;
use tourist_db::{DeleteResult, InsertOneResult, UpdateResult};
use tourist_models::{
    AdminStatus, CreateUserDto, GuideStatus, MessageResponse, TokenRequest, TokenResponse,
    UserExistsResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::issue_token,
        crate::modules::users::controller::create_user,
        crate::modules::users::controller::get_users,
        crate::modules::users::controller::admin_status,
        crate::modules::users::controller::guide_status,
        crate::modules::users::controller::make_admin,
        crate::modules::users::controller::make_guide,
    ),
    components(
        schemas(
            Role,
            TokenRequest,
            TokenResponse,
            CreateUserDto,
            UserExistsResponse,
            AdminStatus,
            GuideStatus,
            MessageResponse,
            InsertOneResult,
            UpdateResult,
            DeleteResult,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Token issuance"),
        (name = "Users", description = "Sign-up, role checks and promotions")
    ),
    info(
        title = "Tourist Guide API",
        version = "0.1.0",
        description = "Tour packages, stories, bookings and wishlists, with JWT-based authentication.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

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
                        .build(),
                ),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_auth_and_user_routes() {
        let doc = ApiDoc::openapi();
        for path in ["/jwt", "/users", "/users/admin/{id}", "/users/guide/{email}"] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}
