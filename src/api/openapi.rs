use utoipa::{
    Modify, OpenApi,
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
};

use crate::{
    api::models::{CreateUserRequest, DatabaseResponse, DatabasesResponse, ErrorResponse, SignInRequest, UserResponse},
    core::models::user::{Identity, User},
};

struct AdminWordScheme;

impl Modify for AdminWordScheme {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "admin_word",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("X-Admin-Word"))),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::sign_in,
        super::handlers::create_user,
        super::handlers::list_databases,
        super::handlers::read_database
    ),
    components(schemas(
        SignInRequest,
        CreateUserRequest,
        UserResponse,
        DatabasesResponse,
        DatabaseResponse,
        ErrorResponse,
        Identity,
        User
    )),
    modifiers(&AdminWordScheme),
    info(
        title = "Flatgate API",
        description = "Sign-in against a flat-file user list and admin browsing of JSON databases",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
