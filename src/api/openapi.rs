//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::user_handler;
use crate::domain::{User, UserFields};

/// OpenAPI documentation for the SGU user API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "SGU Server",
        version = "0.1.0",
        description = "User record management API",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        user_handler::list_users,
        user_handler::get_user,
        user_handler::create_user,
        user_handler::update_user,
        user_handler::delete_user,
    ),
    components(schemas(User, UserFields)),
    tags(
        (name = "Users", description = "User record operations")
    )
)]
pub struct ApiDoc;
