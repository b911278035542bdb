//! OpenAPI documentation configuration.

use utoipa::OpenApi;

use crate::api::handlers::{health_handler, user_handler};
use crate::domain::CreateUser;
use crate::errors::ErrorResponse;
use crate::types::MessageResponse;

/// OpenAPI documentation for the user API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User API",
        version = "0.1.0",
        description = "Create and list users stored in MongoDB",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server")
    ),
    paths(
        user_handler::add_user,
        user_handler::get_users,
        health_handler::health_check,
    ),
    components(
        schemas(
            CreateUser,
            MessageResponse,
            ErrorResponse,
            health_handler::HealthResponse,
            health_handler::ServiceStatus,
            health_handler::ServiceHealth,
        )
    ),
    tags(
        (name = "Users", description = "User creation and listing"),
        (name = "Health", description = "Service health")
    )
)]
pub struct ApiDoc;
