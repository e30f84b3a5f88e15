//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{examples_handler, user_handler};
use crate::domain::User;

/// OpenAPI documentation for the User API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User API",
        version = "0.1.0",
        description = "Simple user CRUD without a database, plus HTTP error code examples",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server")
    ),
    paths(
        // User endpoints
        user_handler::list_users,
        user_handler::get_user,
        user_handler::create_user,
        // Error examples
        examples_handler::list_examples,
        examples_handler::bad_request,
        examples_handler::unauthorized,
        examples_handler::forbidden,
        examples_handler::not_found,
        examples_handler::conflict,
        examples_handler::unprocessable_entity,
        examples_handler::too_many_requests,
        examples_handler::internal_server_error,
        examples_handler::service_unavailable,
    ),
    components(
        schemas(
            User,
            user_handler::CreateUserRequest,
            examples_handler::ErrorExample,
            examples_handler::ErrorExamples,
        )
    ),
    tags(
        (name = "Users", description = "User management operations"),
        (name = "Error Examples", description = "Endpoints that demonstrate HTTP error codes")
    )
)]
pub struct ApiDoc;
