//! HTTP error code examples.
//!
//! Each endpoint succeeds by default and returns its status code when the
//! documented trigger is present in the query string or headers.

use axum::{
    http::{header::AUTHORIZATION, HeaderMap},
    response::Json,
    routing::get,
    Router,
};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use utoipa::ToSchema;

use crate::api::extractors::QueryParams;
use crate::api::AppState;
use crate::config::{
    EXAMPLE_ADMIN_ROLE, EXAMPLE_EXISTING_RESOURCE_ID, EXAMPLE_INVALID_VALUE,
    EXAMPLE_MAINTENANCE_RETRY_AFTER_SECONDS, EXAMPLE_MINIMUM_AGE, EXAMPLE_RATE_LIMIT_REQUESTS,
    EXAMPLE_RATE_LIMIT_RETRY_AFTER_SECONDS, EXAMPLE_TAKEN_EMAILS, EXAMPLE_VALID_AUTHORIZATION,
};
use crate::errors::{AppError, AppResult};

/// Query parameters understood by the example endpoints
#[derive(Debug, Default, Deserialize)]
pub struct ExampleParams {
    pub invalid: Option<String>,
    pub role: Option<String>,
    pub id: Option<String>,
    pub email: Option<String>,
    pub age: Option<String>,
    pub requests: Option<String>,
    pub trigger: Option<String>,
    pub maintenance: Option<String>,
}

/// One entry of the example catalogue
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorExample {
    pub code: String,
    pub name: String,
    pub endpoint: String,
    pub description: String,
}

/// Example catalogue response
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorExamples {
    pub message: String,
    pub available_examples: Vec<ErrorExample>,
}

/// (code, name, endpoint, description)
const ERROR_EXAMPLES: &[(&str, &str, &str, &str)] = &[
    ("400", "Bad Request", "/examples/400?invalid=invalid", "Client sent invalid data"),
    ("401", "Unauthorized", "/examples/401", "Authentication required"),
    ("403", "Forbidden", "/examples/403?role=user", "Insufficient permissions"),
    ("404", "Not Found", "/examples/404?id=999", "Resource not found"),
    ("409", "Conflict", "/examples/409?email=john@example.com", "Resource conflict"),
    ("422", "Unprocessable Entity", "/examples/422?age=15", "Validation failed"),
    ("429", "Too Many Requests", "/examples/429?requests=15", "Rate limit exceeded"),
    ("500", "Internal Server Error", "/examples/500?trigger=error", "Unexpected server error"),
    ("503", "Service Unavailable", "/examples/503?maintenance=true", "Service temporarily unavailable"),
];

/// Read the integer at the start of `value`, ignoring leading whitespace and
/// anything after the digits (`"15abc"` reads as 15).
fn leading_integer(value: &str) -> Option<i64> {
    let value = value.trim_start();
    let unsigned = value.trim_start_matches(['+', '-']);
    let sign_len = value.len() - unsigned.len();
    if sign_len > 1 {
        return None;
    }

    let digits_len = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if digits_len == 0 {
        return None;
    }

    value[..sign_len + digits_len].parse().ok()
}

/// Create error example routes
pub fn examples_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_examples))
        .route("/400", get(bad_request))
        .route("/401", get(unauthorized))
        .route("/403", get(forbidden))
        .route("/404", get(not_found))
        .route("/409", get(conflict))
        .route("/422", get(unprocessable_entity))
        .route("/429", get(too_many_requests))
        .route("/500", get(internal_server_error))
        .route("/503", get(service_unavailable))
}

/// List all error code examples
#[utoipa::path(
    get,
    path = "/examples",
    tag = "Error Examples",
    responses(
        (status = 200, description = "Available error examples", body = ErrorExamples)
    )
)]
pub async fn list_examples() -> Json<ErrorExamples> {
    let available_examples = ERROR_EXAMPLES
        .iter()
        .map(|(code, name, endpoint, description)| ErrorExample {
            code: code.to_string(),
            name: name.to_string(),
            endpoint: endpoint.to_string(),
            description: description.to_string(),
        })
        .collect();

    Json(ErrorExamples {
        message: "Test these endpoints to see different error responses".to_string(),
        available_examples,
    })
}

/// 400 Bad Request when `invalid=invalid`
#[utoipa::path(
    get,
    path = "/examples/400",
    tag = "Error Examples",
    params(("invalid" = Option<String>, Query, description = "Send 'invalid' to trigger error")),
    responses(
        (status = 200, description = "Request is valid"),
        (status = 400, description = "Bad Request")
    )
)]
pub async fn bad_request(
    QueryParams(params): QueryParams<ExampleParams>,
) -> AppResult<Json<Value>> {
    if params.invalid.as_deref() == Some(EXAMPLE_INVALID_VALUE) {
        return Err(AppError::bad_request(
            "Bad Request: The parameter 'invalid' cannot have value 'invalid'",
        ));
    }

    Ok(Json(json!({
        "message": "Request is valid",
        "status": "success",
    })))
}

/// 401 Unauthorized without a valid bearer token
#[utoipa::path(
    get,
    path = "/examples/401",
    tag = "Error Examples",
    params(("Authorization" = Option<String>, Header, description = "Bearer token")),
    responses(
        (status = 200, description = "Authentication successful"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn unauthorized(headers: HeaderMap) -> AppResult<Json<Value>> {
    let token = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    if token.is_empty() {
        return Err(AppError::Unauthorized(
            "Unauthorized: Missing authentication token".to_string(),
        ));
    }

    if token != EXAMPLE_VALID_AUTHORIZATION {
        return Err(AppError::Unauthorized(
            "Unauthorized: Invalid authentication token".to_string(),
        ));
    }

    Ok(Json(json!({
        "message": "Authentication successful",
        "status": "authenticated",
    })))
}

/// 403 Forbidden unless `role=admin`
#[utoipa::path(
    get,
    path = "/examples/403",
    tag = "Error Examples",
    params(("role" = Option<String>, Query, description = "User role (admin or user)")),
    responses(
        (status = 200, description = "Access granted"),
        (status = 403, description = "Forbidden")
    )
)]
pub async fn forbidden(
    QueryParams(params): QueryParams<ExampleParams>,
) -> AppResult<Json<Value>> {
    if params.role.as_deref() != Some(EXAMPLE_ADMIN_ROLE) {
        return Err(AppError::Forbidden(
            "Forbidden: You don't have permission to access this resource. Admin role required."
                .to_string(),
        ));
    }

    Ok(Json(json!({
        "message": "Access granted",
        "status": "authorized",
    })))
}

/// 404 Not Found unless `id=123`
#[utoipa::path(
    get,
    path = "/examples/404",
    tag = "Error Examples",
    params(("id" = Option<String>, Query, description = "Resource ID")),
    responses(
        (status = 200, description = "Resource found"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn not_found(
    QueryParams(params): QueryParams<ExampleParams>,
) -> AppResult<Json<Value>> {
    match params.id.as_deref() {
        Some(id) if id == EXAMPLE_EXISTING_RESOURCE_ID => Ok(Json(json!({
            "message": "Resource found",
            "id": id,
        }))),
        _ => Err(AppError::NotFound(
            "Not Found: Resource with the specified ID does not exist".to_string(),
        )),
    }
}

/// 409 Conflict for an already registered email
#[utoipa::path(
    get,
    path = "/examples/409",
    tag = "Error Examples",
    params(("email" = Option<String>, Query, description = "Email to check")),
    responses(
        (status = 200, description = "Email is available"),
        (status = 409, description = "Conflict")
    )
)]
pub async fn conflict(
    QueryParams(params): QueryParams<ExampleParams>,
) -> AppResult<Json<Value>> {
    let email = params.email.unwrap_or_default();

    if EXAMPLE_TAKEN_EMAILS.contains(&email.as_str()) {
        return Err(AppError::Conflict(
            "Conflict: Email already exists in the system".to_string(),
        ));
    }

    Ok(Json(json!({
        "message": "Email is available",
        "email": email,
    })))
}

/// 422 Unprocessable Entity for a missing or underage `age`
#[utoipa::path(
    get,
    path = "/examples/422",
    tag = "Error Examples",
    params(("age" = Option<i64>, Query, description = "User age")),
    responses(
        (status = 200, description = "Age is valid"),
        (status = 422, description = "Unprocessable Entity")
    )
)]
pub async fn unprocessable_entity(
    QueryParams(params): QueryParams<ExampleParams>,
) -> AppResult<Json<Value>> {
    let age = match params.age.as_deref() {
        None | Some("") => {
            return Err(AppError::Unprocessable(
                "Unprocessable Entity: Age is required".to_string(),
            ))
        }
        Some(age) => age,
    };

    match leading_integer(age) {
        Some(years) if years >= EXAMPLE_MINIMUM_AGE => Ok(Json(json!({
            "message": "Age is valid",
            "age": age,
        }))),
        _ => Err(AppError::Unprocessable(format!(
            "Unprocessable Entity: Age must be {} or older",
            EXAMPLE_MINIMUM_AGE
        ))),
    }
}

/// 429 Too Many Requests when `requests` exceeds the limit
#[utoipa::path(
    get,
    path = "/examples/429",
    tag = "Error Examples",
    params(("requests" = Option<i64>, Query, description = "Number of requests made")),
    responses(
        (status = 200, description = "Request processed"),
        (status = 429, description = "Too Many Requests", headers(("Retry-After" = u64)))
    )
)]
pub async fn too_many_requests(
    QueryParams(params): QueryParams<ExampleParams>,
) -> AppResult<Json<Value>> {
    let requests = params.requests.unwrap_or_default();
    let count = leading_integer(&requests).unwrap_or(0);

    if count > EXAMPLE_RATE_LIMIT_REQUESTS {
        tracing::warn!(count, "Example rate limit exceeded");
        return Err(AppError::TooManyRequests {
            message: "Too Many Requests: Rate limit exceeded. Please try again later."
                .to_string(),
            retry_after: EXAMPLE_RATE_LIMIT_RETRY_AFTER_SECONDS,
        });
    }

    Ok(Json(json!({
        "message": "Request processed",
        "requests": requests,
    })))
}

/// 500 Internal Server Error when `trigger=error`
#[utoipa::path(
    get,
    path = "/examples/500",
    tag = "Error Examples",
    params(("trigger" = Option<String>, Query, description = "Set to 'error' to trigger 500")),
    responses(
        (status = 200, description = "Server is working properly"),
        (status = 500, description = "Internal Server Error")
    )
)]
pub async fn internal_server_error(
    QueryParams(params): QueryParams<ExampleParams>,
) -> AppResult<Json<Value>> {
    if params.trigger.as_deref() == Some("error") {
        return Err(AppError::Unexpected(
            "Internal Server Error: An unexpected error occurred. Please try again later."
                .to_string(),
        ));
    }

    Ok(Json(json!({
        "message": "Server is working properly",
        "status": "healthy",
    })))
}

/// 503 Service Unavailable when `maintenance=true`
#[utoipa::path(
    get,
    path = "/examples/503",
    tag = "Error Examples",
    params(("maintenance" = Option<String>, Query, description = "Set to 'true' for maintenance mode")),
    responses(
        (status = 200, description = "Service is available"),
        (status = 503, description = "Service Unavailable", headers(("Retry-After" = u64)))
    )
)]
pub async fn service_unavailable(
    QueryParams(params): QueryParams<ExampleParams>,
) -> AppResult<Json<Value>> {
    if params.maintenance.as_deref() == Some("true") {
        return Err(AppError::ServiceUnavailable {
            message: "Service Unavailable: System is under maintenance. Please try again later."
                .to_string(),
            retry_after: EXAMPLE_MAINTENANCE_RETRY_AFTER_SECONDS,
        });
    }

    Ok(Json(json!({
        "message": "Service is available",
        "uptime": Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> ExampleParams {
        ExampleParams::default()
    }

    #[tokio::test]
    async fn test_catalogue_lists_nine_examples() {
        let Json(examples) = list_examples().await;
        assert_eq!(examples.available_examples.len(), 9);
        assert!(examples
            .available_examples
            .iter()
            .all(|e| e.endpoint.starts_with("/examples/")));
    }

    #[tokio::test]
    async fn test_unprocessable_entity_age_rules() {
        let missing = unprocessable_entity(QueryParams(params())).await;
        assert!(matches!(missing, Err(AppError::Unprocessable(msg)) if msg.contains("required")));

        let underage = unprocessable_entity(QueryParams(ExampleParams {
            age: Some("15".to_string()),
            ..params()
        }))
        .await;
        assert!(matches!(underage, Err(AppError::Unprocessable(_))));

        let garbage = unprocessable_entity(QueryParams(ExampleParams {
            age: Some("old".to_string()),
            ..params()
        }))
        .await;
        assert!(matches!(garbage, Err(AppError::Unprocessable(_))));

        let trailing = unprocessable_entity(QueryParams(ExampleParams {
            age: Some("21years".to_string()),
            ..params()
        }))
        .await
        .unwrap();
        assert_eq!(trailing.0["age"], "21years");

        let adult = unprocessable_entity(QueryParams(ExampleParams {
            age: Some("18".to_string()),
            ..params()
        }))
        .await
        .unwrap();
        assert_eq!(adult.0["age"], "18");
    }

    #[tokio::test]
    async fn test_too_many_requests_threshold() {
        let at_limit = too_many_requests(QueryParams(ExampleParams {
            requests: Some("10".to_string()),
            ..params()
        }))
        .await;
        assert!(at_limit.is_ok());

        let over_limit = too_many_requests(QueryParams(ExampleParams {
            requests: Some("11".to_string()),
            ..params()
        }))
        .await;
        assert!(matches!(
            over_limit,
            Err(AppError::TooManyRequests { retry_after: 60, .. })
        ));

        let unparseable = too_many_requests(QueryParams(ExampleParams {
            requests: Some("lots".to_string()),
            ..params()
        }))
        .await;
        assert!(unparseable.is_ok());

        let trailing = too_many_requests(QueryParams(ExampleParams {
            requests: Some("15abc".to_string()),
            ..params()
        }))
        .await;
        assert!(matches!(trailing, Err(AppError::TooManyRequests { .. })));
    }

    #[test]
    fn test_leading_integer() {
        assert_eq!(leading_integer("42"), Some(42));
        assert_eq!(leading_integer("  15abc"), Some(15));
        assert_eq!(leading_integer("-3"), Some(-3));
        assert_eq!(leading_integer("+7 "), Some(7));
        assert_eq!(leading_integer("abc"), None);
        assert_eq!(leading_integer("--1"), None);
        assert_eq!(leading_integer(""), None);
    }

    #[tokio::test]
    async fn test_internal_server_error_message_is_shown() {
        let triggered = internal_server_error(QueryParams(ExampleParams {
            trigger: Some("error".to_string()),
            ..params()
        }))
        .await;
        match triggered {
            Err(AppError::Unexpected(msg)) => assert!(msg.starts_with("Internal Server Error")),
            other => panic!("expected a visible 500, got {:?}", other.map(|json| json.0)),
        }
    }

    #[tokio::test]
    async fn test_unauthorized_distinguishes_missing_and_invalid() {
        let missing = unauthorized(HeaderMap::new()).await;
        assert!(matches!(missing, Err(AppError::Unauthorized(msg)) if msg.contains("Missing")));

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, "Bearer nope".parse().unwrap());
        let invalid = unauthorized(headers).await;
        assert!(matches!(invalid, Err(AppError::Unauthorized(msg)) if msg.contains("Invalid")));

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, "Bearer valid-token".parse().unwrap());
        assert!(unauthorized(headers).await.is_ok());
    }
}
