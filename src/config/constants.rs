//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 5000;

// =============================================================================
// User Store
// =============================================================================

/// Keeps users in process memory
pub const STORE_MEMORY: &str = "memory";

/// Keeps users in the database at `DATABASE_URL`
pub const STORE_DATABASE: &str = "database";

/// Default database connection URL (for development)
pub const DEFAULT_DATABASE_URL: &str = "sqlite://users.db?mode=rwc";

// =============================================================================
// Error Examples
// =============================================================================

/// Query value rejected by the 400 example
pub const EXAMPLE_INVALID_VALUE: &str = "invalid";

/// Authorization header accepted by the 401 example
pub const EXAMPLE_VALID_AUTHORIZATION: &str = "Bearer valid-token";

/// Role accepted by the 403 example
pub const EXAMPLE_ADMIN_ROLE: &str = "admin";

/// The only resource id the 404 example can find
pub const EXAMPLE_EXISTING_RESOURCE_ID: &str = "123";

/// Emails the 409 example treats as already registered
pub const EXAMPLE_TAKEN_EMAILS: &[&str] = &["john@example.com", "jane@example.com"];

/// Minimum age accepted by the 422 example
pub const EXAMPLE_MINIMUM_AGE: i64 = 18;

/// Request count above which the 429 example refuses
pub const EXAMPLE_RATE_LIMIT_REQUESTS: i64 = 10;

/// Retry-After for the 429 example, in seconds
pub const EXAMPLE_RATE_LIMIT_RETRY_AFTER_SECONDS: u64 = 60;

/// Retry-After for the 503 example, in seconds (5 minutes)
pub const EXAMPLE_MAINTENANCE_RETRY_AFTER_SECONDS: u64 = 300;
