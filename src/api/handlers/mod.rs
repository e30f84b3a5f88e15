//! HTTP request handlers.

pub mod examples_handler;
pub mod user_handler;

pub use examples_handler::examples_routes;
pub use user_handler::user_routes;
