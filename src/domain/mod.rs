//! Domain layer - Core business entities
//!
//! DDD: Domain layer has NO infrastructure dependencies.

pub mod user;

pub use user::User;
