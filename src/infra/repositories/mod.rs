//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence,
//! following the Repository pattern for clean separation of concerns.

mod database;
pub(crate) mod entities;
mod memory;
mod user_repository;

pub use database::DatabaseUserStore;
pub use memory::MemoryUserStore;
pub use user_repository::UserRepository;

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
