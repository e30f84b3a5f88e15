//! Infrastructure layer - External systems integration
//!
//! This module handles all persistence concerns:
//! - Database connections and migrations
//! - User repositories (in-memory and database-backed)

pub mod db;
pub mod repositories;

pub use db::{Database, Migrator};
pub use repositories::{DatabaseUserStore, MemoryUserStore, UserRepository};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockUserRepository;
