//! SeaORM entities backing the database user store.

pub mod user;
