//! Database repository layer.
//!
//! Repositories handle the database operations for each domain entity. They use SeaORM
//! entity models internally and return domain models, keeping the data layer separate
//! from business logic.

pub mod user;
