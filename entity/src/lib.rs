//! SeaORM entity definitions for the users API.

pub mod prelude;
pub mod user;
