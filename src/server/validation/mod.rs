//! Shape and range checks on user input.
//!
//! Every function here is pure: no I/O, deterministic, and returns the first rule
//! violated as a [`ValidationError`](crate::server::error::validation::ValidationError).
//! Which checks apply to which operation is decided by the service layer.

pub mod user;

pub use user::{validate_email, validate_full_name, validate_id, validate_user, validate_username};
