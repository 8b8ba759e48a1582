//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer.
//! They own validation policy: which checks run for which operation, always before
//! the repository is called.

pub mod user;
