//! HTTP request handlers.
//!
//! Controllers decode path parameters and bodies, call the service, and shape the
//! response. Errors are returned as `AppError` and mapped to status codes by its
//! `IntoResponse` implementation.

pub mod user;

#[cfg(test)]
mod test;
