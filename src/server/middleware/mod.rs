//! Request interceptors wrapping every API route.
//!
//! Each interceptor either short-circuits with its own response or passes the request
//! on. They are attached by `router::app`; `router::router` leaves them off so handlers
//! can be exercised directly.

pub mod api_key;
pub mod logging;

#[cfg(test)]
mod test;
