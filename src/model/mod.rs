//! Wire-level DTOs shared by the HTTP surface and its OpenAPI document.

pub mod api;
pub mod user;
