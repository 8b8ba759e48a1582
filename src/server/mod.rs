//! Server-side API backend and business logic.
//!
//! This module contains the complete backend for the user API. It uses Axum as the web
//! framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Validation policy between controllers and the data layer
//! - **Data Layer** (`data/`) - Repository trait, its SeaORM implementation, entity-to-domain conversion
//! - **Validation** (`validation/`) - Pure rule checks, one named error per rule
//! - **Model Layer** (`model/`) - Domain models
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - API key guard and request logging
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state
//! - **Startup** (`startup`) - Database connection, migrations, logging, shutdown signal
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Util** (`util/`) - Path and body decoding
//!
//! # Request Flow
//!
//! 1. **Middleware** checks the API key, then times and logs the request
//! 2. **Controller** decodes the path and body, calls the service
//! 3. **Service** validates, then calls the repository
//! 4. **Data** queries the database, converts entities to domain models
//! 5. **Controller** converts the result to a DTO or maps the error to a status code

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
pub mod validation;
