//! Camp signup HTTP backend.
//!
//! The server follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and document serialization
//! - **Service Layer** (`service/`) - Orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations through SeaORM repositories
//! - **Model Layer** (`model/`) - Domain models, field assignment and parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! Supporting modules provide configuration (`config`), logging (`logger`), shared
//! state (`state`), database startup (`startup`), routing with OpenAPI documentation
//! (`router`) and request body parsing (`util`).
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes to a controller
//! 2. **Controller** decodes the body and assigns its fields, calls the service
//! 3. **Service** executes the operation through repositories
//! 4. **Data** queries the database and returns entity rows
//! 5. **Controller** serializes domain models into documents and returns the response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod logger;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
