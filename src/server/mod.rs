//! Carpooling reservation backend.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers, caller resolution and DTO conversion
//! - **Service Layer** (`service/`) - Coordinators owning the reservation lifecycle, the seat
//!   inventory and cascade cleanup, plus plain CRUD services
//! - **Data Layer** (`data/`) - Repositories over SeaORM entities, generic over the connection
//!   so they run inside transactions
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Caller identity and permission guards
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state
//! - **Startup** (`startup`) - Database connection, migrations and CORS
//! - **Router** (`router`) - Axum route table
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Controller** resolves the caller through `AuthGuard`, converts DTOs to params
//! 3. **Service** checks business rules and runs the state change in one transaction
//! 4. **Data** queries the database and converts entities to domain models
//! 5. **Controller** converts the domain model to a DTO and returns the response

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
