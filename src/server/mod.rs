//! Backend of the skin server.
//!
//! # Layers
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers, DTO conversion
//! - **Service Layer** (`service/`) - Business rules and orchestration
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//!
//! Supporting modules provide application infrastructure:
//!
//! - `middleware` - Session authentication guard, typed session access, client address
//! - `error` - Error types and their HTTP responses
//! - `config`, `startup`, `state`, `router` - Configuration and wiring
//! - `scheduler` - Background jobs
//! - `util` - Password hashing and field validation
//!
//! # Request Flow
//!
//! 1. **Router** dispatches the request to a controller
//! 2. **Controller** extracts DTOs, converts them to parameters
//! 3. **Service** validates and applies business rules
//! 4. **Data** queries the database, converts entities to domain models
//! 5. **Controller** converts the domain model to a DTO and responds

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
