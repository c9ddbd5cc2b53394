//! Administrative backend core for an e-commerce platform.
//!
//! This crate contains the order lifecycle and refund workflow that back the
//! platform's admin tooling, together with coupon discount handling. It uses
//! SeaORM for database operations and is invoked by an external transport
//! layer (HTTP handlers are out of scope here) with the acting administrator's
//! identifier passed in explicitly.
//!
//! # Architecture
//!
//! The crate follows a layered architecture with clear separation of concerns:
//!
//! - **Service Layer** (`service/`) - Business logic orchestration between callers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application and domain error types
//!
//! # Request Flow
//!
//! A typical operation flows through these layers:
//!
//! 1. **Caller** invokes a service with an order id, the requested change, and the acting admin id
//! 2. **Service** validates business rules, opens a transaction for multi-write operations
//! 3. **Data** queries the database, converts entities to domain models
//! 4. **Service** commits the transaction and returns a domain model to the caller
//!
//! # Transactions
//!
//! Status transitions and refunds perform multiple writes (order update,
//! history insert, refund insert). Services wrap these in an explicit
//! transaction scope; any error path drops the transaction before commit, so
//! no partial state is persisted.

pub mod data;
pub mod error;
pub mod model;
pub mod service;
