//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! external caller (e.g. an HTTP layer) and the data (repository) layer. Services are
//! responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than entity models
//! - **Transaction Management**: Wrapping multi-write operations in explicit
//!   transaction scopes with rollback on any error path
//!
//! Every mutating operation takes the acting administrator's identifier as an
//! explicit argument; nothing is read from ambient context.

pub mod coupon;
pub mod order;

#[cfg(test)]
mod test;
