//! Error types for the admin backend core.
//!
//! This module provides the application's error hierarchy. The `AppError` enum
//! serves as the top-level error type that wraps domain-specific errors from
//! the order and coupon workflows alongside persistence failures. Callers map
//! these to transport-appropriate responses.

pub mod coupon;
pub mod order;

use thiserror::Error;

use crate::error::{coupon::CouponError, order::OrderError};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the backend core.
/// Domain errors use `#[from]` for automatic conversion; a caller can match on
/// the wrapped variant to distinguish validation failures from persistence
/// failures. All failures abort the enclosing transaction before commit.
#[derive(Error, Debug)]
pub enum AppError {
    /// Order lifecycle validation error.
    ///
    /// Raised by the status machine and refund workflow for illegal
    /// transitions, non-refundable states, excessive amounts, and duplicate
    /// refund attempts.
    #[error(transparent)]
    OrderErr(#[from] OrderError),

    /// Coupon validation error.
    ///
    /// Raised when creating or applying coupons with invalid or exhausted
    /// configurations.
    #[error(transparent)]
    CouponErr(#[from] CouponError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Resource not found error.
    ///
    /// # Fields
    /// - Message describing what resource was not found
    #[error("{0}")]
    NotFound(String),
}
