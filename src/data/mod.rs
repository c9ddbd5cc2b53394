//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! aggregate in the order core. Repositories use SeaORM entity models internally and
//! are generic over the connection type, so the same operations run directly against
//! a `DatabaseConnection` or inside a `DatabaseTransaction` opened by the service
//! layer.

pub mod coupon;
pub mod order;
pub mod order_refund;
pub mod order_status_history;
