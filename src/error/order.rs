use entity::sea_orm_active_enums::OrderStatus;
use rust_decimal::Decimal;
use thiserror::Error;

/// Validation failures raised by the order status machine and refund workflow.
///
/// All variants are synchronous, locally-detected validation failures; none
/// are retried internally.
#[derive(Error, Debug, PartialEq)]
pub enum OrderError {
    /// Illegal status change attempted.
    ///
    /// Raised when the target equals the current status (no-op transitions
    /// are rejected, not silently accepted), when the current status is
    /// terminal, or when cancelling an order that has already shipped.
    #[error("Cannot transition order from {from} to {to}")]
    InvalidTransition {
        /// Status the order is currently in.
        from: OrderStatus,
        /// Requested target status.
        to: OrderStatus,
    },

    /// Refund attempted from a non-refundable status.
    ///
    /// Only delivered or shipped orders can be refunded.
    #[error("Can only refund delivered or shipped orders, order is {status}")]
    InvalidState {
        /// Status the order is currently in.
        status: OrderStatus,
    },

    /// Refund amount exceeds the order total.
    #[error("Refund amount {amount} cannot exceed order total {total}")]
    InvalidAmount {
        /// Requested refund amount.
        amount: Decimal,
        /// Order total the amount was checked against.
        total: Decimal,
    },

    /// A refund already exists for this order.
    ///
    /// At most one refund is permitted per order.
    #[error("Refund request already exists for order {order_id}")]
    DuplicateRefund {
        /// ID of the order the duplicate refund was attempted against.
        order_id: i32,
    },
}
