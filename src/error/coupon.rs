use rust_decimal::Decimal;
use thiserror::Error;

/// Validation failures raised by coupon management and coupon application.
#[derive(Error, Debug, PartialEq)]
pub enum CouponError {
    /// A coupon with the same code already exists.
    #[error("Coupon with code {0} already exists")]
    DuplicateCode(String),

    /// Percentage coupons cannot discount more than the full price.
    #[error("Percentage discount cannot exceed 100%, got {0}")]
    InvalidPercentage(Decimal),

    /// The coupon has been deactivated.
    #[error("Coupon is not active")]
    Inactive,

    /// The coupon's expiry timestamp has passed.
    #[error("Coupon has expired")]
    Expired,

    /// The coupon has been used as many times as its limit allows.
    #[error("Coupon usage limit reached")]
    UsageLimitReached,

    /// The order total is below the coupon's minimum purchase amount.
    #[error("Order total does not meet the minimum purchase of {minimum}")]
    MinPurchaseNotMet {
        /// Minimum purchase amount required by the coupon.
        minimum: Decimal,
    },
}
