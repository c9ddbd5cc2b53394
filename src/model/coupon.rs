//! Coupon domain models and parameters.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::CouponType;
use rust_decimal::Decimal;
use serde::Serialize;

/// Discount coupon with usage limits and expiry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Coupon {
    pub id: i32,
    /// Unique coupon code, stored upper-cased.
    pub code: String,
    pub coupon_type: CouponType,
    /// Percentage (0-100) for percentage coupons, monetary amount for fixed.
    pub value: Decimal,
    /// Minimum order total required to apply the coupon.
    pub min_purchase: Decimal,
    /// Cap on the discount a percentage coupon can produce.
    pub max_discount: Option<Decimal>,
    pub usage_limit: i32,
    pub usage_count: i32,
    pub expires_at: DateTime<Utc>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Coupon {
    /// Converts an entity model to a coupon domain model at the repository boundary.
    pub fn from_entity(entity: entity::coupon::Model) -> Self {
        Self {
            id: entity.id,
            code: entity.code,
            coupon_type: entity.coupon_type,
            value: entity.value,
            min_purchase: entity.min_purchase,
            max_discount: entity.max_discount,
            usage_limit: entity.usage_limit,
            usage_count: entity.usage_count,
            expires_at: entity.expires_at,
            is_active: entity.is_active,
            created_at: entity.created_at,
        }
    }
}

/// Result of validating a coupon against an order total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CouponValidation {
    /// Upper-cased code of the validated coupon.
    pub code: String,
    /// Discount the coupon yields for the given order total.
    pub discount_amount: Decimal,
}

/// Parameters for creating a new coupon.
#[derive(Debug, Clone)]
pub struct CreateCouponParams {
    pub code: String,
    pub coupon_type: CouponType,
    pub value: Decimal,
    /// Defaults to zero when not supplied by the caller.
    pub min_purchase: Decimal,
    pub max_discount: Option<Decimal>,
    pub usage_limit: i32,
    pub expires_at: DateTime<Utc>,
    pub is_active: bool,
}
