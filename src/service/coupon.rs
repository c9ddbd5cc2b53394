use chrono::Utc;
use entity::sea_orm_active_enums::CouponType;
use rust_decimal::{Decimal, RoundingStrategy};
use sea_orm::DatabaseConnection;
use tracing::info;

use crate::{
    data::coupon::CouponRepository,
    error::{coupon::CouponError, AppError},
    model::coupon::{Coupon, CouponValidation, CreateCouponParams},
};

/// Coupon management and discount calculation.
pub struct CouponService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CouponService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Computes the discount a coupon yields on a given subtotal.
    ///
    /// Percentage coupons discount `subtotal * value / 100`, rounded half-up
    /// to 2 decimal places and capped at `max_discount` when one is set.
    /// Fixed coupons discount their value, capped at the subtotal (a coupon
    /// cannot discount more than the order is worth).
    ///
    /// Pure function: no side effects, no persistence access.
    ///
    /// # Arguments
    /// - `coupon`: The coupon whose scheme to apply
    /// - `subtotal`: Order subtotal the discount is computed against
    ///
    /// # Returns
    /// - `Decimal`: The discount amount
    pub fn calculate_discount(coupon: &Coupon, subtotal: Decimal) -> Decimal {
        match coupon.coupon_type {
            CouponType::Percentage => {
                let mut discount = (subtotal * coupon.value / Decimal::from(100))
                    .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

                if let Some(max_discount) = coupon.max_discount {
                    if discount > max_discount {
                        discount = max_discount;
                    }
                }

                discount
            }
            CouponType::Fixed => {
                if coupon.value > subtotal {
                    subtotal
                } else {
                    coupon.value
                }
            }
        }
    }

    /// Validates a coupon code against an order total and computes its discount.
    ///
    /// Checks, in order: the coupon is active, not expired, under its usage
    /// limit, and the order total meets its minimum purchase amount.
    ///
    /// # Arguments
    /// - `code`: Coupon code, matched case-insensitively (codes are stored
    ///   upper-cased)
    /// - `order_total`: Total the coupon would be applied to
    ///
    /// # Returns
    /// - `Ok(CouponValidation)`: The code and the computed discount
    /// - `Err(AppError::NotFound)`: No coupon with the given code
    /// - `Err(AppError::CouponErr)`: Coupon inactive, expired, exhausted, or
    ///   minimum purchase not met
    pub async fn validate(
        &self,
        code: &str,
        order_total: Decimal,
    ) -> Result<CouponValidation, AppError> {
        let code = code.to_uppercase();
        let coupon = CouponRepository::new(self.db)
            .find_by_code(&code)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Coupon not found with code: {}", code)))?;

        if !coupon.is_active {
            return Err(CouponError::Inactive.into());
        }
        if coupon.expires_at < Utc::now() {
            return Err(CouponError::Expired.into());
        }
        if coupon.usage_count >= coupon.usage_limit {
            return Err(CouponError::UsageLimitReached.into());
        }
        if order_total < coupon.min_purchase {
            return Err(CouponError::MinPurchaseNotMet {
                minimum: coupon.min_purchase,
            }
            .into());
        }

        let coupon = Coupon::from_entity(coupon);
        let discount_amount = Self::calculate_discount(&coupon, order_total);

        Ok(CouponValidation {
            code: coupon.code,
            discount_amount,
        })
    }

    /// Creates a new coupon.
    ///
    /// The code is stored upper-cased. Rejects duplicate codes and percentage
    /// values over 100.
    ///
    /// # Returns
    /// - `Ok(Coupon)`: The created coupon
    /// - `Err(AppError::CouponErr(DuplicateCode))`: Code already in use
    /// - `Err(AppError::CouponErr(InvalidPercentage))`: Percentage value over 100
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn create(&self, params: CreateCouponParams) -> Result<Coupon, AppError> {
        let code = params.code.to_uppercase();

        let repo = CouponRepository::new(self.db);
        if repo.exists_by_code(&code).await? {
            return Err(CouponError::DuplicateCode(code).into());
        }

        if params.coupon_type == CouponType::Percentage && params.value > Decimal::from(100) {
            return Err(CouponError::InvalidPercentage(params.value).into());
        }

        let coupon = repo
            .create(CreateCouponParams { code, ..params })
            .await?;

        info!(
            "Created new coupon: {} of type {:?}",
            coupon.code, coupon.coupon_type
        );

        Ok(Coupon::from_entity(coupon))
    }

    /// Deactivates a coupon (soft delete).
    ///
    /// # Returns
    /// - `Ok(())`: Coupon deactivated
    /// - `Err(AppError::NotFound)`: No coupon with the given ID
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn deactivate(&self, id: i32) -> Result<(), AppError> {
        let repo = CouponRepository::new(self.db);

        let coupon = repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Coupon not found with id: {}", id)))?;

        repo.deactivate(coupon.id).await?;

        info!("Deactivated coupon: {}", coupon.code);

        Ok(())
    }
}
