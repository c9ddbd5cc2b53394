//! Coupon factory for creating test coupon entities.

use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::CouponType;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test coupons with customizable fields.
///
/// Provides a builder pattern for creating coupon entities with default
/// values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use entity::sea_orm_active_enums::CouponType;
/// use test_utils::factory::coupon::CouponFactory;
///
/// let coupon = CouponFactory::new(&db)
///     .coupon_type(CouponType::Fixed)
///     .value(Decimal::new(5000, 2))
///     .build()
///     .await?;
/// ```
pub struct CouponFactory<'a> {
    db: &'a DatabaseConnection,
    code: String,
    coupon_type: CouponType,
    value: Decimal,
    min_purchase: Decimal,
    max_discount: Option<Decimal>,
    usage_limit: i32,
    usage_count: i32,
    expires_at: chrono::DateTime<Utc>,
    is_active: bool,
}

impl<'a> CouponFactory<'a> {
    /// Creates a new CouponFactory with default values.
    ///
    /// Defaults:
    /// - code: `"SAVE{id}"` where id is auto-incremented
    /// - coupon_type: `CouponType::Percentage`, value: `10.00`
    /// - min_purchase: `0.00`, max_discount: `None`
    /// - usage_limit: `100`, usage_count: `0`
    /// - expires_at: 30 days from now
    /// - is_active: `true`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `CouponFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            code: format!("SAVE{}", id),
            coupon_type: CouponType::Percentage,
            value: Decimal::new(1000, 2),
            min_purchase: Decimal::ZERO,
            max_discount: None,
            usage_limit: 100,
            usage_count: 0,
            expires_at: Utc::now() + Duration::days(30),
            is_active: true,
        }
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn coupon_type(mut self, coupon_type: CouponType) -> Self {
        self.coupon_type = coupon_type;
        self
    }

    pub fn value(mut self, value: Decimal) -> Self {
        self.value = value;
        self
    }

    pub fn min_purchase(mut self, min_purchase: Decimal) -> Self {
        self.min_purchase = min_purchase;
        self
    }

    pub fn max_discount(mut self, max_discount: Option<Decimal>) -> Self {
        self.max_discount = max_discount;
        self
    }

    pub fn usage_limit(mut self, usage_limit: i32) -> Self {
        self.usage_limit = usage_limit;
        self
    }

    pub fn usage_count(mut self, usage_count: i32) -> Self {
        self.usage_count = usage_count;
        self
    }

    pub fn expires_at(mut self, expires_at: chrono::DateTime<Utc>) -> Self {
        self.expires_at = expires_at;
        self
    }

    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Inserts the coupon into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created coupon entity
    /// - `Err(DbErr)` - Database error
    pub async fn build(self) -> Result<entity::coupon::Model, DbErr> {
        let now = Utc::now();
        entity::coupon::ActiveModel {
            code: ActiveValue::Set(self.code),
            coupon_type: ActiveValue::Set(self.coupon_type),
            value: ActiveValue::Set(self.value),
            min_purchase: ActiveValue::Set(self.min_purchase),
            max_discount: ActiveValue::Set(self.max_discount),
            usage_limit: ActiveValue::Set(self.usage_limit),
            usage_count: ActiveValue::Set(self.usage_count),
            expires_at: ActiveValue::Set(self.expires_at),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active percentage coupon with default values.
pub async fn create_coupon(db: &DatabaseConnection) -> Result<entity::coupon::Model, DbErr> {
    CouponFactory::new(db).build().await
}
