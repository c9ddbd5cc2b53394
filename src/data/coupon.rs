use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::model::coupon::CreateCouponParams;

/// Repository providing database operations for coupons.
pub struct CouponRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> CouponRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Creates a new coupon.
    ///
    /// # Arguments
    /// - `params`: Coupon configuration; the code is stored as given
    ///
    /// # Returns
    /// - `Ok(Model)`: The created coupon with `usage_count` starting at zero
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, params: CreateCouponParams) -> Result<entity::coupon::Model, DbErr> {
        let now = Utc::now();
        entity::coupon::ActiveModel {
            code: ActiveValue::Set(params.code),
            coupon_type: ActiveValue::Set(params.coupon_type),
            value: ActiveValue::Set(params.value),
            min_purchase: ActiveValue::Set(params.min_purchase),
            max_discount: ActiveValue::Set(params.max_discount),
            usage_limit: ActiveValue::Set(params.usage_limit),
            usage_count: ActiveValue::Set(0),
            expires_at: ActiveValue::Set(params.expires_at),
            is_active: ActiveValue::Set(params.is_active),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.conn)
        .await
    }

    /// Gets a coupon by ID.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::coupon::Model>, DbErr> {
        entity::prelude::Coupon::find_by_id(id).one(self.conn).await
    }

    /// Gets a coupon by its exact code.
    pub async fn find_by_code(&self, code: &str) -> Result<Option<entity::coupon::Model>, DbErr> {
        entity::prelude::Coupon::find()
            .filter(entity::coupon::Column::Code.eq(code))
            .one(self.conn)
            .await
    }

    /// Checks whether a coupon with the given code exists.
    pub async fn exists_by_code(&self, code: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Coupon::find()
            .filter(entity::coupon::Column::Code.eq(code))
            .count(self.conn)
            .await?;
        Ok(count > 0)
    }

    /// Deactivates a coupon (soft delete), bumping `updated_at`.
    ///
    /// # Returns
    /// - `Ok(Model)`: The deactivated coupon
    /// - `Err(DbErr::RecordNotFound)`: No coupon with the given ID
    /// - `Err(DbErr)`: Database error
    pub async fn deactivate(&self, id: i32) -> Result<entity::coupon::Model, DbErr> {
        let coupon = self
            .find_by_id(id)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Coupon {} not found", id)))?;

        let mut active_model: entity::coupon::ActiveModel = coupon.into();
        active_model.is_active = ActiveValue::Set(false);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        active_model.update(self.conn).await
    }
}
