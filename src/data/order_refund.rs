use chrono::Utc;
use entity::sea_orm_active_enums::RefundStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

use crate::model::order::CreateRefundParams;

/// Repository providing database operations for order refunds.
///
/// At most one refund exists per order; the unique index on `order_id` backs
/// the service-layer duplicate check.
pub struct OrderRefundRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> OrderRefundRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Creates a refund record with status `Approved`.
    ///
    /// # Arguments
    /// - `params`: Order reference, amount, reason, and acting admin
    ///
    /// # Returns
    /// - `Ok(Model)`: The created refund
    /// - `Err(DbErr)`: Database error, including unique-constraint violation
    ///   when a refund already exists for the order
    pub async fn create(
        &self,
        params: CreateRefundParams,
    ) -> Result<entity::order_refund::Model, DbErr> {
        let now = Utc::now();
        entity::order_refund::ActiveModel {
            order_id: ActiveValue::Set(params.order_id),
            refund_amount: ActiveValue::Set(params.refund_amount),
            reason: ActiveValue::Set(params.reason),
            status: ActiveValue::Set(RefundStatus::Approved),
            processed_by: ActiveValue::Set(params.processed_by),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.conn)
        .await
    }

    /// Gets the refund for an order, if one exists.
    pub async fn find_by_order_id(
        &self,
        order_id: i32,
    ) -> Result<Option<entity::order_refund::Model>, DbErr> {
        entity::prelude::OrderRefund::find()
            .filter(entity::order_refund::Column::OrderId.eq(order_id))
            .one(self.conn)
            .await
    }

    /// Checks whether a refund already exists for the given order.
    pub async fn exists_for_order(&self, order_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::OrderRefund::find()
            .filter(entity::order_refund::Column::OrderId.eq(order_id))
            .count(self.conn)
            .await?;
        Ok(count > 0)
    }
}
