use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::model::order::AppendHistoryParams;

/// Repository for the append-only order status audit trail.
///
/// History rows are only ever inserted; there are no update or delete
/// operations.
pub struct OrderStatusHistoryRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> OrderStatusHistoryRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Appends one history record for a status transition.
    ///
    /// # Arguments
    /// - `params`: Order reference, old/new status, acting admin, and notes
    ///
    /// # Returns
    /// - `Ok(Model)`: The created history record
    /// - `Err(DbErr)`: Database error
    pub async fn append(
        &self,
        params: AppendHistoryParams,
    ) -> Result<entity::order_status_history::Model, DbErr> {
        entity::order_status_history::ActiveModel {
            order_id: ActiveValue::Set(params.order_id),
            old_status: ActiveValue::Set(params.old_status),
            new_status: ActiveValue::Set(params.new_status),
            changed_by: ActiveValue::Set(params.changed_by),
            notes: ActiveValue::Set(params.notes),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.conn)
        .await
    }

    /// Gets all history records for an order in creation order.
    ///
    /// Ordered by creation timestamp, with the insert ID as a tiebreaker for
    /// records created within the same timestamp granularity.
    ///
    /// # Returns
    /// - `Ok(records)`: History records, oldest first
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_order_id(
        &self,
        order_id: i32,
    ) -> Result<Vec<entity::order_status_history::Model>, DbErr> {
        entity::prelude::OrderStatusHistory::find()
            .filter(entity::order_status_history::Column::OrderId.eq(order_id))
            .order_by_asc(entity::order_status_history::Column::CreatedAt)
            .order_by_asc(entity::order_status_history::Column::Id)
            .all(self.conn)
            .await
    }
}
