use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::OrderStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::model::order::OrderFilter;

/// Repository providing database operations for orders.
///
/// Generic over the connection so status updates can run inside the
/// transaction opened by the service layer.
pub struct OrderRepository<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> OrderRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Gets an order by ID.
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The order
    /// - `Ok(None)`: Order not found
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::order::Model>, DbErr> {
        entity::prelude::Order::find_by_id(id).one(self.conn).await
    }

    /// Checks whether an order with the given ID exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Order::find_by_id(id)
            .count(self.conn)
            .await?;
        Ok(count > 0)
    }

    /// Gets paginated orders matching the given filters, newest first.
    ///
    /// # Arguments
    /// - `filter`: Optional status and order-number search filters
    /// - `page`: Page number (0-indexed)
    /// - `per_page`: Number of items per page
    ///
    /// # Returns
    /// - `Ok((orders, total))`: Vector of orders and total matching count
    /// - `Err(DbErr)`: Database error
    pub async fn find_paginated(
        &self,
        filter: OrderFilter,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<entity::order::Model>, u64), DbErr> {
        let mut query =
            entity::prelude::Order::find().order_by_desc(entity::order::Column::CreatedAt);

        if let Some(status) = filter.status {
            query = query.filter(entity::order::Column::Status.eq(status));
        }
        if let Some(search) = filter.search {
            query = query.filter(entity::order::Column::OrderNumber.contains(&search));
        }

        let paginator = query.paginate(self.conn, per_page);
        let total = paginator.num_items().await?;
        let orders = paginator.fetch_page(page).await?;

        Ok((orders, total))
    }

    /// Updates an order's status, bumping `updated_at`.
    ///
    /// # Arguments
    /// - `order`: The order entity to update
    /// - `status`: New status to set
    /// - `delivered_date`: Delivery timestamp to stamp, or `None` to leave
    ///   the existing value unchanged
    ///
    /// # Returns
    /// - `Ok(Model)`: The updated order
    /// - `Err(DbErr)`: Database error
    pub async fn set_status(
        &self,
        order: entity::order::Model,
        status: OrderStatus,
        delivered_date: Option<DateTime<Utc>>,
    ) -> Result<entity::order::Model, DbErr> {
        let mut active_model: entity::order::ActiveModel = order.into();

        active_model.status = ActiveValue::Set(status);
        active_model.updated_at = ActiveValue::Set(Utc::now());
        if let Some(delivered_date) = delivered_date {
            active_model.delivered_date = ActiveValue::Set(Some(delivered_date));
        }

        active_model.update(self.conn).await
    }
}
