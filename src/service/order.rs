use chrono::Utc;
use entity::sea_orm_active_enums::OrderStatus;
use rust_decimal::Decimal;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, TransactionTrait,
};
use tracing::info;

use crate::{
    data::{
        order::OrderRepository, order_refund::OrderRefundRepository,
        order_status_history::OrderStatusHistoryRepository,
    },
    error::{order::OrderError, AppError},
    model::order::{
        AppendHistoryParams, CreateRefundParams, Customer, OrderDetail, OrderFilter, OrderLineItem,
        OrderSummary, PaginatedOrders, ShippingAddress, TimelineEntry,
    },
};

/// Order lifecycle service: status machine, refund workflow, and audit trail.
///
/// Orders move through a fixed set of statuses. `Cancelled` and `Refunded` are
/// terminal; cancellation is only reachable before shipment. Every successful
/// transition appends one history record, and refunds force the order into the
/// terminal `Refunded` status.
pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Transitions an order to the requested status.
    ///
    /// Rejects no-op transitions, transitions out of terminal statuses, and
    /// cancellation of orders that have already shipped. On success the
    /// order update and the history insert are committed in one transaction.
    /// Transitioning to `Delivered` stamps the delivery timestamp.
    ///
    /// # Arguments
    /// - `order_id`: ID of the order to transition
    /// - `target`: Requested target status
    /// - `notes`: Optional free-text notes recorded in the audit trail
    /// - `admin_id`: ID of the acting administrator
    ///
    /// # Returns
    /// - `Ok(OrderSummary)`: The updated order
    /// - `Err(AppError::NotFound)`: Order does not exist
    /// - `Err(AppError::OrderErr(InvalidTransition))`: Illegal status change
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn update_status(
        &self,
        order_id: i32,
        target: OrderStatus,
        notes: Option<String>,
        admin_id: i32,
    ) -> Result<OrderSummary, AppError> {
        let order = OrderRepository::new(self.db)
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Order not found with id: {}", order_id)))?;

        let old_status = order.status;
        Self::validate_transition(old_status, target)?;

        let delivered_date = (target == OrderStatus::Delivered).then(Utc::now);

        let txn = self.db.begin().await?;

        let updated = OrderRepository::new(&txn)
            .set_status(order, target, delivered_date)
            .await?;
        OrderStatusHistoryRepository::new(&txn)
            .append(AppendHistoryParams {
                order_id,
                old_status: Some(old_status),
                new_status: target,
                changed_by: admin_id,
                notes,
            })
            .await?;

        txn.commit().await?;

        info!(
            "Order {} status updated from {} to {} by admin {}",
            updated.order_number, old_status, target, admin_id
        );

        self.summarize(updated).await
    }

    /// Processes a one-time refund against a shipped or delivered order.
    ///
    /// Creates the refund record, forces the order into the terminal
    /// `Refunded` status, and appends a history record noting the refund
    /// reason, all in one transaction. The history record captures the true
    /// prior status as its old status.
    ///
    /// # Arguments
    /// - `order_id`: ID of the order to refund
    /// - `refund_amount`: Amount to refund; may equal but not exceed the total
    /// - `reason`: Free-text refund reason
    /// - `admin_id`: ID of the acting administrator
    ///
    /// # Returns
    /// - `Ok(())`: Refund recorded and order moved to `Refunded`
    /// - `Err(AppError::NotFound)`: Order does not exist
    /// - `Err(AppError::OrderErr(InvalidState))`: Order is not shipped/delivered
    /// - `Err(AppError::OrderErr(InvalidAmount))`: Amount exceeds the order total
    /// - `Err(AppError::OrderErr(DuplicateRefund))`: A refund already exists
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn process_refund(
        &self,
        order_id: i32,
        refund_amount: Decimal,
        reason: String,
        admin_id: i32,
    ) -> Result<(), AppError> {
        let order = OrderRepository::new(self.db)
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Order not found with id: {}", order_id)))?;

        if !matches!(order.status, OrderStatus::Shipped | OrderStatus::Delivered) {
            return Err(OrderError::InvalidState {
                status: order.status,
            }
            .into());
        }

        if refund_amount > order.total {
            return Err(OrderError::InvalidAmount {
                amount: refund_amount,
                total: order.total,
            }
            .into());
        }

        let old_status = order.status;
        let order_number = order.order_number.clone();

        let txn = self.db.begin().await?;

        let refund_repo = OrderRefundRepository::new(&txn);
        if refund_repo.exists_for_order(order_id).await? {
            return Err(OrderError::DuplicateRefund { order_id }.into());
        }

        refund_repo
            .create(CreateRefundParams {
                order_id,
                refund_amount,
                reason: reason.clone(),
                processed_by: admin_id,
            })
            .await?;

        OrderRepository::new(&txn)
            .set_status(order, OrderStatus::Refunded, None)
            .await?;

        OrderStatusHistoryRepository::new(&txn)
            .append(AppendHistoryParams {
                order_id,
                old_status: Some(old_status),
                new_status: OrderStatus::Refunded,
                changed_by: admin_id,
                notes: Some(format!("Refund processed: {}", reason)),
            })
            .await?;

        txn.commit().await?;

        info!(
            "Refund processed for order {} by admin {}, amount: {}",
            order_number, admin_id, refund_amount
        );

        Ok(())
    }

    /// Gets the status audit trail for an order, oldest entry first.
    ///
    /// # Returns
    /// - `Ok(entries)`: History entries in creation order
    /// - `Err(AppError::NotFound)`: Order does not exist
    /// - `Err(AppError::DbErr)`: Database error
    pub async fn get_timeline(&self, order_id: i32) -> Result<Vec<TimelineEntry>, AppError> {
        if !OrderRepository::new(self.db).exists(order_id).await? {
            return Err(AppError::NotFound(format!(
                "Order not found with id: {}",
                order_id
            )));
        }

        let records = OrderStatusHistoryRepository::new(self.db)
            .get_by_order_id(order_id)
            .await?;

        Ok(records.into_iter().map(TimelineEntry::from_entity).collect())
    }

    /// Gets an order with its customer, shipping address, and line items.
    ///
    /// # Returns
    /// - `Ok(Some(OrderDetail))`: The full order representation
    /// - `Ok(None)`: Order not found
    /// - `Err(AppError)`: Database error or missing association
    pub async fn get_by_id(&self, order_id: i32) -> Result<Option<OrderDetail>, AppError> {
        let Some(order) = OrderRepository::new(self.db).find_by_id(order_id).await? else {
            return Ok(None);
        };

        let customer = entity::prelude::User::find_by_id(order.user_id)
            .one(self.db)
            .await?
            .ok_or_else(|| AppError::NotFound("Customer not found".to_string()))?;

        let address = entity::prelude::Address::find_by_id(order.shipping_address_id)
            .one(self.db)
            .await?
            .ok_or_else(|| AppError::NotFound("Shipping address not found".to_string()))?;

        let items = entity::prelude::OrderItem::find()
            .filter(entity::order_item::Column::OrderId.eq(order_id))
            .find_also_related(entity::prelude::Product)
            .all(self.db)
            .await?
            .into_iter()
            .map(|(item, product)| OrderLineItem::from_entity(item, product))
            .collect();

        Ok(Some(OrderDetail {
            id: order.id,
            order_number: order.order_number,
            status: order.status,
            payment_method: order.payment_method,
            customer: Customer::from_entity(customer),
            shipping_address: ShippingAddress::from_entity(address),
            items,
            subtotal: order.subtotal,
            shipping: order.shipping,
            discount: order.discount,
            total: order.total,
            coupon_code: order.coupon_code,
            notes: order.notes,
            order_date: order.order_date,
            delivered_date: order.delivered_date,
            created_at: order.created_at,
            updated_at: order.updated_at,
        }))
    }

    /// Gets paginated orders matching the given filters, newest first.
    ///
    /// # Arguments
    /// - `filter`: Optional status and order-number search filters
    /// - `page`: Page number (0-indexed)
    /// - `per_page`: Number of items per page
    ///
    /// # Returns
    /// - `Ok(PaginatedOrders)`: Page of order summaries with totals
    /// - `Err(AppError)`: Database error
    pub async fn get_paginated(
        &self,
        filter: OrderFilter,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedOrders, AppError> {
        let (orders, total) = OrderRepository::new(self.db)
            .find_paginated(filter, page, per_page)
            .await?;

        let total_pages = if per_page > 0 {
            total.div_ceil(per_page)
        } else {
            0
        };

        let mut summaries = Vec::with_capacity(orders.len());
        for order in orders {
            summaries.push(self.summarize(order).await?);
        }

        Ok(PaginatedOrders {
            orders: summaries,
            total,
            total_pages,
            page,
            per_page,
        })
    }

    /// Validates a requested status transition against the lifecycle rules.
    ///
    /// Checks, in order: no-op transitions are rejected; terminal statuses
    /// reject all further transitions; shipped or delivered orders cannot be
    /// cancelled.
    fn validate_transition(from: OrderStatus, to: OrderStatus) -> Result<(), OrderError> {
        if from == to {
            return Err(OrderError::InvalidTransition { from, to });
        }

        if from.is_terminal() {
            return Err(OrderError::InvalidTransition { from, to });
        }

        if to == OrderStatus::Cancelled
            && matches!(from, OrderStatus::Shipped | OrderStatus::Delivered)
        {
            return Err(OrderError::InvalidTransition { from, to });
        }

        Ok(())
    }

    /// Builds an order summary, fetching the customer and line-item count.
    async fn summarize(&self, order: entity::order::Model) -> Result<OrderSummary, AppError> {
        let customer = entity::prelude::User::find_by_id(order.user_id)
            .one(self.db)
            .await?
            .ok_or_else(|| AppError::NotFound("Customer not found".to_string()))?;

        let item_count = entity::prelude::OrderItem::find()
            .filter(entity::order_item::Column::OrderId.eq(order.id))
            .count(self.db)
            .await?;

        Ok(OrderSummary::from_entity(order, &customer, item_count))
    }
}
