//! Order factory for creating test order entities.
//!
//! This module provides factory methods for creating order entities with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use chrono::Utc;
use entity::sea_orm_active_enums::{OrderStatus, PaymentMethod};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test orders with customizable fields.
///
/// Provides a builder pattern for creating order entities with default
/// values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use entity::sea_orm_active_enums::OrderStatus;
/// use test_utils::factory::order::OrderFactory;
///
/// let order = OrderFactory::new(&db, user.id, address.id)
///     .status(OrderStatus::Delivered)
///     .total(Decimal::new(20000, 2))
///     .build()
///     .await?;
/// ```
pub struct OrderFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    shipping_address_id: i32,
    order_number: String,
    status: OrderStatus,
    payment_method: PaymentMethod,
    subtotal: Decimal,
    shipping: Decimal,
    discount: Decimal,
    total: Decimal,
    coupon_code: Option<String>,
    notes: Option<String>,
}

impl<'a> OrderFactory<'a> {
    /// Creates a new OrderFactory with default values.
    ///
    /// Defaults:
    /// - order_number: `"ORD-{id:06}"` where id is auto-incremented
    /// - status: `OrderStatus::Pending`
    /// - payment_method: `PaymentMethod::CreditCard`
    /// - subtotal: `100.00`, shipping: `10.00`, discount: `0.00`, total: `110.00`
    /// - coupon_code / notes: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `user_id` - ID of the customer placing the order
    /// - `shipping_address_id` - ID of the shipping address
    ///
    /// # Returns
    /// - `OrderFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection, user_id: i32, shipping_address_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            shipping_address_id,
            order_number: format!("ORD-{:06}", id),
            status: OrderStatus::Pending,
            payment_method: PaymentMethod::CreditCard,
            subtotal: Decimal::new(10000, 2),
            shipping: Decimal::new(1000, 2),
            discount: Decimal::ZERO,
            total: Decimal::new(11000, 2),
            coupon_code: None,
            notes: None,
        }
    }

    pub fn order_number(mut self, order_number: impl Into<String>) -> Self {
        self.order_number = order_number.into();
        self
    }

    pub fn status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }

    pub fn payment_method(mut self, payment_method: PaymentMethod) -> Self {
        self.payment_method = payment_method;
        self
    }

    pub fn subtotal(mut self, subtotal: Decimal) -> Self {
        self.subtotal = subtotal;
        self
    }

    pub fn shipping(mut self, shipping: Decimal) -> Self {
        self.shipping = shipping;
        self
    }

    pub fn discount(mut self, discount: Decimal) -> Self {
        self.discount = discount;
        self
    }

    pub fn total(mut self, total: Decimal) -> Self {
        self.total = total;
        self
    }

    pub fn coupon_code(mut self, coupon_code: Option<String>) -> Self {
        self.coupon_code = coupon_code;
        self
    }

    pub fn notes(mut self, notes: Option<String>) -> Self {
        self.notes = notes;
        self
    }

    /// Inserts the order into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created order entity
    /// - `Err(DbErr)` - Database error
    pub async fn build(self) -> Result<entity::order::Model, DbErr> {
        let now = Utc::now();
        entity::order::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            order_number: ActiveValue::Set(self.order_number),
            status: ActiveValue::Set(self.status),
            payment_method: ActiveValue::Set(self.payment_method),
            shipping_address_id: ActiveValue::Set(self.shipping_address_id),
            subtotal: ActiveValue::Set(self.subtotal),
            shipping: ActiveValue::Set(self.shipping),
            discount: ActiveValue::Set(self.discount),
            total: ActiveValue::Set(self.total),
            coupon_code: ActiveValue::Set(self.coupon_code),
            notes: ActiveValue::Set(self.notes),
            order_date: ActiveValue::Set(now),
            delivered_date: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an order with default values in `Pending` status.
pub async fn create_order(
    db: &DatabaseConnection,
    user_id: i32,
    shipping_address_id: i32,
) -> Result<entity::order::Model, DbErr> {
    OrderFactory::new(db, user_id, shipping_address_id)
        .build()
        .await
}

/// Creates an order with default values in the given status.
pub async fn create_order_with_status(
    db: &DatabaseConnection,
    user_id: i32,
    shipping_address_id: i32,
    status: OrderStatus,
) -> Result<entity::order::Model, DbErr> {
    OrderFactory::new(db, user_id, shipping_address_id)
        .status(status)
        .build()
        .await
}
