//! Order domain models and parameters.
//!
//! Provides domain models for orders, their status history, and refunds, plus
//! parameter types for the repository layer. Summary and detail models carry
//! the customer and line-item context an admin screen needs alongside the
//! order row itself.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{OrderStatus, PaymentMethod};
use rust_decimal::Decimal;
use serde::Serialize;

/// Order list/summary representation.
///
/// Carries the order's monetary fields together with basic customer context
/// and the number of line items, without loading the full item list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderSummary {
    /// Unique identifier for the order.
    pub id: i32,
    /// Unique human-readable order number.
    pub order_number: String,
    /// Current lifecycle status.
    pub status: OrderStatus,
    /// Payment method selected at checkout.
    pub payment_method: PaymentMethod,
    /// Full name of the customer who placed the order.
    pub customer_name: String,
    /// Email of the customer who placed the order.
    pub customer_email: String,
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub discount: Decimal,
    pub total: Decimal,
    /// Number of line items on the order.
    pub item_count: u64,
    /// Timestamp when the order was placed.
    pub order_date: DateTime<Utc>,
    /// Timestamp when the order was delivered, if it has been.
    pub delivered_date: Option<DateTime<Utc>>,
    /// Timestamp when the order row was created.
    pub created_at: DateTime<Utc>,
}

impl OrderSummary {
    /// Builds a summary from the order entity and its customer.
    ///
    /// # Arguments
    /// - `order` - The order entity from the database
    /// - `customer` - The user entity who placed the order
    /// - `item_count` - Number of line items on the order
    pub fn from_entity(
        order: entity::order::Model,
        customer: &entity::user::Model,
        item_count: u64,
    ) -> Self {
        Self {
            id: order.id,
            order_number: order.order_number,
            status: order.status,
            payment_method: order.payment_method,
            customer_name: customer.full_name.clone(),
            customer_email: customer.email.clone(),
            subtotal: order.subtotal,
            shipping: order.shipping,
            discount: order.discount,
            total: order.total,
            item_count,
            order_date: order.order_date,
            delivered_date: order.delivered_date,
            created_at: order.created_at,
        }
    }
}

/// Customer context embedded in an order detail view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Customer {
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub mobile: Option<String>,
    pub is_active: bool,
}

impl Customer {
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            full_name: entity.full_name,
            email: entity.email,
            mobile: entity.mobile,
            is_active: entity.is_active,
        }
    }
}

/// Shipping address embedded in an order detail view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShippingAddress {
    pub id: i32,
    pub full_name: String,
    pub mobile: String,
    pub address_line1: String,
    pub address_line2: Option<String>,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

impl ShippingAddress {
    pub fn from_entity(entity: entity::address::Model) -> Self {
        Self {
            id: entity.id,
            full_name: entity.full_name,
            mobile: entity.mobile,
            address_line1: entity.address_line1,
            address_line2: entity.address_line2,
            city: entity.city,
            state: entity.state,
            zip_code: entity.zip_code,
            country: entity.country,
        }
    }
}

/// A single line item on an order, enriched with product display data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderLineItem {
    pub id: i32,
    pub product_id: i32,
    /// Product name at the time of the query.
    pub product_name: String,
    pub thumbnail: Option<String>,
    pub quantity: i32,
    pub price: Decimal,
    pub discount: Decimal,
    pub total: Decimal,
    pub size: Option<String>,
    pub color: Option<String>,
}

impl OrderLineItem {
    /// Converts an order item entity and its product to a line item model.
    ///
    /// Falls back to a placeholder name if the product row is missing.
    pub fn from_entity(
        item: entity::order_item::Model,
        product: Option<entity::product::Model>,
    ) -> Self {
        let (product_name, thumbnail) = match product {
            Some(product) => (product.name, product.thumbnail),
            None => (format!("Unknown Product ({})", item.product_id), None),
        };

        Self {
            id: item.id,
            product_id: item.product_id,
            product_name,
            thumbnail,
            quantity: item.quantity,
            price: item.price,
            discount: item.discount,
            total: item.total,
            size: item.size,
            color: item.color,
        }
    }
}

/// Full order representation with customer, address, and line items.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderDetail {
    pub id: i32,
    pub order_number: String,
    pub status: OrderStatus,
    pub payment_method: PaymentMethod,
    pub customer: Customer,
    pub shipping_address: ShippingAddress,
    pub items: Vec<OrderLineItem>,
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub discount: Decimal,
    pub total: Decimal,
    pub coupon_code: Option<String>,
    pub notes: Option<String>,
    pub order_date: DateTime<Utc>,
    pub delivered_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One entry of an order's status audit trail.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineEntry {
    pub id: i32,
    pub order_id: i32,
    /// Status before the transition. `None` only for the first record.
    pub old_status: Option<OrderStatus>,
    /// Status after the transition.
    pub new_status: OrderStatus,
    /// ID of the administrator who made the change.
    pub changed_by: i32,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl TimelineEntry {
    pub fn from_entity(entity: entity::order_status_history::Model) -> Self {
        Self {
            id: entity.id,
            order_id: entity.order_id,
            old_status: entity.old_status,
            new_status: entity.new_status,
            changed_by: entity.changed_by,
            notes: entity.notes,
            created_at: entity.created_at,
        }
    }
}

/// A page of order summaries with pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaginatedOrders {
    pub orders: Vec<OrderSummary>,
    /// Total number of orders matching the filters.
    pub total: u64,
    pub total_pages: u64,
    /// Page number that was fetched (0-indexed).
    pub page: u64,
    pub per_page: u64,
}

/// Filters for paginated order listing.
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    /// Restrict to orders in this status.
    pub status: Option<OrderStatus>,
    /// Substring match against the order number.
    pub search: Option<String>,
}

/// Parameters for appending an order status history record.
#[derive(Debug, Clone)]
pub struct AppendHistoryParams {
    pub order_id: i32,
    /// Status before the transition. `None` only for the first record.
    pub old_status: Option<OrderStatus>,
    pub new_status: OrderStatus,
    /// ID of the acting administrator.
    pub changed_by: i32,
    pub notes: Option<String>,
}

/// Parameters for creating an order refund record.
#[derive(Debug, Clone)]
pub struct CreateRefundParams {
    pub order_id: i32,
    pub refund_amount: Decimal,
    pub reason: String,
    /// ID of the acting administrator.
    pub processed_by: i32,
}
