//! Order item factory for creating test order line items.

use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an order line item with default values.
///
/// Defaults:
/// - quantity: `1`
/// - price: `25.00`, discount: `0.00`, total: `25.00`
/// - size / color: `None`
///
/// # Arguments
/// - `db` - Database connection
/// - `order_id` - ID of the order the item belongs to
/// - `product_id` - ID of the ordered product
///
/// # Returns
/// - `Ok(Model)` - The created order item entity
/// - `Err(DbErr)` - Database error
pub async fn create_order_item(
    db: &DatabaseConnection,
    order_id: i32,
    product_id: i32,
) -> Result<entity::order_item::Model, DbErr> {
    entity::order_item::ActiveModel {
        order_id: ActiveValue::Set(order_id),
        product_id: ActiveValue::Set(product_id),
        quantity: ActiveValue::Set(1),
        price: ActiveValue::Set(Decimal::new(2500, 2)),
        discount: ActiveValue::Set(Decimal::ZERO),
        total: ActiveValue::Set(Decimal::new(2500, 2)),
        size: ActiveValue::Set(None),
        color: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}
