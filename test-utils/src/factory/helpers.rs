//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use entity::sea_orm_active_enums::OrderStatus;
use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an order together with its required dependencies.
///
/// This is a convenience method that creates:
/// 1. User (as the customer)
/// 2. Address (as the shipping address)
/// 3. Order (in `Pending` status)
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, address, order))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_order_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::address::Model,
        entity::order::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_customer(db).await?;
    let address = crate::factory::address::create_address(db, user.id).await?;
    let order = crate::factory::order::create_order(db, user.id, address.id).await?;

    Ok((user, address, order))
}

/// Creates an order in a specific status together with its dependencies.
///
/// Same as `create_order_with_dependencies` but with an explicit initial
/// order status, for tests exercising transition and refund rules.
///
/// # Arguments
/// - `db` - Database connection
/// - `status` - Initial status for the created order
///
/// # Returns
/// - `Ok((user, address, order))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_order_in_status(
    db: &DatabaseConnection,
    status: OrderStatus,
) -> Result<
    (
        entity::user::Model,
        entity::address::Model,
        entity::order::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_customer(db).await?;
    let address = crate::factory::address::create_address(db, user.id).await?;
    let order =
        crate::factory::order::create_order_with_status(db, user.id, address.id, status).await?;

    Ok((user, address, order))
}

/// Creates an order with one line item and its full dependency chain.
///
/// Creates a user, address, product, order, and a single order item
/// referencing the product. Useful for order detail queries.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((user, address, product, order, item))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_order_with_item(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::address::Model,
        entity::product::Model,
        entity::order::Model,
        entity::order_item::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_customer(db).await?;
    let address = crate::factory::address::create_address(db, user.id).await?;
    let product = crate::factory::product::create_product(db).await?;
    let order = crate::factory::order::create_order(db, user.id, address.id).await?;
    let item = crate::factory::order_item::create_order_item(db, order.id, product.id).await?;

    Ok((user, address, product, order, item))
}
