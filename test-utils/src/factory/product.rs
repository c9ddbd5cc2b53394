//! Product factory for creating test products.

use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Creates a product with default values.
///
/// Defaults:
/// - name: `"Product {id}"` where id is auto-incremented
/// - price: `25.00`
/// - thumbnail: `None`
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(Model)` - The created product entity
/// - `Err(DbErr)` - Database error
pub async fn create_product(db: &DatabaseConnection) -> Result<entity::product::Model, DbErr> {
    let id = next_id();
    entity::product::ActiveModel {
        name: ActiveValue::Set(format!("Product {}", id)),
        price: ActiveValue::Set(Decimal::new(2500, 2)),
        thumbnail: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}
