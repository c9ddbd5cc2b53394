//! Address factory for creating test shipping addresses.

use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Creates a shipping address for the given user with default values.
///
/// # Arguments
/// - `db` - Database connection
/// - `user_id` - ID of the user the address belongs to
///
/// # Returns
/// - `Ok(Model)` - The created address entity
/// - `Err(DbErr)` - Database error
pub async fn create_address(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::address::Model, DbErr> {
    let id = next_id();
    entity::address::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        full_name: ActiveValue::Set(format!("Recipient {}", id)),
        mobile: ActiveValue::Set("5550100".to_string()),
        address_line1: ActiveValue::Set(format!("{} Main Street", id)),
        address_line2: ActiveValue::Set(None),
        city: ActiveValue::Set("Springfield".to_string()),
        state: ActiveValue::Set("IL".to_string()),
        zip_code: ActiveValue::Set("62701".to_string()),
        country: ActiveValue::Set("US".to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
}
