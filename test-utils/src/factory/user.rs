//! User factory for creating test user entities.

use chrono::Utc;
use entity::sea_orm_active_enums::UserRole;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test users with customizable fields.
///
/// Provides a builder pattern for creating user entities with default
/// values that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use entity::sea_orm_active_enums::UserRole;
/// use test_utils::factory::user::UserFactory;
///
/// let admin = UserFactory::new(&db)
///     .full_name("Jamie Admin")
///     .role(UserRole::Admin)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    full_name: String,
    email: String,
    mobile: Option<String>,
    role: UserRole,
    is_active: bool,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - full_name: `"User {id}"` where id is auto-incremented
    /// - email: `"user{id}@example.com"`
    /// - mobile: `None`
    /// - role: `UserRole::Customer`
    /// - is_active: `true`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `UserFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            full_name: format!("User {}", id),
            email: format!("user{}@example.com", id),
            mobile: None,
            role: UserRole::Customer,
            is_active: true,
        }
    }

    pub fn full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = full_name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn mobile(mut self, mobile: Option<String>) -> Self {
        self.mobile = mobile;
        self
    }

    pub fn role(mut self, role: UserRole) -> Self {
        self.role = role;
        self
    }

    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Inserts the user into the database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created user entity
    /// - `Err(DbErr)` - Database error
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        entity::user::ActiveModel {
            full_name: ActiveValue::Set(self.full_name),
            email: ActiveValue::Set(self.email),
            mobile: ActiveValue::Set(self.mobile),
            role: ActiveValue::Set(self.role),
            is_active: ActiveValue::Set(self.is_active),
            profile_image: ActiveValue::Set(None),
            last_login: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a customer user with default values.
pub async fn create_customer(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates an admin user with default values.
pub async fn create_admin(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).role(UserRole::Admin).build().await
}
