//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories automatically handle dependencies and foreign
//! key relationships, making tests more concise and maintainable.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_customer(&db).await?;
//!     let admin = factory::user::create_admin(&db).await?;
//!
//!     // Create with all dependencies
//!     let (user, address, order) = factory::helpers::create_order_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use entity::sea_orm_active_enums::OrderStatus;
//! use test_utils::factory;
//!
//! let order = factory::order::OrderFactory::new(&db, user.id, address.id)
//!     .status(OrderStatus::Delivered)
//!     .total(rust_decimal::Decimal::new(20000, 2))
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create customer and admin user entities
//! - `address` - Create shipping address entities
//! - `product` - Create product entities
//! - `order` - Create order entities
//! - `order_item` - Create order line item entities
//! - `coupon` - Create coupon entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod address;
pub mod coupon;
pub mod helpers;
pub mod order;
pub mod order_item;
pub mod product;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use address::create_address;
pub use coupon::create_coupon;
pub use order::{create_order, create_order_with_status};
pub use order_item::create_order_item;
pub use product::create_product;
pub use user::{create_admin, create_customer};
