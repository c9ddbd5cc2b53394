pub use sea_orm_migration::prelude::*;

mod m20260815_000001_create_user_table;
mod m20260815_000002_create_address_table;
mod m20260815_000003_create_product_table;
mod m20260816_000004_create_orders_table;
mod m20260816_000005_create_order_item_table;
mod m20260816_000006_create_order_status_history_table;
mod m20260817_000007_create_order_refund_table;
mod m20260817_000008_create_coupon_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260815_000001_create_user_table::Migration),
            Box::new(m20260815_000002_create_address_table::Migration),
            Box::new(m20260815_000003_create_product_table::Migration),
            Box::new(m20260816_000004_create_orders_table::Migration),
            Box::new(m20260816_000005_create_order_item_table::Migration),
            Box::new(m20260816_000006_create_order_status_history_table::Migration),
            Box::new(m20260817_000007_create_order_refund_table::Migration),
            Box::new(m20260817_000008_create_coupon_table::Migration),
        ]
    }
}
