use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260815_000003_create_product_table::Product, m20260816_000004_create_orders_table::Orders,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrderItem::Table)
                    .if_not_exists()
                    .col(pk_auto(OrderItem::Id))
                    .col(integer(OrderItem::OrderId))
                    .col(integer(OrderItem::ProductId))
                    .col(integer(OrderItem::Quantity))
                    .col(decimal_len(OrderItem::Price, 10, 2))
                    .col(decimal_len(OrderItem::Discount, 10, 2).default("0.00"))
                    .col(decimal_len(OrderItem::Total, 10, 2))
                    .col(string_null(OrderItem::Size))
                    .col(string_null(OrderItem::Color))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_item_order_id")
                            .from(OrderItem::Table, OrderItem::OrderId)
                            .to(Orders::Table, Orders::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_item_product_id")
                            .from(OrderItem::Table, OrderItem::ProductId)
                            .to(Product::Table, Product::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrderItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum OrderItem {
    Table,
    Id,
    OrderId,
    ProductId,
    Quantity,
    Price,
    Discount,
    Total,
    Size,
    Color,
}
