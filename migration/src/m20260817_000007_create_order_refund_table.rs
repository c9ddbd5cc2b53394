use sea_orm_migration::{prelude::*, schema::*};

use super::m20260816_000004_create_orders_table::Orders;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrderRefund::Table)
                    .if_not_exists()
                    .col(pk_auto(OrderRefund::Id))
                    .col(integer_uniq(OrderRefund::OrderId))
                    .col(decimal_len(OrderRefund::RefundAmount, 10, 2))
                    .col(string_len(OrderRefund::Reason, 500))
                    .col(string_len(OrderRefund::Status, 20))
                    .col(integer(OrderRefund::ProcessedBy))
                    .col(
                        timestamp(OrderRefund::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(OrderRefund::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_refund_order_id")
                            .from(OrderRefund::Table, OrderRefund::OrderId)
                            .to(Orders::Table, Orders::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrderRefund::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum OrderRefund {
    Table,
    Id,
    OrderId,
    RefundAmount,
    Reason,
    Status,
    ProcessedBy,
    CreatedAt,
    UpdatedAt,
}
