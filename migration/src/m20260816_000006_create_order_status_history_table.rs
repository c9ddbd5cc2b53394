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
                    .table(OrderStatusHistory::Table)
                    .if_not_exists()
                    .col(pk_auto(OrderStatusHistory::Id))
                    .col(integer(OrderStatusHistory::OrderId))
                    .col(string_len_null(OrderStatusHistory::OldStatus, 20))
                    .col(string_len(OrderStatusHistory::NewStatus, 20))
                    .col(integer(OrderStatusHistory::ChangedBy))
                    .col(string_len_null(OrderStatusHistory::Notes, 500))
                    .col(
                        timestamp(OrderStatusHistory::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_status_history_order_id")
                            .from(OrderStatusHistory::Table, OrderStatusHistory::OrderId)
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
            .drop_table(Table::drop().table(OrderStatusHistory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum OrderStatusHistory {
    Table,
    Id,
    OrderId,
    OldStatus,
    NewStatus,
    ChangedBy,
    Notes,
    CreatedAt,
}
