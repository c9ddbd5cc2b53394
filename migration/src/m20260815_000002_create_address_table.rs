use sea_orm_migration::{prelude::*, schema::*};

use super::m20260815_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Address::Table)
                    .if_not_exists()
                    .col(pk_auto(Address::Id))
                    .col(integer(Address::UserId))
                    .col(string(Address::FullName))
                    .col(string(Address::Mobile))
                    .col(string(Address::AddressLine1))
                    .col(string_null(Address::AddressLine2))
                    .col(string(Address::City))
                    .col(string(Address::State))
                    .col(string(Address::ZipCode))
                    .col(string(Address::Country))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_address_user_id")
                            .from(Address::Table, Address::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Address::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Address {
    Table,
    Id,
    UserId,
    FullName,
    Mobile,
    AddressLine1,
    AddressLine2,
    City,
    State,
    ZipCode,
    Country,
}
