use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string(User::FullName))
                    .col(string_uniq(User::Email))
                    .col(string_null(User::Mobile))
                    .col(string_len(User::Role, 20))
                    .col(boolean(User::IsActive).default(true))
                    .col(string_null(User::ProfileImage))
                    .col(timestamp_null(User::LastLogin))
                    .col(
                        timestamp(User::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    FullName,
    Email,
    Mobile,
    Role,
    IsActive,
    ProfileImage,
    LastLogin,
    CreatedAt,
}
