use sea_orm_migration::{prelude::*, schema::*};

use super::m20260901_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Order::Table)
                    .if_not_exists()
                    .col(pk_auto(Order::Id))
                    .col(integer(Order::UserId))
                    .col(string(Order::ItemKind))
                    .col(integer(Order::ItemId))
                    .col(string(Order::ItemName))
                    .col(big_integer(Order::Amount))
                    .col(string(Order::Status).default("pending"))
                    .col(timestamp_with_time_zone_null(Order::ConfirmedAt))
                    .col(
                        timestamp_with_time_zone(Order::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Order::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_user_id")
                            .from(Order::Table, Order::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_order_user_id")
                    .table(Order::Table)
                    .col(Order::UserId)
                    .to_owned(),
            )
            .await?;

        // Revenue reports scan confirmed orders by confirmation time
        manager
            .create_index(
                Index::create()
                    .name("idx_order_status_confirmed_at")
                    .table(Order::Table)
                    .col(Order::Status)
                    .col(Order::ConfirmedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_order_status_confirmed_at")
                    .table(Order::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_order_user_id")
                    .table(Order::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Order::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Order {
    Table,
    Id,
    UserId,
    ItemKind,
    ItemId,
    ItemName,
    Amount,
    Status,
    ConfirmedAt,
    CreatedAt,
    UpdatedAt,
}
