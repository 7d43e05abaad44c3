use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Trainer::Table)
                    .if_not_exists()
                    .col(pk_auto(Trainer::Id))
                    .col(string(Trainer::Name))
                    .col(string_null(Trainer::Email))
                    .col(string_null(Trainer::Phone))
                    .col(string(Trainer::Specialization))
                    .col(text_null(Trainer::Bio))
                    .col(string(Trainer::Status).default("active"))
                    .col(
                        timestamp_with_time_zone(Trainer::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Trainer::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Trainer::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Trainer {
    Table,
    Id,
    Name,
    Email,
    Phone,
    Specialization,
    Bio,
    Status,
    CreatedAt,
    UpdatedAt,
}
