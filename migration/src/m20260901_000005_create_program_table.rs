use sea_orm_migration::{prelude::*, schema::*};

use super::m20260901_000003_create_trainer_table::Trainer;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Program::Table)
                    .if_not_exists()
                    .col(pk_auto(Program::Id))
                    .col(string(Program::Name))
                    .col(text(Program::Description))
                    .col(integer_null(Program::TrainerId))
                    .col(integer(Program::DurationWeeks))
                    .col(big_integer(Program::Price))
                    .col(string(Program::Status).default("active"))
                    .col(
                        timestamp_with_time_zone(Program::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Program::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_program_trainer_id")
                            .from(Program::Table, Program::TrainerId)
                            .to(Trainer::Table, Trainer::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Program::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Program {
    Table,
    Id,
    Name,
    Description,
    TrainerId,
    DurationWeeks,
    Price,
    Status,
    CreatedAt,
    UpdatedAt,
}
