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
                    .table(FitnessClass::Table)
                    .if_not_exists()
                    .col(pk_auto(FitnessClass::Id))
                    .col(string(FitnessClass::Name))
                    .col(text(FitnessClass::Description))
                    .col(integer_null(FitnessClass::TrainerId))
                    .col(string(FitnessClass::Schedule))
                    .col(timestamp_with_time_zone_null(FitnessClass::StartsAt))
                    .col(integer(FitnessClass::DurationMinutes))
                    .col(integer(FitnessClass::Capacity))
                    .col(big_integer(FitnessClass::Price))
                    .col(string(FitnessClass::Status).default("active"))
                    .col(
                        timestamp_with_time_zone(FitnessClass::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(FitnessClass::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_fitness_class_trainer_id")
                            .from(FitnessClass::Table, FitnessClass::TrainerId)
                            .to(Trainer::Table, Trainer::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_fitness_class_status")
                    .table(FitnessClass::Table)
                    .col(FitnessClass::Status)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_fitness_class_status")
                    .table(FitnessClass::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FitnessClass::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FitnessClass {
    Table,
    Id,
    Name,
    Description,
    TrainerId,
    Schedule,
    StartsAt,
    DurationMinutes,
    Capacity,
    Price,
    Status,
    CreatedAt,
    UpdatedAt,
}
