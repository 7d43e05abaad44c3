pub use sea_orm_migration::prelude::*;

mod m20260901_000001_create_user_table;
mod m20260901_000002_create_admin_table;
mod m20260901_000003_create_trainer_table;
mod m20260901_000004_create_fitness_class_table;
mod m20260901_000005_create_program_table;
mod m20260901_000006_create_membership_table;
mod m20260902_000007_create_order_table;
mod m20260902_000008_create_otp_table;
mod m20260903_000009_create_notification_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260901_000001_create_user_table::Migration),
            Box::new(m20260901_000002_create_admin_table::Migration),
            Box::new(m20260901_000003_create_trainer_table::Migration),
            Box::new(m20260901_000004_create_fitness_class_table::Migration),
            Box::new(m20260901_000005_create_program_table::Migration),
            Box::new(m20260901_000006_create_membership_table::Migration),
            Box::new(m20260902_000007_create_order_table::Migration),
            Box::new(m20260902_000008_create_otp_table::Migration),
            Box::new(m20260903_000009_create_notification_table::Migration),
        ]
    }
}
