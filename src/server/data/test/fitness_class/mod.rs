use crate::{
    model::catalog::CatalogStatus,
    server::{data::fitness_class::FitnessClassRepository, model::fitness_class::ClassParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};


fn params(trainer_id: Option<i32>) -> ClassParams {
    ClassParams {
        name: "Morning Flow".to_string(),
        description: "Gentle vinyasa".to_string(),
        trainer_id,
        schedule: "Tue/Thu 07:00".to_string(),
        starts_at: None,
        duration_minutes: 60,
        capacity: 12,
        price: 1_800,
        status: CatalogStatus::Active,
    }
}
