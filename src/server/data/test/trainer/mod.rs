use crate::{
    model::catalog::CatalogStatus,
    server::{data::trainer::TrainerRepository, model::trainer::TrainerParams},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_paginated;

fn params(name: &str, status: CatalogStatus) -> TrainerParams {
    TrainerParams {
        name: name.to_string(),
        email: Some(format!("{}@studio.test", name.to_lowercase())),
        phone: None,
        specialization: "Yoga".to_string(),
        bio: Some("Certified instructor".to_string()),
        status,
    }
}
