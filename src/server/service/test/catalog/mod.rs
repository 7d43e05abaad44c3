use crate::{
    model::catalog::CatalogStatus,
    server::{
        error::AppError,
        model::{fitness_class::ClassParams, trainer::TrainerParams},
        service::{
            fitness_class::FitnessClassService, membership::MembershipService,
            trainer::TrainerService,
        },
    },
};
use test_utils::{builder::TestBuilder, factory};

mod fitness_class;
mod visibility;
