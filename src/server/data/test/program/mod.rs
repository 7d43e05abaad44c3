use crate::{
    model::catalog::CatalogStatus,
    server::{data::program::ProgramRepository, model::program::ProgramParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod crud;
