use crate::{
    model::catalog::CatalogStatus,
    server::{data::membership::MembershipRepository, model::membership::MembershipParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
