use crate::server::{data::admin::AdminRepository, model::admin::CreateAdminParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod admin_exists;
mod create;
mod get_all_ids;
