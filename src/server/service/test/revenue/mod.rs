use crate::{
    model::catalog::ItemKind,
    server::{error::AppError, service::revenue::RevenueService},
};
use chrono::{TimeZone, Utc};
use test_utils::{builder::TestBuilder, factory};

mod monthly;
mod summary;
