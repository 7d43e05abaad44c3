use crate::{
    model::{catalog::ItemKind, order::OrderStatus},
    server::{data::order::OrderRepository, model::order::CreateOrderParams},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_confirmed_between;
mod get_paginated;
