use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{auth::AuthGuard, session::AuthSession},
    model::notification::Recipient,
};
use test_utils::{builder::TestBuilder, factory};

mod require_user;
