use crate::{
    model::auth::RegisterDto,
    server::{
        config::AdminBootstrap,
        error::{auth::AuthError, AppError},
        model::{admin::NewAdminParams, user::RegisterUserParams},
        service::auth::AuthService,
        util::crypto::hash_password,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod bootstrap_admin;
mod login;
mod register;

fn register_params(email: &str, password: &str) -> RegisterUserParams {
    RegisterUserParams::from_dto(RegisterDto {
        name: "Jo Member".to_string(),
        email: email.to_string(),
        password: password.to_string(),
        phone: None,
    })
}
