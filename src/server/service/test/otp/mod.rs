use crate::server::{
    data::otp::OtpRepository,
    error::{otp::OtpError, AppError},
    service::{mail::Mailer, otp::OtpService},
};
use chrono::{Duration, Utc};
use futures_util::future::join_all;
use entity::prelude::Otp;
use test_utils::{builder::TestBuilder, factory};

mod send;
