//! HTTP request handlers.
//!
//! One module per resource. Each exposes `routes()` returning an `OpenApiRouter`
//! so the router can collect the handlers' `utoipa` documentation; the login and
//! OTP handlers are split out so they can be rate limited separately.

pub mod admin;
pub mod auth;
pub mod fitness_class;
pub mod membership;
pub mod notification;
pub mod order;
pub mod otp;
pub mod program;
pub mod realtime;
pub mod revenue;
pub mod trainer;
