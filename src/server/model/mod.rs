//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the service boundary and transformed to DTOs at the controller boundary.
//! Stored enum columns are parsed here, so a bad value in the database surfaces as an
//! internal error instead of leaking into responses.

pub mod admin;
pub mod catalog;
pub mod fitness_class;
pub mod membership;
pub mod notification;
pub mod order;
pub mod otp;
pub mod program;
pub mod revenue;
pub mod trainer;
pub mod user;
