//! Request and response DTOs shared by the HTTP API.
//!
//! Everything here is plain serde data with `ToSchema` derives for the OpenAPI
//! document. Server-side domain models live in `server::model` and convert to and
//! from these types at the controller boundary.

pub mod api;
pub mod auth;
pub mod catalog;
pub mod fitness_class;
pub mod membership;
pub mod notification;
pub mod order;
pub mod otp;
pub mod program;
pub mod revenue;
pub mod trainer;
