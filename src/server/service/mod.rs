//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They validate
//! parameters, combine repository calls, convert entity models into domain
//! models, and trigger side effects such as OTP emails and notification pushes.

pub mod auth;
pub mod fitness_class;
pub mod mail;
pub mod membership;
pub mod notification;
pub mod order;
pub mod otp;
pub mod program;
pub mod revenue;
pub mod trainer;

#[cfg(test)]
mod test;
