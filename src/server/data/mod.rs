//! Database repository layer for all domain entities.
//!
//! One repository struct per table, each borrowing the connection for the length of
//! a request. Repositories speak `DbErr` and return entity models (or domain models
//! whose conversion cannot fail); stored enum parsing happens in the service layer.

pub mod admin;
pub mod fitness_class;
pub mod membership;
pub mod notification;
pub mod order;
pub mod otp;
pub mod program;
pub mod trainer;
pub mod user;

#[cfg(test)]
mod test;
