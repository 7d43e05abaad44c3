//! SeaORM entity models for the fitstudio database.
//!
//! Each module mirrors one table created by the `migration` crate. Enumerated values
//! (statuses, item kinds, recipient kinds) are stored as plain strings and converted
//! to typed enums at the server's repository boundary.

pub mod prelude;

pub mod admin;
pub mod fitness_class;
pub mod membership;
pub mod notification;
pub mod order;
pub mod otp;
pub mod program;
pub mod trainer;
pub mod user;
