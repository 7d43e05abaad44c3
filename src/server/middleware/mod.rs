//! Request-scoped authentication helpers.
//!
//! `AuthSession` reads and writes the login state in the session cookie;
//! `AuthGuard` turns that state into a loaded account for handlers.

pub mod auth;
pub mod session;

#[cfg(test)]
mod test;
