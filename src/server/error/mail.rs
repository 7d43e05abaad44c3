use thiserror::Error;

#[derive(Error, Debug)]
pub enum MailError {
    /// A sender or recipient address could not be parsed.
    #[error("Invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),

    /// The message could not be assembled.
    #[error("Failed to build email: {0}")]
    Build(#[from] lettre::error::Error),

    /// The SMTP server refused the message or could not be reached.
    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}
