use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored enum column holds a value the code does not know.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Failed to parse {field} from stored value '{value}'")]
    ParseStoredValue {
        /// Column the value was read from
        field: &'static str,
        /// The value that failed to parse
        value: String,
    },

    /// A notification row has both or neither recipient column set.
    #[error("Notification {id} does not have exactly one recipient")]
    InvalidRecipient { id: i32 },

    /// Argon2 rejected its input or produced an unreadable hash.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),
}
