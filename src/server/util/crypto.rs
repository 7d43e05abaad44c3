//! Password hashing and OTP code generation.

use argon2::password_hash::{rand_core::OsRng, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, PasswordHash, Version};
use rand::Rng;

use crate::server::error::{internal::InternalError, AppError};

fn argon2() -> Result<Argon2<'static>, AppError> {
    let params = Params::new(
        32_768, // 32 MB
        3,      // iterations
        1,      // parallelism
        None,
    )
    .map_err(|e| InternalError::PasswordHash(e.to_string()))?;

    Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
}

/// Hashes a password with Argon2id and a fresh random salt.
///
/// # Returns
/// - `Ok(String)` - PHC-formatted hash suitable for storage
/// - `Err(AppError::InternalErr(PasswordHash))` - Argon2 rejected the input
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = argon2()?
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| InternalError::PasswordHash(e.to_string()))?
        .to_string();

    Ok(hash)
}

/// Checks a password against a stored hash.
///
/// A hash that cannot be parsed counts as a mismatch so an account with a
/// corrupted or placeholder hash simply cannot log in.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let Ok(parsed_hash) = PasswordHash::new(hash) else {
        tracing::warn!("Stored password hash is not in PHC format");
        return Ok(false);
    };

    match argon2()?.verify_password(password.as_bytes(), &parsed_hash) {
        Ok(_) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(InternalError::PasswordHash(e.to_string()).into()),
    }
}

/// Generates a 6-digit numeric OTP code.
pub fn generate_otp_code() -> String {
    rand::rng().random_range(100_000..=999_999).to_string()
}
