use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{HomefitError, Result};

/// Prefix of every Argon2 PHC string.
const ARGON2_PREFIX: &str = "$argon2";

/// How new password hashes are produced.
///
/// `Sha256` is the unsalted hex digest older credential files contain. It is
/// fast and unsalted, so identical passwords share a digest; prefer `Argon2`.
/// Verification accepts either format regardless of this setting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordScheme {
    Sha256,
    #[default]
    Argon2,
}

/// Deterministic SHA-256 hex digest (64 lowercase hex chars).
pub fn hash(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

/// Hash a password for storage using `scheme`.
pub fn hash_with(scheme: PasswordScheme, password: &str) -> Result<String> {
    match scheme {
        PasswordScheme::Sha256 => Ok(hash(password)),
        PasswordScheme::Argon2 => {
            let salt = SaltString::generate(&mut OsRng);
            let phc = Argon2::default()
                .hash_password(password.as_bytes(), &salt)
                .map_err(|e| HomefitError::PasswordHash(e.to_string()))?;
            Ok(phc.to_string())
        }
    }
}

/// Check `password` against a stored hash of either format.
pub fn verify(password: &str, stored: &str) -> bool {
    if stored.starts_with(ARGON2_PREFIX) {
        match PasswordHash::new(stored) {
            Ok(parsed) => Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    } else {
        hash(password) == stored
    }
}
