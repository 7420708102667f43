//! Authentication: password digests, registration/login, session context.
//!
//! - `password`: SHA-256 and Argon2id digests and verification
//! - `Authenticator`: register and authenticate against the credential table
//! - `Session`: the logged-in flag and user id for one interactive session

pub mod authenticator;
pub mod password;
pub mod session;

pub use authenticator::Authenticator;
pub use password::PasswordScheme;
pub use session::Session;
