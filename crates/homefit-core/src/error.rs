use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the core library.
///
/// Every variant is recoverable from the front end's point of view: it is
/// shown to the user and the session carries on.
#[derive(Error, Debug)]
pub enum HomefitError {
    #[error("Login already exists: {0}")]
    DuplicateLogin(String),

    /// Unknown login and wrong password are deliberately indistinguishable.
    #[error("Invalid login or password")]
    InvalidCredentials,

    #[error("No preferences saved yet")]
    NoPreferencesYet,

    #[error("Not logged in")]
    NotLoggedIn,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Dataset file not found: {}", .0.display())]
    DatasetNotFound(PathBuf),

    #[error("Storage error: {0}")]
    Io(#[from] std::io::Error),

    /// `csv::Error` already describes itself as a CSV error.
    #[error("{0}")]
    Csv(#[from] csv::Error),

    #[error("Password hashing failed: {0}")]
    PasswordHash(String),
}

pub type Result<T> = std::result::Result<T, HomefitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_error_message_not_double_prefixed() {
        let data = "A,B\n1,2\n3\n";
        let err = csv::Reader::from_reader(data.as_bytes())
            .records()
            .collect::<std::result::Result<Vec<_>, _>>()
            .unwrap_err();
        let expected = err.to_string();
        let message = HomefitError::from(err).to_string();
        assert_eq!(message, expected);
        assert_eq!(message.matches("CSV error").count(), 1);
    }
}
