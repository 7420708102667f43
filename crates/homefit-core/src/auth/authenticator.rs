use tracing::{info, warn};

use crate::auth::password::{self, PasswordScheme};
use crate::error::{HomefitError, Result};
use crate::models::{UserAccount, UserId};
use crate::store::CredentialStore;

/// Registers and authenticates users against the credential table.
pub struct Authenticator {
    store: CredentialStore,
    scheme: PasswordScheme,
}

impl Authenticator {
    pub fn new(store: CredentialStore, scheme: PasswordScheme) -> Self {
        Self { store, scheme }
    }

    /// Create an account. Logins are unique and compared exactly.
    pub fn register(&self, login: &str, password: &str) -> Result<UserAccount> {
        if login.trim().is_empty() {
            return Err(HomefitError::InvalidInput("login must not be blank".to_string()));
        }

        // Checked before hashing so a taken login costs no Argon2 work.
        if self.store.login_exists(login)? {
            return Err(HomefitError::DuplicateLogin(login.to_string()));
        }

        let digest = password::hash_with(self.scheme, password)?;
        let account = self.store.insert(login, digest)?;
        info!(user_id = account.user_id, scheme = ?self.scheme, "Registered user");
        Ok(account)
    }

    /// Return the user id for a matching login/password pair.
    ///
    /// Unknown login and wrong password both yield `InvalidCredentials`.
    pub fn authenticate(&self, login: &str, password: &str) -> Result<UserId> {
        let account = self
            .store
            .accounts()?
            .into_iter()
            .find(|a| a.login == login && password::verify(password, &a.password_hash));

        match account {
            Some(account) => {
                info!(user_id = account.user_id, "User authenticated");
                Ok(account.user_id)
            }
            None => {
                warn!("Authentication failed");
                Err(HomefitError::InvalidCredentials)
            }
        }
    }
}
