use std::path::PathBuf;

use tracing::debug;

use crate::error::{HomefitError, Result};
use crate::models::{UserAccount, UserId};
use crate::store::CsvTable;

/// Credential table (`UserID,Login,PasswordHash`).
///
/// Rows are only ever appended. Logins are compared case-sensitively.
pub struct CredentialStore {
    table: CsvTable<UserAccount>,
}

impl CredentialStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            table: CsvTable::new(path, &UserAccount::HEADERS),
        }
    }

    pub fn accounts(&self) -> Result<Vec<UserAccount>> {
        self.table.load()
    }

    pub fn find_by_login(&self, login: &str) -> Result<Option<UserAccount>> {
        Ok(self.accounts()?.into_iter().find(|a| a.login == login))
    }

    pub fn login_exists(&self, login: &str) -> Result<bool> {
        Ok(self.find_by_login(login)?.is_some())
    }

    /// Append a new account with the next free id.
    ///
    /// Fails with `DuplicateLogin` if the login is already taken.
    pub fn insert(&self, login: &str, password_hash: String) -> Result<UserAccount> {
        let mut accounts = self.accounts()?;
        if accounts.iter().any(|a| a.login == login) {
            return Err(HomefitError::DuplicateLogin(login.to_string()));
        }

        let account = UserAccount {
            user_id: next_user_id(&accounts),
            login: login.to_string(),
            password_hash,
        };
        accounts.push(account.clone());
        self.table.save(&accounts)?;

        debug!(user_id = account.user_id, "Appended credential row");
        Ok(account)
    }
}

/// Max existing id + 1, or 1 for an empty table.
fn next_user_id(accounts: &[UserAccount]) -> UserId {
    accounts.iter().map(|a| a.user_id).max().map_or(1, |max| max + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store(dir: &TempDir) -> CredentialStore {
        CredentialStore::new(dir.path().join("users.csv"))
    }

    #[test]
    fn test_first_user_gets_id_one() {
        let dir = TempDir::new().unwrap();
        let account = store(&dir).insert("alice", "h1".to_string()).unwrap();
        assert_eq!(account.user_id, 1);
    }

    #[test]
    fn test_ids_follow_max_not_count() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("users.csv"),
            "UserID,Login,PasswordHash\n4,alice,h1\n2,bob,h2\n",
        )
        .unwrap();
        let account = store(&dir).insert("carol", "h3".to_string()).unwrap();
        assert_eq!(account.user_id, 5);
    }

    #[test]
    fn test_duplicate_login_rejected_and_count_unchanged() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        store.insert("alice", "h1".to_string()).unwrap();
        let err = store.insert("alice", "h2".to_string()).unwrap_err();
        assert!(matches!(err, HomefitError::DuplicateLogin(ref l) if l == "alice"));
        assert_eq!(store.accounts().unwrap().len(), 1);
    }

    #[test]
    fn test_login_match_is_case_sensitive() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        store.insert("alice", "h1".to_string()).unwrap();
        assert!(store.login_exists("alice").unwrap());
        assert!(!store.login_exists("Alice").unwrap());
        store.insert("Alice", "h2".to_string()).unwrap();
        assert_eq!(store.accounts().unwrap().len(), 2);
    }

    #[test]
    fn test_written_file_layout() {
        let dir = TempDir::new().unwrap();
        store(&dir).insert("alice", "abc123".to_string()).unwrap();
        let contents = std::fs::read_to_string(dir.path().join("users.csv")).unwrap();
        assert_eq!(contents, "UserID,Login,PasswordHash\n1,alice,abc123\n");
    }
}
