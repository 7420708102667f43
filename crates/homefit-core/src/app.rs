//! The library boundary a front end talks to.
//!
//! `App` wires the credential store, preference store and dataset loader
//! together. Every user-scoped call takes the caller's `Session` explicitly.

use tracing::info;

use crate::auth::{Authenticator, Session};
use crate::config::Config;
use crate::error::{HomefitError, Result};
use crate::listings::{filter, DatasetKind, DatasetLoader, FilterOutcome};
use crate::models::{Listing, PreferenceInput, PreferenceRecord, UserAccount, UserId};
use crate::store::{CredentialStore, PreferenceStore};

pub struct App {
    authenticator: Authenticator,
    preferences: PreferenceStore,
    datasets: DatasetLoader,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let datasets = DatasetKind::ALL
            .iter()
            .map(|kind| (*kind, config.dataset_path(*kind)))
            .collect();

        Self {
            authenticator: Authenticator::new(
                CredentialStore::new(config.users_path()),
                config.password_scheme,
            ),
            preferences: PreferenceStore::new(config.preferences_path()),
            datasets: DatasetLoader::new(datasets),
        }
    }

    // ===== Accounts =====

    pub fn register(&self, login: &str, password: &str) -> Result<UserAccount> {
        self.authenticator.register(login, password)
    }

    pub fn authenticate(&self, login: &str, password: &str) -> Result<UserId> {
        self.authenticator.authenticate(login, password)
    }

    /// Authenticate and mark the session logged in.
    /// A failed attempt leaves the session untouched.
    pub fn login(&self, session: &mut Session, login: &str, password: &str) -> Result<UserId> {
        let user_id = self.authenticate(login, password)?;
        session.login(user_id, login);
        Ok(user_id)
    }

    pub fn logout(&self, session: &mut Session) {
        if let Some(user_id) = session.user_id() {
            info!(user_id, "User logged out");
        }
        session.logout();
    }

    // ===== Preferences =====

    pub fn save_preferences(
        &self,
        session: &Session,
        input: PreferenceInput,
    ) -> Result<PreferenceRecord> {
        let user_id = session.require_user()?;
        let record = input.into_record(user_id)?;
        self.preferences.save(record.clone())?;
        info!(user_id, "Preferences saved");
        Ok(record)
    }

    /// The current user's preferences, or `NoPreferencesYet`.
    pub fn preferences(&self, session: &Session) -> Result<PreferenceRecord> {
        let user_id = session.require_user()?;
        self.preferences
            .get(user_id)?
            .ok_or(HomefitError::NoPreferencesYet)
    }

    // ===== Listings =====

    /// Listings of `kind` matching the current user's saved preferences.
    pub fn matches(&self, session: &Session, kind: DatasetKind) -> Result<FilterOutcome> {
        let prefs = self.preferences(session)?;
        let listings = self.datasets.load(kind)?;
        Ok(Self::filter_listings(kind, &listings, &prefs))
    }

    pub fn filter_listings(
        kind: DatasetKind,
        listings: &[Listing],
        prefs: &PreferenceRecord,
    ) -> FilterOutcome {
        filter::filter_listings(kind, listings, prefs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::PasswordScheme;
    use tempfile::TempDir;

    fn app(dir: &TempDir) -> App {
        App::new(&Config {
            data_dir: Some(dir.path().to_path_buf()),
            password_scheme: PasswordScheme::Sha256,
            ..Default::default()
        })
    }

    fn input(preferred_floor: i32) -> PreferenceInput {
        PreferenceInput {
            income: 50_000.0,
            preferred_floor,
            rooms: 2,
            min_area: 50.0,
            max_area: 100.0,
            district: None,
        }
    }

    fn write_datasets(dir: &TempDir) {
        std::fs::write(
            dir.path().join("krisha_cleaned.csv"),
            "Title,Price,Area,Floor,District,Street,Rooms\n\
             NA flat,4000000,55,5,NA,Abaya,2\n\
             Almaly flat,4000000,55,5,Almaly,Zheltoksan,2\n",
        )
        .unwrap();
        std::fs::write(
            dir.path().join("business_data_updated.csv"),
            "Title,Price,Area,Floor,Location,Rooms\n\
             Office,4000000,55,5,Center,2\n\
             Too pricey,9000000,55,5,Center,2\n",
        )
        .unwrap();
    }

    #[test]
    fn test_full_flow() {
        let dir = TempDir::new().unwrap();
        write_datasets(&dir);
        let app = app(&dir);
        let mut session = Session::new();

        let alice = app.register("alice", "pw").unwrap();
        assert!(matches!(
            app.login(&mut session, "alice", "bad"),
            Err(HomefitError::InvalidCredentials)
        ));
        assert!(!session.is_logged_in());

        assert_eq!(app.login(&mut session, "alice", "pw").unwrap(), alice.user_id);
        assert!(matches!(
            app.preferences(&session),
            Err(HomefitError::NoPreferencesYet)
        ));

        app.save_preferences(&session, input(4)).unwrap();

        let apartments = app.matches(&session, DatasetKind::Apartments).unwrap();
        let titles: Vec<_> = apartments.listings().iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, ["NA flat"]);

        let commercial = app.matches(&session, DatasetKind::Commercial).unwrap();
        assert_eq!(commercial.len(), 1);
        assert_eq!(commercial.listings()[0].title, "Office");

        assert!(matches!(
            app.matches(&session, DatasetKind::Houses),
            Err(HomefitError::DatasetNotFound(_))
        ));
    }

    #[test]
    fn test_saving_again_replaces_preferences() {
        let dir = TempDir::new().unwrap();
        write_datasets(&dir);
        let app = app(&dir);
        let mut session = Session::new();
        app.register("alice", "pw").unwrap();
        app.login(&mut session, "alice", "pw").unwrap();

        app.save_preferences(&session, input(4)).unwrap();
        app.save_preferences(&session, input(1)).unwrap();

        assert_eq!(app.preferences(&session).unwrap().preferred_floor, 1);
        let outcome = app.matches(&session, DatasetKind::Commercial).unwrap();
        assert!(outcome.is_empty());
    }

    #[test]
    fn test_user_calls_require_login() {
        let dir = TempDir::new().unwrap();
        let app = app(&dir);
        let session = Session::new();
        assert!(matches!(
            app.save_preferences(&session, input(4)),
            Err(HomefitError::NotLoggedIn)
        ));
        assert!(matches!(
            app.matches(&session, DatasetKind::Houses),
            Err(HomefitError::NotLoggedIn)
        ));
    }

    #[test]
    fn test_preferences_are_per_user() {
        let dir = TempDir::new().unwrap();
        let app = app(&dir);
        app.register("alice", "a").unwrap();
        app.register("bob", "b").unwrap();

        let mut alice = Session::new();
        let mut bob = Session::new();
        app.login(&mut alice, "alice", "a").unwrap();
        app.login(&mut bob, "bob", "b").unwrap();

        app.save_preferences(&alice, input(4)).unwrap();
        assert!(matches!(
            app.preferences(&bob),
            Err(HomefitError::NoPreferencesYet)
        ));

        app.logout(&mut alice);
        assert!(!alice.is_logged_in());
    }
}
