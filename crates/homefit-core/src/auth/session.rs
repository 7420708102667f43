use crate::error::{HomefitError, Result};
use crate::models::UserId;

/// Logged-in state for one interactive session.
///
/// The front end owns this and passes it to every `App` call; nothing in the
/// library keeps a global notion of the current user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    user_id: Option<UserId>,
    login: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn login(&mut self, user_id: UserId, login: impl Into<String>) {
        self.user_id = Some(user_id);
        self.login = Some(login.into());
    }

    pub fn logout(&mut self) {
        self.user_id = None;
        self.login = None;
    }

    pub fn is_logged_in(&self) -> bool {
        self.user_id.is_some()
    }

    pub fn user_id(&self) -> Option<UserId> {
        self.user_id
    }

    /// Login name of the current user, if any
    pub fn login_name(&self) -> Option<&str> {
        self.login.as_deref()
    }

    /// The current user id, or `NotLoggedIn`.
    pub fn require_user(&self) -> Result<UserId> {
        self.user_id.ok_or(HomefitError::NotLoggedIn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_logged_out() {
        let session = Session::new();
        assert!(!session.is_logged_in());
        assert_eq!(session.user_id(), None);
        assert!(matches!(session.require_user(), Err(HomefitError::NotLoggedIn)));
    }

    #[test]
    fn test_login_then_logout() {
        let mut session = Session::new();
        session.login(3, "alice");
        assert!(session.is_logged_in());
        assert_eq!(session.require_user().unwrap(), 3);
        assert_eq!(session.login_name(), Some("alice"));

        session.logout();
        assert_eq!(session, Session::default());
    }
}
