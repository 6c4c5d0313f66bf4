//! Session store and route guard.
//!
//! The session is a two-state machine (`Anonymous` / `Authenticated`).
//! A successful [`SessionStore::login`] is the only way in and
//! [`SessionStore::logout`] the only way out; there is no expiry.

pub mod model;
pub mod storage;

pub use model::{guard, Access, Session, SessionState};
pub use storage::{FileStorage, MemoryStorage, SessionStorage, AUTH_FLAG_KEY, USERNAME_KEY};

use tracing::{info, warn};

use crate::error::{ConsoleError, ConsoleResult};

/// The single operator account.
pub const ADMIN_USERNAME: &str = "admin";
const ADMIN_PASSWORD: &str = "password";

/// Username shown in the shell when none is stored.
pub const DEFAULT_USERNAME: &str = "周水波";

/// Session state backed by durable storage.
pub struct SessionStore {
    storage: Box<dyn SessionStorage>,
    fallback_username: String,
}

impl SessionStore {
    pub fn new(storage: Box<dyn SessionStorage>) -> Self {
        Self::with_fallback(storage, DEFAULT_USERNAME)
    }

    /// Store using `fallback_username` when no username is persisted.
    pub fn with_fallback(storage: Box<dyn SessionStorage>, fallback_username: impl Into<String>) -> Self {
        Self {
            storage,
            fallback_username: fallback_username.into(),
        }
    }

    /// Process-local store.
    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStorage::new()))
    }

    /// Check the credentials and persist an authenticated session.
    pub fn login(&mut self, username: &str, password: &str) -> ConsoleResult<Session> {
        if username != ADMIN_USERNAME || password != ADMIN_PASSWORD {
            warn!(username, "Login rejected");
            return Err(ConsoleError::InvalidCredentials);
        }

        // Username first, so a partial write never leaves the flag without it.
        self.storage
            .set_all(&[(USERNAME_KEY, username), (AUTH_FLAG_KEY, "true")])?;
        info!(username, "Operator logged in");
        Ok(Session::authenticated(username))
    }

    /// Clear both session keys. A damaged store is reset rather than reported.
    pub fn logout(&mut self) -> ConsoleResult<()> {
        self.storage.remove_all(&[AUTH_FLAG_KEY, USERNAME_KEY])?;
        info!("Operator logged out");
        Ok(())
    }

    /// Read the persisted session. Unreadable storage counts as logged out.
    pub fn current_session(&self) -> Session {
        let flag = match self.storage.get(AUTH_FLAG_KEY) {
            Ok(flag) => flag,
            Err(e) => {
                warn!(error = %e, "Session storage unreadable, treating as anonymous");
                return Session::anonymous(self.fallback_username.clone());
            }
        };
        let username = self
            .storage
            .get(USERNAME_KEY)
            .ok()
            .flatten()
            .unwrap_or_else(|| self.fallback_username.clone());

        Session {
            authenticated: flag.as_deref() == Some("true"),
            username,
        }
    }

    /// Run the route guard against the current session.
    pub fn guard(&self) -> Access {
        guard(&self.current_session())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_login_success_allows_access() {
        let mut store = SessionStore::in_memory();
        let session = store.login("admin", "password").unwrap();
        assert_eq!(session.state(), SessionState::Authenticated);
        assert_eq!(session.username, "admin");
        assert_eq!(store.guard(), Access::Allow);
        assert_eq!(guard(&store.current_session()), Access::Allow);
    }

    #[test]
    fn test_login_wrong_password_stays_anonymous() {
        let mut store = SessionStore::in_memory();
        let err = store.login("admin", "wrong").unwrap_err();
        assert!(matches!(err, ConsoleError::InvalidCredentials));
        assert_eq!(store.current_session().state(), SessionState::Anonymous);
        assert_eq!(store.guard(), Access::Redirect("/login"));
    }

    #[test]
    fn test_login_wrong_username() {
        let mut store = SessionStore::in_memory();
        assert!(store.login("root", "password").is_err());
        assert!(store.login("Admin", "password").is_err());
    }

    #[test]
    fn test_logout_redirects() {
        let mut store = SessionStore::in_memory();
        store.login("admin", "password").unwrap();
        store.logout().unwrap();
        assert_eq!(store.guard(), Access::Redirect("/login"));
        assert_eq!(store.current_session().username, DEFAULT_USERNAME);
    }

    #[test]
    fn test_logout_when_anonymous_succeeds() {
        let mut store = SessionStore::in_memory();
        assert!(store.logout().is_ok());
    }

    #[test]
    fn test_current_session_defaults() {
        let store = SessionStore::with_fallback(Box::new(MemoryStorage::new()), "operator");
        let session = store.current_session();
        assert!(!session.authenticated);
        assert_eq!(session.username, "operator");
        assert_eq!(session.initial(), "o");
    }

    #[test]
    fn test_flag_must_be_true_literal() {
        let mut storage = MemoryStorage::new();
        storage.set(AUTH_FLAG_KEY, "yes").unwrap();
        let store = SessionStore::new(Box::new(storage));
        assert!(!store.current_session().authenticated);
    }

    #[test]
    fn test_session_survives_restart_with_file_storage() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");

        let mut store = SessionStore::new(Box::new(FileStorage::new(&path)));
        store.login("admin", "password").unwrap();

        let reopened = SessionStore::new(Box::new(FileStorage::new(&path)));
        assert_eq!(reopened.current_session(), Session::authenticated("admin"));
    }

    #[test]
    fn test_corrupt_storage_reads_as_anonymous() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{").unwrap();
        let store = SessionStore::new(Box::new(FileStorage::new(&path)));
        assert_eq!(store.guard(), Access::Redirect("/login"));
    }

    #[test]
    fn test_login_and_logout_recover_corrupt_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{").unwrap();
        let mut store = SessionStore::new(Box::new(FileStorage::new(&path)));

        store.logout().unwrap();
        assert_eq!(store.guard(), Access::Redirect("/login"));

        std::fs::write(&path, "{").unwrap();
        store.login("admin", "password").unwrap();
        assert_eq!(store.current_session(), Session::authenticated("admin"));

        store.logout().unwrap();
        assert!(!store.current_session().authenticated);
    }

    /// Accepts the username but refuses to store the auth flag.
    struct FlagRejectingStorage(MemoryStorage);

    impl SessionStorage for FlagRejectingStorage {
        fn get(&self, key: &str) -> ConsoleResult<Option<String>> {
            self.0.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> ConsoleResult<()> {
            if key == AUTH_FLAG_KEY {
                return Err(std::io::Error::other("disk full").into());
            }
            self.0.set(key, value)
        }

        fn remove(&mut self, key: &str) -> ConsoleResult<()> {
            self.0.remove(key)
        }
    }

    #[test]
    fn test_failed_login_write_leaves_no_authenticated_session() {
        let mut store = SessionStore::new(Box::new(FlagRejectingStorage(MemoryStorage::new())));
        assert!(store.login("admin", "password").is_err());
        assert_eq!(store.guard(), Access::Redirect("/login"));
    }
}
