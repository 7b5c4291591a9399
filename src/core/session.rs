//! Login state: `LoggedOut` or `LoggedIn(principal)`.
//!
//! [`SessionGate::restore`] is the only way to build a gate, so session
//! state always starts from what the store holds.

use crate::core::notify::{Change, Notifier};
use crate::core::users::UserDirectory;
use crate::errors::{AppError, AppResult};
use crate::models::Principal;
use crate::store::{KEY_SESSION, KeyValueStore, load_json, save_json};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    LoggedOut,
    LoggedIn(Principal),
}

#[derive(Debug)]
pub struct SessionGate {
    state: SessionState,
    notifier: Notifier,
}

impl SessionGate {
    /// Read the persisted principal; anything missing or unparsable means
    /// logged out.
    pub fn restore(store: &dyn KeyValueStore) -> Self {
        let state = match load_json::<Principal>(store, KEY_SESSION) {
            Some(p) => SessionState::LoggedIn(p),
            None => SessionState::LoggedOut,
        };

        Self {
            state,
            notifier: Notifier::default(),
        }
    }

    /// Returns `Ok(false)` on a credential mismatch; the current state is
    /// left untouched in that case.
    pub fn login(
        &mut self,
        store: &mut dyn KeyValueStore,
        users: &UserDirectory,
        username: &str,
        password: &str,
    ) -> AppResult<bool> {
        let Some(principal) = users.authenticate(username, password) else {
            store.audit("login_failed", username, "Invalid credentials");
            return Ok(false);
        };

        save_json(store, KEY_SESSION, &principal)?;
        store.audit(
            "login",
            &principal.username,
            &format!("Logged in as {}", principal.role.label()),
        );

        self.state = SessionState::LoggedIn(principal);
        self.notifier.emit(Change::Session);
        Ok(true)
    }

    pub fn logout(&mut self, store: &mut dyn KeyValueStore) -> AppResult<()> {
        store.remove(KEY_SESSION)?;

        if let SessionState::LoggedIn(p) = &self.state {
            store.audit("logout", &p.username, "Logged out");
            self.state = SessionState::LoggedOut;
            self.notifier.emit(Change::Session);
        }
        Ok(())
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn principal(&self) -> Option<&Principal> {
        match &self.state {
            SessionState::LoggedIn(p) => Some(p),
            SessionState::LoggedOut => None,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self.state, SessionState::LoggedIn(_))
    }

    /// The current principal, or [`AppError::NotLoggedIn`].
    pub fn require(&self) -> AppResult<&Principal> {
        self.principal().ok_or(AppError::NotLoggedIn)
    }

    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(Change) + 'static,
    {
        self.notifier.subscribe(listener);
    }
}
