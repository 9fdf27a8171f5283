//! Session gate: a persisted logged-in flag guarding every dashboard view.
//!
//! The gate only knows two states and two transitions. It never sees a
//! password (see [`CredentialVerifier`]) and never reports storage problems:
//! anything that cannot be read back as the logged-in marker means logged out.

use crate::errors::AppResult;
use std::collections::HashMap;

/// Key under which the flag is persisted.
pub const AUTH_KEY: &str = "hospital-auth";
/// Only value read back as logged in.
pub const AUTH_MARKER: &str = "true";

/// Minimal key-value persistence used by the gate.
pub trait KvStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;
    fn remove(&mut self, key: &str) -> AppResult<()>;
}

/// Process-local store, used by tests and when the state database is not
/// available.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

impl<S: KvStore + ?Sized> KvStore for Box<S> {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> AppResult<()> {
        (**self).remove(key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    LoggedOut,
    LoggedIn,
}

pub struct SessionGate<S: KvStore> {
    store: S,
    state: SessionState,
}

impl<S: KvStore> SessionGate<S> {
    /// Restore the state persisted in `store`.
    pub fn open(store: S) -> Self {
        let state = match store.get(AUTH_KEY) {
            Ok(Some(value)) if value == AUTH_MARKER => SessionState::LoggedIn,
            _ => SessionState::LoggedOut,
        };
        Self { store, state }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_authenticated(&self) -> bool {
        self.state == SessionState::LoggedIn
    }

    pub fn login(&mut self) {
        self.state = SessionState::LoggedIn;
        let _ = self.store.set(AUTH_KEY, AUTH_MARKER);
    }

    pub fn logout(&mut self) {
        self.state = SessionState::LoggedOut;
        let _ = self.store.remove(AUTH_KEY);
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give the store back, e.g. to reopen a gate on it.
    pub fn into_store(self) -> S {
        self.store
    }
}

/// Decides whether a login attempt may open the gate.
pub trait CredentialVerifier {
    fn verify(&self, password: &str) -> bool;
}

/// Single shared password taken from the configuration.
pub struct StaticPassword {
    secret: String,
}

impl StaticPassword {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

impl CredentialVerifier for StaticPassword {
    fn verify(&self, password: &str) -> bool {
        !self.secret.is_empty() && password == self.secret
    }
}
