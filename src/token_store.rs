//! Token store contract and credential pairing rules.
//!
//! SYSTEM CONTEXT
//! ==============
//! The store is a plain key-value capability (`localStorage` in the browser, a
//! JSON file in the CLI). The helpers here enforce the one invariant the rest
//! of the client relies on: the access and refresh tokens exist together or
//! not at all.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use std::cell::RefCell;
use std::collections::HashMap;

use crate::types::LoginResponse;

/// Token pair persisted by the store.
pub type Credentials = LoginResponse;

/// The two keys the store manages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenName {
    Access,
    Refresh,
}

impl TokenName {
    /// Storage key used on disk / in `localStorage`.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Access => "accessToken",
            Self::Refresh => "refreshToken",
        }
    }
}

/// Persistent key-value area holding the session tokens.
pub trait TokenStore {
    fn get(&self, name: TokenName) -> Option<String>;
    fn set(&self, name: TokenName, value: &str);
    fn remove(&self, name: TokenName);
}

/// Read both tokens. A lone token is treated as corrupt, erased, and reported as absent.
pub fn load_credentials(store: &dyn TokenStore) -> Option<Credentials> {
    match (store.get(TokenName::Access), store.get(TokenName::Refresh)) {
        (Some(access_token), Some(refresh_token)) => Some(Credentials { access_token, refresh_token }),
        (None, None) => None,
        _ => {
            log::warn!("token store held only one of the token pair; clearing it");
            clear_credentials(store);
            None
        }
    }
}

/// Persist both tokens, replacing any previous pair.
pub fn store_credentials(store: &dyn TokenStore, credentials: &Credentials) {
    store.set(TokenName::Access, &credentials.access_token);
    store.set(TokenName::Refresh, &credentials.refresh_token);
}

/// Erase both tokens.
pub fn clear_credentials(store: &dyn TokenStore) {
    store.remove(TokenName::Access);
    store.remove(TokenName::Refresh);
}

/// In-memory store for tests and non-browser renders.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    values: RefCell<HashMap<TokenName, String>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `credentials`.
    #[must_use]
    pub fn with_credentials(credentials: &Credentials) -> Self {
        let store = Self::new();
        store_credentials(&store, credentials);
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self, name: TokenName) -> Option<String> {
        self.values.borrow().get(&name).cloned()
    }

    fn set(&self, name: TokenName, value: &str) {
        self.values.borrow_mut().insert(name, value.to_owned());
    }

    fn remove(&self, name: TokenName) {
        self.values.borrow_mut().remove(&name);
    }
}
