//! In-memory session mirror.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token store owns the credentials; `Session` is a read-side copy for
//! rendering (header buttons, author checks). Every mutation goes through the
//! store first so the two never disagree about whether a session exists.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::jwt::username_from_token;
use crate::token_store::{Credentials, TokenStore, clear_credentials, load_credentials, store_credentials};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub credentials: Option<Credentials>,
    /// Subject of the access token, when it decodes.
    pub username: Option<String>,
}

impl Session {
    /// Mirror whatever pair the store currently holds.
    #[must_use]
    pub fn restore(store: &dyn TokenStore) -> Self {
        Self::from_credentials(load_credentials(store))
    }

    /// Persist a freshly issued pair and mirror it.
    pub fn set_credentials(&mut self, store: &dyn TokenStore, credentials: Credentials) {
        store_credentials(store, &credentials);
        *self = Self::from_credentials(Some(credentials));
    }

    /// Erase the stored pair and reset the mirror.
    pub fn logout(&mut self, store: &dyn TokenStore) {
        clear_credentials(store);
        *self = Self::default();
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_some()
    }

    /// Whether the signed-in user is `author`.
    #[must_use]
    pub fn is_author(&self, author: &str) -> bool {
        self.username.as_deref() == Some(author)
    }

    fn from_credentials(credentials: Option<Credentials>) -> Self {
        let username = credentials.as_ref().and_then(|c| username_from_token(&c.access_token));
        Self { credentials, username }
    }
}
