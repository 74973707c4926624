//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards, the header, and author-only controls. The state is a
//! mirror of the token store: every login/logout goes through
//! [`forum_api::Session`], which writes the store first.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use forum_api::{Credentials, Session, TokenStore};

/// Authentication state provided as `RwSignal<AuthState>` context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub session: Session,
}

impl AuthState {
    /// State mirroring whatever pair the store holds at startup.
    pub fn restored(store: &dyn TokenStore) -> Self {
        Self { session: Session::restore(store) }
    }

    pub fn login(&mut self, store: &dyn TokenStore, credentials: Credentials) {
        self.session.set_credentials(store, credentials);
    }

    pub fn logout(&mut self, store: &dyn TokenStore) {
        self.session.logout(store);
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    pub fn username(&self) -> Option<&str> {
        self.session.username.as_deref()
    }

    /// Whether the signed-in user wrote a post by `author`.
    pub fn is_author(&self, author: &str) -> bool {
        self.session.is_author(author)
    }
}
