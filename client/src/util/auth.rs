//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages that need a signed-in user apply identical redirect behavior.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;
use crate::util::dialog;

pub const LOGIN_REQUIRED_MESSAGE: &str = "You need to log in first.";

/// Redirect to `/login` whenever no session is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if !auth.with(AuthState::is_authenticated) {
            dialog::alert(LOGIN_REQUIRED_MESSAGE);
            navigate(forum_api::navigation::LOGIN_PATH, NavigateOptions::default());
        }
    });
}
