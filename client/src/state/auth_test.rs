use super::*;
use forum_api::MemoryTokenStore;
use forum_api::token_store::load_credentials;

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_is_logged_out() {
    let state = AuthState::default();
    assert!(!state.is_authenticated());
    assert_eq!(state.username(), None);
}

// =============================================================
// Login / logout mirror the store
// =============================================================

#[test]
fn login_writes_store_and_marks_authenticated() {
    let store = MemoryTokenStore::new();
    let mut state = AuthState::default();
    state.login(&store, Credentials { access_token: "opaque".to_owned(), refresh_token: "r".to_owned() });

    assert!(state.is_authenticated());
    assert!(load_credentials(&store).is_some());
}

#[test]
fn logout_clears_store() {
    let store = MemoryTokenStore::with_credentials(&Credentials {
        access_token: "opaque".to_owned(),
        refresh_token: "r".to_owned(),
    });
    let mut state = AuthState::restored(&store);
    assert!(state.is_authenticated());

    state.logout(&store);

    assert!(!state.is_authenticated());
    assert!(load_credentials(&store).is_none());
}

#[test]
fn opaque_token_is_never_an_author() {
    let store = MemoryTokenStore::with_credentials(&Credentials {
        access_token: "opaque".to_owned(),
        refresh_token: "r".to_owned(),
    });
    let state = AuthState::restored(&store);
    assert!(!state.is_author("kim"));
}
