use super::*;

fn creds() -> Credentials {
    Credentials { access_token: "access-1".to_owned(), refresh_token: "refresh-1".to_owned() }
}

#[test]
fn token_names_map_to_storage_keys() {
    assert_eq!(TokenName::Access.key(), "accessToken");
    assert_eq!(TokenName::Refresh.key(), "refreshToken");
}

#[test]
fn empty_store_loads_nothing() {
    let store = MemoryTokenStore::new();
    assert_eq!(load_credentials(&store), None);
}

#[test]
fn stored_pair_loads_back() {
    let store = MemoryTokenStore::new();
    store_credentials(&store, &creds());
    assert_eq!(load_credentials(&store), Some(creds()));
}

#[test]
fn storing_again_replaces_both_tokens() {
    let store = MemoryTokenStore::with_credentials(&creds());
    let next = Credentials { access_token: "access-2".to_owned(), refresh_token: "refresh-2".to_owned() };
    store_credentials(&store, &next);
    assert_eq!(load_credentials(&store), Some(next));
}

#[test]
fn clear_removes_both_tokens() {
    let store = MemoryTokenStore::with_credentials(&creds());
    clear_credentials(&store);
    assert_eq!(store.get(TokenName::Access), None);
    assert_eq!(store.get(TokenName::Refresh), None);
}

#[test]
fn lone_access_token_is_erased_on_load() {
    let store = MemoryTokenStore::new();
    store.set(TokenName::Access, "orphan");
    assert_eq!(load_credentials(&store), None);
    assert_eq!(store.get(TokenName::Access), None);
}

#[test]
fn lone_refresh_token_is_erased_on_load() {
    let store = MemoryTokenStore::new();
    store.set(TokenName::Refresh, "orphan");
    assert_eq!(load_credentials(&store), None);
    assert_eq!(store.get(TokenName::Refresh), None);
}
