use super::*;
use crate::fingerprint::fingerprint;
use crate::transport::Method;

fn fp(path: &str) -> Fingerprint {
    let none: [(&str, &str); 0] = [];
    fingerprint(Method::Get, path, &none)
}

#[test]
fn register_on_empty_registry_proceeds() {
    let mut reg = InFlightRegistry::new();
    let token = reg.register(fp("/api/post/1"));
    assert_eq!(token.dispatch(), Dispatch::Proceed);
    assert!(!token.is_cancelled());
    assert!(reg.contains(&fp("/api/post/1")));
    assert_eq!(reg.len(), 1);
}

#[test]
fn register_same_fingerprint_cancels_and_replaces_previous() {
    let mut reg = InFlightRegistry::new();
    let first = reg.register(fp("/api/post"));
    let second = reg.register(fp("/api/post"));

    assert!(first.is_cancelled());
    assert!(!second.is_cancelled());
    assert_eq!(second.dispatch(), Dispatch::Supersede);
    assert_eq!(reg.len(), 1);
}

#[test]
fn distinct_fingerprints_coexist() {
    let mut reg = InFlightRegistry::new();
    let a = reg.register(fp("/api/post/1"));
    let b = reg.register(fp("/api/post/2"));
    assert!(!a.is_cancelled());
    assert!(!b.is_cancelled());
    assert_eq!(reg.len(), 2);
}

#[test]
fn release_is_idempotent() {
    let mut reg = InFlightRegistry::new();
    let _token = reg.register(fp("/api/post"));
    reg.release(&fp("/api/post"));
    reg.release(&fp("/api/post"));
    reg.release(&fp("/never/registered"));
    assert!(reg.is_empty());
}

#[test]
fn release_ticket_of_superseded_request_keeps_newer_entry() {
    let mut reg = InFlightRegistry::new();
    let old = reg.register(fp("/api/post"));
    let new = reg.register(fp("/api/post"));

    assert!(!reg.release_ticket(old.fingerprint(), old.ticket()));
    assert!(reg.contains(&fp("/api/post")));

    assert!(reg.release_ticket(new.fingerprint(), new.ticket()));
    assert!(reg.is_empty());
}

#[test]
fn tickets_are_unique_per_registration() {
    let mut reg = InFlightRegistry::new();
    let a = reg.register(fp("/a"));
    let b = reg.register(fp("/b"));
    let c = reg.register(fp("/a"));
    assert_ne!(a.ticket(), b.ticket());
    assert_ne!(a.ticket(), c.ticket());
    assert_ne!(b.ticket(), c.ticket());
}

#[test]
fn at_most_one_entry_per_fingerprint_after_mixed_sequence() {
    let mut reg = InFlightRegistry::new();
    let mut tokens = Vec::new();
    for i in 0..20 {
        let path = if i % 3 == 0 { "/x" } else { "/y" };
        tokens.push(reg.register(fp(path)));
        if i % 5 == 0 {
            reg.release(&fp("/x"));
        }
    }
    assert!(reg.len() <= 2);
    let live = tokens.iter().filter(|t| !t.is_cancelled()).count();
    // Released entries are not aborted, so live tokens are at least the registered ones.
    assert!(live >= reg.len());
    let live_y = tokens.iter().filter(|t| t.fingerprint() == &fp("/y") && !t.is_cancelled()).count();
    assert_eq!(live_y, 1);
}

#[test]
fn cancel_all_aborts_everything() {
    let mut reg = InFlightRegistry::new();
    let a = reg.register(fp("/a"));
    let b = reg.register(fp("/b"));
    reg.cancel_all();
    assert!(a.is_cancelled());
    assert!(b.is_cancelled());
    assert!(reg.is_empty());
}

#[test]
fn signal_reflects_token_state() {
    let mut reg = InFlightRegistry::new();
    let token = reg.register(fp("/a"));
    let signal = token.signal();
    assert!(!signal.is_cancelled());
    let _newer = reg.register(fp("/a"));
    assert!(signal.is_cancelled());
}

#[tokio::test]
async fn guarded_future_resolves_aborted_when_superseded() {
    let mut reg = InFlightRegistry::new();
    let token = reg.register(fp("/a"));
    let guarded = token.guard(async { 5 });
    let _newer = reg.register(fp("/a"));
    assert!(guarded.await.is_err());
}

#[tokio::test]
async fn guarded_future_completes_when_not_superseded() {
    let mut reg = InFlightRegistry::new();
    let token = reg.register(fp("/a"));
    assert_eq!(token.guard(async { 5 }).await, Ok(5));
}
