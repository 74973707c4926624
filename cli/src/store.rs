//! Terminal session capabilities: a JSON token file and a logging navigator.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token file plays the role `localStorage` plays in the browser. It holds
//! `{"accessToken": ..., "refreshToken": ...}` and is removed once both keys
//! are gone. I/O failures are logged; the store API has no error channel.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use forum_api::{Navigator, TokenName, TokenStore};

pub const DEFAULT_TOKEN_FILE: &str = ".forum-tokens.json";

/// Reported as the current path so invalidation always signals.
pub const CLI_PATH: &str = "cli";

type TokenMap = BTreeMap<String, String>;

pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read(&self) -> TokenMap {
        match fs::read_to_string(&self.path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!(path = %self.path.display(), error = %e, "ignoring unreadable token file");
                TokenMap::new()
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => TokenMap::new(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to read token file");
                TokenMap::new()
            }
        }
    }

    fn write(&self, tokens: &TokenMap) {
        let result = if tokens.is_empty() {
            match fs::remove_file(&self.path) {
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
                other => other,
            }
        } else {
            serde_json::to_string_pretty(tokens)
                .map_err(std::io::Error::other)
                .and_then(|raw| fs::write(&self.path, raw))
        };
        if let Err(e) = result {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to write token file");
        }
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self, name: TokenName) -> Option<String> {
        self.read().remove(name.key())
    }

    fn set(&self, name: TokenName, value: &str) {
        let mut tokens = self.read();
        tokens.insert(name.key().to_owned(), value.to_owned());
        self.write(&tokens);
    }

    fn remove(&self, name: TokenName) {
        let mut tokens = self.read();
        if tokens.remove(name.key()).is_some() {
            self.write(&tokens);
        }
    }
}

/// Tells the user to log in again instead of navigating anywhere.
pub struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn current_path(&self) -> String {
        CLI_PATH.to_owned()
    }

    fn redirect_to_login(&self) {
        tracing::warn!("session expired; run `forum-cli login` again");
    }
}
