//! Navigation capability used for forced logout.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";

/// Minimal view-routing capability the pipeline needs.
pub trait Navigator {
    /// Path of the view currently shown, e.g. `/posts/3`.
    fn current_path(&self) -> String;
    /// Leave the current view for the login view.
    fn redirect_to_login(&self);
}

/// Whether `path` is the login or registration view, where a forced-logout
/// redirect would be pointless.
#[must_use]
pub fn is_auth_view(path: &str) -> bool {
    path.contains(LOGIN_PATH) || path.contains(REGISTER_PATH)
}
