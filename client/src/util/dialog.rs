//! Blocking browser dialogs.
//!
//! Outside the browser `alert` logs and `confirm` declines, so native builds
//! never take destructive branches.

pub fn alert(message: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
            return;
        }
    }
    log::info!("alert: {message}");
}

pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            return window.confirm_with_message(message).unwrap_or(false);
        }
    }
    log::info!("confirm declined outside the browser: {message}");
    false
}
