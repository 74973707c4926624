//! User-facing error presentation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The pipeline has already classified the failure and, when required,
//! invalidated the session. This module only decides what (if anything) the
//! page shows. It also hosts the window-level filter that hides errors raised
//! by browser extensions talking to their background pages.

#[cfg(test)]
#[path = "errors_test.rs"]
mod errors_test;

use forum_api::ApiError;

pub const MISSING_POST_MESSAGE: &str = "This post does not exist.";
pub const AUTHOR_ONLY_MESSAGE: &str = "Only the author can do that.";

const EXTENSION_NOISE_MARKERS: &[&str] = &[
    "message channel closed",
    "Extension context invalidated",
    "A listener indicated an asynchronous response",
];

/// Message to show for `err`, or `None` when it should stay silent.
///
/// `public_read` marks post reads, whose 403s are expected for anonymous
/// visitors and never surface.
pub fn present_error(err: &ApiError, public_read: bool) -> Option<String> {
    if err.is_cancelled() {
        return None;
    }
    if public_read && matches!(err, ApiError::Forbidden { .. }) {
        return None;
    }
    if err.mentions_missing_resource() {
        return Some(MISSING_POST_MESSAGE.to_owned());
    }
    if err.mentions_permission() {
        return Some(AUTHOR_ONLY_MESSAGE.to_owned());
    }
    Some(err.message().to_owned())
}

/// Whether a window error message comes from an extension message channel.
pub fn is_extension_noise(message: &str) -> bool {
    EXTENSION_NOISE_MARKERS.iter().any(|m| message.contains(m))
}

/// Swallow extension noise on `error` and `unhandledrejection`.
#[cfg(feature = "csr")]
pub fn install_noise_filter() {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(window) = web_sys::window() else {
        return;
    };

    let on_error = Closure::<dyn FnMut(web_sys::ErrorEvent)>::new(|ev: web_sys::ErrorEvent| {
        if is_extension_noise(&ev.message()) {
            ev.prevent_default();
            ev.stop_immediate_propagation();
        }
    });
    let on_rejection = Closure::<dyn FnMut(web_sys::PromiseRejectionEvent)>::new(|ev: web_sys::PromiseRejectionEvent| {
        let reason = ev.reason();
        let message = reason
            .as_string()
            .or_else(|| reason.dyn_ref::<js_sys::Error>().map(|e| String::from(e.message())))
            .unwrap_or_default();
        if is_extension_noise(&message) {
            ev.prevent_default();
            ev.stop_immediate_propagation();
        }
    });

    if window
        .add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref())
        .is_err()
        || window
            .add_event_listener_with_callback("unhandledrejection", on_rejection.as_ref().unchecked_ref())
            .is_err()
    {
        log::warn!("failed to install extension noise filter");
    }

    // Listeners live for the page lifetime.
    on_error.forget();
    on_rejection.forget();
}
