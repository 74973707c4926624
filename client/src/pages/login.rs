//! Username + password login page.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use forum_api::types::LoginRequest;

use crate::state::auth::AuthState;
use crate::util::validate::{FieldErrors, validate_login};

const CREDENTIAL_MARKERS: &[&str] = &["아이디", "비밀번호", "username", "password"];

/// Whether a backend login failure concerns the credentials themselves,
/// in which case it renders under the username field instead of an alert.
pub fn is_credential_error(message: &str) -> bool {
    let lowered = message.to_lowercase();
    CREDENTIAL_MARKERS.iter().any(|m| lowered.contains(m))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let server_error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = LoginRequest { username: username.get(), password: password.get() };
        let found = validate_login(&request.username, &request.password);
        let valid = found.is_empty();
        errors.set(found);
        server_error.set(None);
        if !valid {
            return;
        }
        busy.set(true);
        submit_login(request, auth, navigate.clone(), server_error, busy);
    };

    let field_error = move |field: &'static str| move || errors.with(|e| e.get(field).copied().unwrap_or_default());

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Log in"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <label for="username">"Username"</label>
                    <input
                        id="username"
                        class="auth-input"
                        placeholder="Enter your username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <p class="auth-error">{field_error("username")} {move || server_error.get().unwrap_or_default()}</p>

                    <label for="password">"Password"</label>
                    <input
                        id="password"
                        class="auth-input"
                        type="password"
                        placeholder="Enter your password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <p class="auth-error">{field_error("password")}</p>

                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Logging in..." } else { "Log in" }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "No account yet? "
                    <A href="/register">"Sign up"</A>
                </p>
            </div>
        </div>
    }
}

#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
fn submit_login<F>(
    request: LoginRequest,
    auth: RwSignal<AuthState>,
    navigate: F,
    server_error: RwSignal<Option<String>>,
    busy: RwSignal<bool>,
) where
    F: Fn(&str, NavigateOptions) + 'static,
{
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let api = crate::net::api::client();
        match forum_api::AuthApi::new(&api).login(&request).await {
            Ok(envelope) => {
                if envelope.success {
                    if let Some(credentials) = envelope.into_data() {
                        auth.update(|s| s.login(api.token_store(), credentials));
                        navigate("/", NavigateOptions::default());
                    }
                }
            }
            Err(e) => {
                let message = crate::util::errors::present_error(&e, false).unwrap_or_default();
                if is_credential_error(&message) {
                    server_error.set(Some(message));
                } else if !message.is_empty() {
                    crate::util::dialog::alert(&message);
                }
            }
        }
        busy.set(false);
    });

    #[cfg(not(feature = "csr"))]
    busy.set(false);
}
