//! Account registration page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use forum_api::types::RegisterRequest;

use crate::util::validate::{FieldErrors, NICKNAME_MAX_CHARS, validate_register};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let navigate = use_navigate();
    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let nickname = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let errors = RwSignal::new(FieldErrors::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = RegisterRequest {
            username: username.get(),
            email: email.get(),
            nickname: nickname.get(),
            password: password.get(),
        };
        let found = validate_register(&request.username, &request.email, &request.nickname, &request.password);
        let valid = found.is_empty();
        errors.set(found);
        if !valid {
            return;
        }
        busy.set(true);
        submit_register(request, navigate.clone(), busy);
    };

    let field_error = move |field: &'static str| move || errors.with(|e| e.get(field).copied().unwrap_or_default());
    let text_field = move |id: &'static str, label: &'static str, kind: &'static str, value: RwSignal<String>, max: Option<usize>| {
        view! {
            <label for=id>{label}</label>
            <input
                id=id
                class="auth-input"
                type=kind
                maxlength=max.map(|m| m.to_string())
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <p class="auth-error">{field_error(id)}</p>
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign up"</h1>
                <form class="auth-form" on:submit=on_submit>
                    {text_field("username", "Username", "text", username, None)}
                    {text_field("email", "Email", "email", email, None)}
                    {text_field("nickname", "Nickname (max 15 characters)", "text", nickname, Some(NICKNAME_MAX_CHARS))}
                    {text_field("password", "Password", "password", password, None)}
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing up..." } else { "Sign up" }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Already have an account? "
                    <A href="/login">"Log in"</A>
                </p>
            </div>
        </div>
    }
}

#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
fn submit_register<F>(request: RegisterRequest, navigate: F, busy: RwSignal<bool>)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let api = crate::net::api::client();
        match forum_api::AuthApi::new(&api).register(&request).await {
            Ok(envelope) => {
                if envelope.success {
                    crate::util::dialog::alert("Registration complete. Please log in.");
                    navigate(forum_api::navigation::LOGIN_PATH, NavigateOptions::default());
                }
            }
            Err(e) => {
                if let Some(message) = crate::util::errors::present_error(&e, false) {
                    crate::util::dialog::alert(&message);
                }
            }
        }
        busy.set(false);
    });

    #[cfg(not(feature = "csr"))]
    busy.set(false);
}
