//! Fixed site header with session controls.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::api::client;
use crate::state::auth::AuthState;

/// Brand link plus either login/register links or a logout button.
#[component]
pub fn Header() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        let api = client();
        auth.update(|state| state.logout(api.token_store()));
        navigate("/", NavigateOptions::default());
    };

    view! {
        <header class="site-header">
            <A href="/" attr:class="site-header__brand">
                "Forum"
            </A>
            <nav class="site-header__actions">
                <Show
                    when=move || auth.with(AuthState::is_authenticated)
                    fallback=|| {
                        view! {
                            <A href="/login" attr:class="btn btn--outline">
                                "Log in"
                            </A>
                            <A href="/register" attr:class="btn btn--primary">
                                "Sign up"
                            </A>
                        }
                    }
                >
                    <span class="site-header__user">{move || auth.with(|s| s.username().unwrap_or_default().to_owned())}</span>
                    <button class="btn btn--outline" on:click=on_logout.clone()>
                        "Log out"
                    </button>
                </Show>
            </nav>
        </header>
    }
}
