//! New post page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::post_form::PostForm;
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

/// Requires a session; returns home after publishing.
#[component]
pub fn PostNewPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    install_unauth_redirect(auth, navigate.clone());

    let on_success = Callback::new(move |()| navigate("/", NavigateOptions::default()));

    view! {
        <Show when=move || auth.with(AuthState::is_authenticated)>
            <div class="post-page">
                <header class="post-page__header">
                    <A href="/" attr:class="btn btn--ghost">
                        "←"
                    </A>
                    <h1>"New post"</h1>
                </header>
                <PostForm on_success=on_success/>
            </div>
        </Show>
    }
}
