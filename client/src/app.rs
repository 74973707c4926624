//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::header::Header;
use crate::net::api::client;
use crate::pages::{
    home::HomePage, login::LoginPage, post_detail::PostDetailPage, post_edit::PostEditPage, post_new::PostNewPage,
    register::RegisterPage,
};
use crate::state::auth::AuthState;

/// Root application component.
///
/// Restores the session from the token store, provides it as context, keeps
/// it in step with forced logouts, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let api = client();
    let auth = RwSignal::new(AuthState::restored(api.token_store()));
    provide_context(auth);
    api.on_session_invalidated(move || {
        let _ = auth.try_set(AuthState::default());
    });

    view! {
        <Title text="Forum"/>

        <Router>
            <Header/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=(StaticSegment("posts"), StaticSegment("new")) view=PostNewPage/>
                    <Route path=(StaticSegment("posts"), StaticSegment("edit"), ParamSegment("id")) view=PostEditPage/>
                    <Route path=(StaticSegment("posts"), ParamSegment("id")) view=PostDetailPage/>
                </Routes>
            </main>
        </Router>
    }
}
