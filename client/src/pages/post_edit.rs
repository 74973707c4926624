//! Author-only post edit page.
//!
//! DESIGN
//! ======
//! The detail endpoint does not report authorship reliably, so the author is
//! looked up by walking the post list (`PostApi::find_author`) before the
//! current body is fetched into the form.

#[cfg(test)]
#[path = "post_edit_test.rs"]
mod post_edit_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

use forum_api::types::PostDraft;

use crate::components::post_form::PostForm;
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;
use crate::util::validate::parse_post_id;

/// Whether `username` may edit a post written by `author`.
pub fn may_edit(author: &str, username: Option<&str>) -> bool {
    username == Some(author)
}

#[component]
pub fn PostEditPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let params = use_params_map();
    let draft = RwSignal::new(None::<PostDraft>);
    install_unauth_redirect(auth, navigate.clone());

    let post_id = move || params.with(|p| p.get("id")).as_deref().and_then(parse_post_id);

    {
        let navigate = navigate.clone();
        Effect::new(move || {
            let username = auth.with(|s| s.username().map(str::to_owned));
            if !auth.with(AuthState::is_authenticated) {
                return;
            }
            match post_id() {
                Some(id) => load_draft(id, username, draft, navigate.clone()),
                None => navigate("/", NavigateOptions::default()),
            }
        });
    }

    let on_success = Callback::new(move |()| navigate("/", NavigateOptions::default()));

    view! {
        <div class="post-page">
            <Show
                when=move || draft.with(Option::is_some)
                fallback=|| view! { <div class="post-page__loading">"Loading..."</div> }
            >
                <header class="post-page__header">
                    <A href="/" attr:class="btn btn--ghost">
                        "←"
                    </A>
                    <h1>"Edit post"</h1>
                </header>
                <PostForm initial=draft.get_untracked().unwrap_or_default() post_id=post_id().unwrap_or_default() on_success=on_success/>
            </Show>
        </div>
    }
}

#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
fn load_draft<F>(id: i64, username: Option<String>, draft: RwSignal<Option<PostDraft>>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        use crate::util::dialog;
        use crate::util::errors::{AUTHOR_ONLY_MESSAGE, present_error};

        let api = crate::net::api::client();
        let posts = forum_api::PostApi::new(&api);

        let checked = match posts.find_author(id, forum_api::posts::DEFAULT_PAGE_SIZE).await {
            Ok(author) if may_edit(&author, username.as_deref()) => posts.get(id).await,
            Ok(_) => {
                dialog::alert(AUTHOR_ONLY_MESSAGE);
                navigate("/", NavigateOptions::default());
                return;
            }
            Err(e) => Err(e),
        };

        match checked {
            Ok(envelope) => match envelope.into_data() {
                Some(detail) => draft.set(Some(PostDraft::from(&detail))),
                None => navigate("/", NavigateOptions::default()),
            },
            Err(e) if e.is_cancelled() => {}
            Err(e) => {
                if let Some(message) = present_error(&e, true) {
                    dialog::alert(&message);
                }
                navigate("/", NavigateOptions::default());
            }
        }
    });
}
