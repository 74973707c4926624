//! Post list entry with author-only edit/delete actions.

#[cfg(test)]
#[path = "post_card_test.rs"]
mod post_card_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use forum_api::types::PostSummary;

use crate::state::auth::AuthState;
use crate::util::dialog;

pub fn post_href(id: i64) -> String {
    format!("/posts/{id}")
}

pub fn edit_href(id: i64) -> String {
    format!("/posts/edit/{id}")
}

/// Card linking to the post detail page.
///
/// `on_deleted` fires after a successful delete so the list can refetch.
#[component]
pub fn PostCard(post: PostSummary, on_deleted: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let id = post.id;
    let author = post.username.clone();
    let is_author = move || auth.with(|s| s.is_author(&author));
    let deleting = RwSignal::new(false);

    let on_edit = move |_| {
        if dialog::confirm("Edit this post?") {
            navigate(&edit_href(id), NavigateOptions::default());
        }
    };

    let on_delete = move |_| {
        if deleting.get() || !dialog::confirm("Delete this post?") {
            return;
        }
        deleting.set(true);
        delete_post(id, deleting, on_deleted);
    };

    view! {
        <article class="post-card">
            <A href=post_href(id) attr:class="post-card__link">
                <h3 class="post-card__title">{post.title}</h3>
                <div class="post-card__meta">
                    <span class="post-card__author">{post.username}</span>
                    <span class="post-card__views">{format!("Views {}", post.view)}</span>
                </div>
            </A>
            <Show when=is_author>
                <div class="post-card__actions">
                    <button class="btn btn--ghost" disabled=move || deleting.get() on:click=on_edit.clone()>
                        "Edit"
                    </button>
                    <button class="btn btn--danger" disabled=move || deleting.get() on:click=on_delete>
                        "Delete"
                    </button>
                </div>
            </Show>
        </article>
    }
}

#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
fn delete_post(id: i64, deleting: RwSignal<bool>, on_deleted: Callback<()>) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let api = crate::net::api::client();
        match forum_api::PostApi::new(&api).delete(id).await {
            Ok(_) => on_deleted.run(()),
            Err(e) => {
                if let Some(message) = crate::util::errors::present_error(&e, false) {
                    dialog::alert(&message);
                }
            }
        }
        deleting.set(false);
    });
}
